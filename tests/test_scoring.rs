use chrono::{Duration, TimeZone, Utc};
use nfl_picks_be::models::game::Game;
use nfl_picks_be::scoring::{
    display_points, potential_points, settle_pick, week_end, week_number, week_start, winning_team,
};
use uuid::Uuid;

fn season_anchor() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 2, 7, 0, 0).unwrap()
}

fn completed_game(home_spread: f64, home_score: i32, away_score: i32) -> Game {
    Game {
        id: Uuid::new_v4(),
        sport_key: "americanfootball_nfl".into(),
        commence_time: season_anchor() + Duration::days(2),
        home_team_id: Uuid::new_v4(),
        away_team_id: Uuid::new_v4(),
        home_spread,
        away_spread: -home_spread,
        week: 1,
        odds_api_id: Some("feed-1".into()),
        completed: true,
        home_score: Some(home_score),
        away_score: Some(away_score),
        processed: false,
    }
}

#[test]
fn test_week_number_spans_full_season() {
    // Every week from 1 to 18 is reachable and in range
    for week in 1..=18u32 {
        let mid_week = season_anchor() + Duration::days(7 * (week as i64 - 1) + 3);
        assert_eq!(week_number(mid_week, season_anchor()), week);
    }
}

#[test]
fn test_week_number_never_leaves_range() {
    let way_before = season_anchor() - Duration::days(365);
    let way_after = season_anchor() + Duration::days(365);
    assert_eq!(week_number(way_before, season_anchor()), 1);
    assert_eq!(week_number(way_after, season_anchor()), 18);
}

#[test]
fn test_week_windows_tile_the_season() {
    for week in 1..18u32 {
        assert_eq!(
            week_end(week, season_anchor()),
            week_start(week + 1, season_anchor())
        );
    }
}

#[test]
fn test_potential_points_is_exactly_base_plus_spread() {
    for spread in [-13.5, -7.0, -3.0, -0.5, 0.0, 0.5, 3.0, 7.0, 13.5] {
        assert_eq!(potential_points(spread), 10.0 + spread);
    }
}

#[test]
fn test_display_points_rounding_does_not_touch_stored_value() {
    let stored = potential_points(-6.25);
    assert_eq!(stored, 3.75);
    assert_eq!(display_points(stored), 3.8);
}

#[test]
fn test_spread_example_from_the_pool_rules() {
    // Home favored by 3, wins 24-20: home pick pays 10 + (-3) = 7,
    // away pick pays nothing.
    let game = completed_game(-3.0, 24, 20);

    let home = settle_pick(&game, game.home_team_id).unwrap();
    assert!(home.did_win);
    assert_eq!(home.points_earned, 7.0);

    let away = settle_pick(&game, game.away_team_id).unwrap();
    assert!(!away.did_win);
    assert_eq!(away.points_earned, 0.0);
}

#[test]
fn test_tie_game_pays_neither_side() {
    let game = completed_game(-3.0, 21, 21);
    assert!(winning_team(&game).is_none());

    for team in [game.home_team_id, game.away_team_id] {
        let settlement = settle_pick(&game, team).unwrap();
        assert!(!settlement.did_win);
        assert_eq!(settlement.points_earned, 0.0);
    }
}

#[test]
fn test_underdog_win_pays_more_than_base() {
    let game = completed_game(-7.5, 13, 17);
    let away = settle_pick(&game, game.away_team_id).unwrap();
    assert!(away.did_win);
    assert_eq!(away.points_earned, 17.5);
}

#[test]
fn test_settlement_requires_both_scores() {
    let mut game = completed_game(-3.0, 24, 20);
    game.away_score = None;
    assert!(settle_pick(&game, game.home_team_id).is_none());
}
