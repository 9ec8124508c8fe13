use uuid::Uuid;

use crate::{models::game::Game, scoring::points::potential_points};

/// Outcome of one pick against a final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub did_win: bool,
    pub points_earned: f64,
}

/// Winner of a completed game, by strictly higher final score.
/// Returns None when scores are missing or the game ended in a tie.
pub fn winning_team(game: &Game) -> Option<Uuid> {
    let (home, away) = (game.home_score?, game.away_score?);
    if home > away {
        Some(game.home_team_id)
    } else if away > home {
        Some(game.away_team_id)
    } else {
        None
    }
}

/// Settles a single pick. A tie counts as a loss for both sides; pushes
/// are not paid out (league policy, see DESIGN.md).
///
/// Returns None when the game has no final scores yet or the picked
/// team is not part of the game, both of which the reconciler treats
/// as skip-and-log.
pub fn settle_pick(game: &Game, team_picked: Uuid) -> Option<Settlement> {
    if game.home_score.is_none() || game.away_score.is_none() {
        return None;
    }
    let spread = game.spread_for(team_picked)?;

    let did_win = winning_team(game) == Some(team_picked);
    let points_earned = if did_win { potential_points(spread) } else { 0.0 };

    Some(Settlement {
        did_win,
        points_earned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn game(home_spread: f64, home_score: Option<i32>, away_score: Option<i32>) -> Game {
        Game {
            id: Uuid::new_v4(),
            sport_key: "americanfootball_nfl".into(),
            commence_time: Utc::now(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            home_spread,
            away_spread: -home_spread,
            week: 1,
            odds_api_id: None,
            completed: true,
            home_score,
            away_score,
            processed: false,
        }
    }

    #[test]
    fn test_home_favorite_wins() {
        let g = game(-3.0, Some(24), Some(20));
        let home = settle_pick(&g, g.home_team_id).unwrap();
        assert!(home.did_win);
        assert_eq!(home.points_earned, 7.0);

        let away = settle_pick(&g, g.away_team_id).unwrap();
        assert!(!away.did_win);
        assert_eq!(away.points_earned, 0.0);
    }

    #[test]
    fn test_away_underdog_wins_outright() {
        let g = game(-7.5, Some(13), Some(17));
        let away = settle_pick(&g, g.away_team_id).unwrap();
        assert!(away.did_win);
        assert_eq!(away.points_earned, 17.5);
    }

    #[test]
    fn test_tie_loses_for_both_sides() {
        let g = game(-3.0, Some(21), Some(21));
        assert_eq!(winning_team(&g), None);

        let home = settle_pick(&g, g.home_team_id).unwrap();
        let away = settle_pick(&g, g.away_team_id).unwrap();
        assert!(!home.did_win && !away.did_win);
        assert_eq!(home.points_earned, 0.0);
        assert_eq!(away.points_earned, 0.0);
    }

    #[test]
    fn test_missing_scores_yield_none() {
        let g = game(-3.0, Some(24), None);
        assert!(settle_pick(&g, g.home_team_id).is_none());
        assert!(winning_team(&g).is_none());
    }

    #[test]
    fn test_unknown_team_yields_none() {
        let g = game(-3.0, Some(24), Some(20));
        assert!(settle_pick(&g, Uuid::new_v4()).is_none());
    }
}
