use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{
        game::{claim_game, get_game_for_settlement, get_unprocessed_completed_games},
        pick::{get_picks_by_game, record_pick_outcome},
        user::recalculate_user_points,
    },
    errors::AppError,
    models::{game::Game, pick::Pick},
    scoring::{Settlement, settle_pick},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Processed,
    Skipped,
    Failed,
}

/// Per-game entry in the sweep report, so the scheduler can see which
/// games settled and which need attention.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub game_id: Uuid,
    pub status: GameStatus,
    pub picks_updated: usize,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub processed_game_count: usize,
    pub games: Vec<GameOutcome>,
    pub users_recalculated: usize,
}

/// How one game's settlement attempt ended. Anything but `Settled`
/// leaves the database untouched.
#[derive(Debug, Clone, PartialEq)]
enum SettleResult {
    Settled {
        picks_updated: usize,
        users: Vec<Uuid>,
    },
    AlreadyClaimed,
    MissingScores,
}

/// Settles every completed, unprocessed game into pick outcomes and
/// rebuilds the affected users' totals.
///
/// Each game is claimed and settled in its own transaction; the
/// conditional `processed` flip is the serialization point, so two
/// concurrent sweeps can never both credit the same game. Errors stay
/// scoped to the game they hit and the sweep moves on.
pub async fn run_sweep(postgres: &PgPool) -> Result<SweepReport, AppError> {
    let games = get_unprocessed_completed_games(postgres).await?;
    tracing::info!("Reconciling {} completed game(s)", games.len());

    let mut outcomes = Vec::with_capacity(games.len());
    let mut affected_users: Vec<Uuid> = Vec::new();

    for game in games {
        let game_id = game.id;
        match settle_game(game_id, postgres).await {
            Ok(result) => {
                if let SettleResult::Settled { users, .. } = &result {
                    for user in users {
                        if !affected_users.contains(user) {
                            affected_users.push(*user);
                        }
                    }
                }
                outcomes.push(outcome_for(game_id, &result));
            }
            Err(e) => {
                tracing::error!("Failed to settle game {}: {}", game_id, e);
                outcomes.push(GameOutcome {
                    game_id,
                    status: GameStatus::Failed,
                    picks_updated: 0,
                    detail: Some(e.to_string()),
                });
            }
        }
    }

    let mut users_recalculated = 0;
    for user_id in &affected_users {
        match recalculate_user_points(*user_id, postgres).await {
            Ok(total) => {
                tracing::info!("Recalculated user {} total to {}", user_id, total);
                users_recalculated += 1;
            }
            Err(e) => tracing::error!("Failed to recalculate user {}: {}", user_id, e),
        }
    }

    let processed_game_count = outcomes
        .iter()
        .filter(|o| o.status == GameStatus::Processed)
        .count();

    Ok(SweepReport {
        processed_game_count,
        games: outcomes,
        users_recalculated,
    })
}

/// Claims and settles one game atomically.
///
/// The game row is re-read on the transaction after the claim succeeds:
/// a score correction may have committed between the sweep's snapshot
/// and the claim, and settlement must follow the stored scores. When
/// the re-read row has no scores the transaction is dropped, which
/// rolls the claim back so a later sweep can pick the game up.
async fn settle_game(game_id: Uuid, postgres: &PgPool) -> Result<SettleResult, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    if !claim_game(game_id, &mut *tx).await? {
        return Ok(SettleResult::AlreadyClaimed);
    }

    let game = get_game_for_settlement(game_id, &mut *tx).await?;
    if game.home_score.is_none() || game.away_score.is_none() {
        tracing::warn!("Game {} is completed but missing final scores", game_id);
        return Ok(SettleResult::MissingScores);
    }

    let picks = get_picks_by_game(game_id, &mut *tx).await?;
    let settlements = settlements_for(&game, &picks);

    let mut users = Vec::new();
    for (pick_id, user_id, settlement) in &settlements {
        record_pick_outcome(*pick_id, settlement.did_win, settlement.points_earned, &mut *tx)
            .await?;
        if !users.contains(user_id) {
            users.push(*user_id);
        }
    }

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit game settlement: {}", e)))?;

    tracing::info!(
        "Settled game {} ({} pick(s) updated)",
        game_id,
        settlements.len()
    );

    Ok(SettleResult::Settled {
        picks_updated: settlements.len(),
        users,
    })
}

/// Settles a game's picks against the given game row. Picks naming a
/// team outside the game are logged and left untouched.
fn settlements_for(game: &Game, picks: &[Pick]) -> Vec<(Uuid, Uuid, Settlement)> {
    picks
        .iter()
        .filter_map(|pick| {
            let Some(settlement) = settle_pick(game, pick.team_picked) else {
                tracing::warn!(
                    "Pick {} references team {} outside game {}, skipping",
                    pick.id,
                    pick.team_picked,
                    game.id
                );
                return None;
            };
            Some((pick.id, pick.user_id, settlement))
        })
        .collect()
}

fn outcome_for(game_id: Uuid, result: &SettleResult) -> GameOutcome {
    match result {
        SettleResult::Settled { picks_updated, .. } => GameOutcome {
            game_id,
            status: GameStatus::Processed,
            picks_updated: *picks_updated,
            detail: None,
        },
        SettleResult::AlreadyClaimed => GameOutcome {
            game_id,
            status: GameStatus::Skipped,
            picks_updated: 0,
            detail: Some("already claimed by another sweep".into()),
        },
        SettleResult::MissingScores => GameOutcome {
            game_id,
            status: GameStatus::Skipped,
            picks_updated: 0,
            detail: Some("missing final scores".into()),
        },
    }
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
            odds_api_id: Some("feed-1".into()),
            completed: true,
            home_score,
            away_score,
            processed: false,
        }
    }

    fn pick(game: &Game, team_picked: Uuid) -> Pick {
        Pick {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            game_id: game.id,
            team_picked,
            week: game.week,
            spread_at_time: game.spread_for(team_picked).unwrap_or(0.0),
            did_win: None,
            points_earned: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_settlements_follow_the_row_they_are_given() {
        // The sweep's snapshot had home winning 24-20, but a score
        // correction committed before the claim flipped it to 24-27.
        // Settlement runs against the re-read row, so the away pick
        // must be the one credited.
        let stale = game(-3.0, Some(24), Some(20));
        let mut fresh = stale.clone();
        fresh.home_score = Some(24);
        fresh.away_score = Some(27);

        let home_pick = pick(&fresh, fresh.home_team_id);
        let away_pick = pick(&fresh, fresh.away_team_id);
        let picks = vec![home_pick.clone(), away_pick.clone()];

        let settlements = settlements_for(&fresh, &picks);
        assert_eq!(settlements.len(), 2);

        let (_, _, home) = settlements
            .iter()
            .find(|(id, _, _)| *id == home_pick.id)
            .unwrap();
        let (_, _, away) = settlements
            .iter()
            .find(|(id, _, _)| *id == away_pick.id)
            .unwrap();

        assert!(!home.did_win);
        assert_eq!(home.points_earned, 0.0);
        assert!(away.did_win);
        assert_eq!(away.points_earned, 13.0);
    }

    #[test]
    fn test_settlements_skip_picks_outside_the_game() {
        let g = game(-3.0, Some(24), Some(20));
        let good = pick(&g, g.home_team_id);
        let stray = pick(&g, Uuid::new_v4());

        let settlements = settlements_for(&g, &[good.clone(), stray]);
        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].0, good.id);
    }

    #[test]
    fn test_lost_claim_reports_skipped_with_no_picks() {
        let game_id = Uuid::new_v4();
        let outcome = outcome_for(game_id, &SettleResult::AlreadyClaimed);
        assert_eq!(outcome.status, GameStatus::Skipped);
        assert_eq!(outcome.picks_updated, 0);
        assert!(outcome.detail.as_deref().unwrap().contains("claimed"));
    }

    #[test]
    fn test_missing_scores_report_skipped() {
        let outcome = outcome_for(Uuid::new_v4(), &SettleResult::MissingScores);
        assert_eq!(outcome.status, GameStatus::Skipped);
        assert_eq!(outcome.picks_updated, 0);
        assert!(outcome.detail.as_deref().unwrap().contains("scores"));
    }

    #[test]
    fn test_settled_games_report_processed_counts() {
        let result = SettleResult::Settled {
            picks_updated: 3,
            users: vec![Uuid::new_v4()],
        };
        let outcome = outcome_for(Uuid::new_v4(), &result);
        assert_eq!(outcome.status, GameStatus::Processed);
        assert_eq!(outcome.picks_updated, 3);
        assert!(outcome.detail.is_none());
    }
}
