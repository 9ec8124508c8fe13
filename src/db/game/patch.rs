use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::errors::AppError;

/// Conditionally flips `processed` from false to true. Returns false
/// when another sweep already owns the game; the caller must not credit
/// any points in that case. Runs on the sweep's transaction so the
/// claim and the pick updates commit or roll back together.
pub async fn claim_game(game_id: Uuid, conn: &mut PgConnection) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE games SET processed = TRUE WHERE id = $1 AND processed = FALSE")
        .bind(game_id)
        .execute(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to claim game {}: {}", game_id, e)))?;

    Ok(result.rows_affected() == 1)
}

/// Writes final scores from the scores feed and marks the game
/// completed. Keyed by the feed's game id since scores arrive from the
/// same provider that created the game.
pub async fn record_final_scores(
    odds_api_id: &str,
    home_score: i32,
    away_score: i32,
    postgres: &PgPool,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE games
        SET home_score = $2, away_score = $3, completed = TRUE
        WHERE odds_api_id = $1 AND processed = FALSE",
    )
    .bind(odds_api_id)
    .bind(home_score)
    .bind(away_score)
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to record scores: {}", e)))?;

    Ok(result.rows_affected() == 1)
}
