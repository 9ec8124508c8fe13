use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{errors::AppError, models::pick::Pick};

const PICK_COLUMNS: &str =
    "id, user_id, game_id, team_picked, week, spread_at_time, did_win, points_earned, created_at";

/// Fetches on the sweep's transaction so settlement sees a consistent
/// snapshot of the game's picks.
pub async fn get_picks_by_game(
    game_id: Uuid,
    conn: &mut PgConnection,
) -> Result<Vec<Pick>, AppError> {
    sqlx::query_as::<_, Pick>(&format!(
        "SELECT {PICK_COLUMNS} FROM picks WHERE game_id = $1"
    ))
    .bind(game_id)
    .fetch_all(conn)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch picks for game: {}", e)))
}

pub async fn get_picks_by_week(week: i32, postgres: &PgPool) -> Result<Vec<Pick>, AppError> {
    sqlx::query_as::<_, Pick>(&format!(
        "SELECT {PICK_COLUMNS} FROM picks WHERE week = $1 ORDER BY created_at ASC"
    ))
    .bind(week)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch picks for week {}: {}", week, e)))
}

pub async fn get_picks_by_user(user_id: Uuid, postgres: &PgPool) -> Result<Vec<Pick>, AppError> {
    sqlx::query_as::<_, Pick>(&format!(
        "SELECT {PICK_COLUMNS} FROM picks WHERE user_id = $1 ORDER BY week ASC, created_at ASC"
    ))
    .bind(user_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch picks for user: {}", e)))
}
