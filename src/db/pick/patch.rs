use sqlx::PgConnection;
use uuid::Uuid;

use crate::errors::AppError;

/// Writes settlement results for one pick. Reconciler-only; runs on the
/// sweep's transaction.
pub async fn record_pick_outcome(
    pick_id: Uuid,
    did_win: bool,
    points_earned: f64,
    conn: &mut PgConnection,
) -> Result<(), AppError> {
    sqlx::query("UPDATE picks SET did_win = $2, points_earned = $3 WHERE id = $1")
        .bind(pick_id)
        .bind(did_win)
        .bind(points_earned)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to update pick {}: {}", pick_id, e))
        })?;

    Ok(())
}
