use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::user::is_valid_name, errors::AppError, models::User};

pub async fn update_user_name(
    user_id: Uuid,
    new_name: String,
    postgres: &PgPool,
) -> Result<User, AppError> {
    let new_name = new_name.trim().to_string();
    if !is_valid_name(&new_name) {
        return Err(AppError::BadRequest("Invalid display name".into()));
    }

    sqlx::query_as::<_, User>(
        "UPDATE users SET name = $2 WHERE id = $1
        RETURNING id, name, total_points, created_at",
    )
    .bind(user_id)
    .bind(&new_name)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update user name: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

/// Rebuilds a user's total from scratch by summing their settled picks.
/// The total is never adjusted incrementally, so invoking this any
/// number of times converges on the same value.
pub async fn recalculate_user_points(user_id: Uuid, postgres: &PgPool) -> Result<f64, AppError> {
    sqlx::query_scalar::<_, f64>(
        "UPDATE users
        SET total_points = COALESCE(
            (SELECT SUM(points_earned) FROM picks WHERE user_id = $1), 0)
        WHERE id = $1
        RETURNING total_points",
    )
    .bind(user_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to recalculate points for {}: {}", user_id, e))
    })?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}
