use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: &PgPool) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, total_points, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

pub async fn get_all_users(postgres: &PgPool) -> Result<Vec<User>, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, total_points, created_at
        FROM users
        ORDER BY total_points DESC, created_at ASC",
    )
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))
}
