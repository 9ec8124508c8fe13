use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::user::is_valid_name, errors::AppError, models::User};

pub async fn create_user(name: String, postgres: &PgPool) -> Result<User, AppError> {
    let name = name.trim().to_string();
    if !is_valid_name(&name) {
        return Err(AppError::BadRequest("Invalid display name".into()));
    }

    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name)
        VALUES ($1, $2)
        RETURNING id, name, total_points, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))
}
