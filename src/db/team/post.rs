use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::team::Team};

/// Teams are created lazily the first time the odds feed names them.
pub async fn upsert_team(name: &str, postgres: &PgPool) -> Result<Team, AppError> {
    sqlx::query_as::<_, Team>(
        "INSERT INTO teams (id, name)
        VALUES ($1, $2)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to upsert team '{}': {}", name, e)))
}
