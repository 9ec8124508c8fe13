use sqlx::PgPool;

use crate::{errors::AppError, models::team::Team};

pub async fn get_all_teams(postgres: &PgPool) -> Result<Vec<Team>, AppError> {
    sqlx::query_as::<_, Team>("SELECT id, name FROM teams ORDER BY name")
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch teams: {}", e)))
}
