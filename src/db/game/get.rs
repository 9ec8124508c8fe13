use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::game::{Game, GameWithTeams},
};

const GAME_COLUMNS: &str = "id, sport_key, commence_time, home_team_id, away_team_id, \
    home_spread, away_spread, week, odds_api_id, completed, home_score, away_score, processed";

pub async fn get_game_by_id(game_id: Uuid, postgres: &PgPool) -> Result<Game, AppError> {
    sqlx::query_as::<_, Game>(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1"))
        .bind(game_id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch game: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
}

/// Re-reads a game on the sweep's transaction after the claim, so
/// settlement always uses the scores currently in the database rather
/// than the pre-transaction snapshot.
pub async fn get_game_for_settlement(
    game_id: Uuid,
    conn: &mut PgConnection,
) -> Result<Game, AppError> {
    sqlx::query_as::<_, Game>(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1"))
        .bind(game_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch game: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
}

pub async fn get_games_by_week(
    week: i32,
    postgres: &PgPool,
) -> Result<Vec<GameWithTeams>, AppError> {
    sqlx::query_as::<_, GameWithTeams>(
        "SELECT g.id, g.sport_key, g.commence_time, g.home_team_id, g.away_team_id,
            ht.name AS home_team_name, awt.name AS away_team_name,
            g.home_spread, g.away_spread, g.week, g.completed,
            g.home_score, g.away_score, g.processed
        FROM games g
        JOIN teams ht ON ht.id = g.home_team_id
        JOIN teams awt ON awt.id = g.away_team_id
        WHERE g.week = $1
        ORDER BY g.commence_time ASC",
    )
    .bind(week)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch games for week {}: {}", week, e)))
}

pub async fn get_unprocessed_completed_games(postgres: &PgPool) -> Result<Vec<Game>, AppError> {
    sqlx::query_as::<_, Game>(&format!(
        "SELECT {GAME_COLUMNS} FROM games
        WHERE completed = TRUE AND processed = FALSE
        ORDER BY commence_time ASC"
    ))
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch unprocessed games: {}", e)))
}
