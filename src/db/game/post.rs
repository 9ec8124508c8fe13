use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::game::Game};

pub struct GameUpsert {
    pub sport_key: String,
    pub commence_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_spread: f64,
    pub away_spread: f64,
    pub week: i32,
    pub odds_api_id: String,
}

/// Inserts or refreshes a game from the odds feed. The natural key is
/// the matchup plus kickoff, so a spread move before kickoff updates
/// the stored line instead of duplicating the game.
pub async fn upsert_game_from_feed(game: GameUpsert, postgres: &PgPool) -> Result<Game, AppError> {
    sqlx::query_as::<_, Game>(
        "INSERT INTO games
            (id, sport_key, commence_time, home_team_id, away_team_id,
             home_spread, away_spread, week, odds_api_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (sport_key, commence_time, home_team_id, away_team_id)
        DO UPDATE SET
            home_spread = EXCLUDED.home_spread,
            away_spread = EXCLUDED.away_spread,
            week = EXCLUDED.week,
            odds_api_id = EXCLUDED.odds_api_id
        RETURNING id, sport_key, commence_time, home_team_id, away_team_id,
            home_spread, away_spread, week, odds_api_id, completed,
            home_score, away_score, processed",
    )
    .bind(Uuid::new_v4())
    .bind(&game.sport_key)
    .bind(game.commence_time)
    .bind(game.home_team_id)
    .bind(game.away_team_id)
    .bind(game.home_spread)
    .bind(game.away_spread)
    .bind(game.week)
    .bind(&game.odds_api_id)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to upsert game: {}", e)))
}
