use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{
    config::SeasonConfig,
    db::{
        game::{post::GameUpsert, record_final_scores, upsert_game_from_feed},
        team::upsert_team,
    },
    errors::AppError,
    scoring::week_number,
};

const ODDS_API_BASE_URL: &str = "https://api.the-odds-api.com/v4";
const SPORT_KEY: &str = "americanfootball_nfl";
const SPREADS_MARKET: &str = "spreads";

#[derive(Debug, Deserialize)]
struct FeedGame {
    id: String,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
    bookmakers: Vec<FeedBookmaker>,
}

#[derive(Debug, Deserialize)]
struct FeedBookmaker {
    markets: Vec<FeedMarket>,
}

#[derive(Debug, Deserialize)]
struct FeedMarket {
    key: String,
    outcomes: Vec<FeedOutcome>,
}

#[derive(Debug, Deserialize)]
struct FeedOutcome {
    name: String,
    point: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FeedScoreEntry {
    id: String,
    completed: bool,
    home_team: String,
    scores: Option<Vec<FeedScore>>,
}

#[derive(Debug, Deserialize)]
struct FeedScore {
    name: String,
    score: String,
}

#[derive(Clone)]
pub struct OddsFeedClient {
    api_key: String,
    client: reqwest::Client,
}

impl OddsFeedClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_odds(&self) -> Result<Vec<FeedGame>, AppError> {
        let url = format!("{ODDS_API_BASE_URL}/sports/{SPORT_KEY}/odds");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", "us"),
                ("markets", SPREADS_MARKET),
                ("oddsFormat", "american"),
                ("dateFormat", "iso"),
            ])
            .send()
            .await
            .map_err(|e| AppError::FeedError(format!("Failed to fetch odds: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::FeedError(format!(
                "Odds API returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Deserialization(format!("Invalid odds response: {}", e)))
    }

    async fn fetch_scores(&self) -> Result<Vec<FeedScoreEntry>, AppError> {
        let url = format!("{ODDS_API_BASE_URL}/sports/{SPORT_KEY}/scores");
        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("daysFrom", "3")])
            .send()
            .await
            .map_err(|e| AppError::FeedError(format!("Failed to fetch scores: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::FeedError(format!(
                "Scores API returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Deserialization(format!("Invalid scores response: {}", e)))
    }

    /// Pulls the current NFL spreads and upserts teams and games. Feed
    /// entries without a usable spreads market are logged and skipped.
    /// Returns how many games were upserted.
    pub async fn update_games(
        &self,
        season: SeasonConfig,
        postgres: &PgPool,
    ) -> Result<usize, AppError> {
        let feed_games = self.fetch_odds().await?;
        tracing::info!("Fetched {} games from the odds feed", feed_games.len());

        let mut upserted = 0;
        for feed_game in feed_games {
            let Some((home_spread, away_spread)) = extract_spreads(&feed_game) else {
                tracing::warn!("No usable spreads for feed game {}, skipping", feed_game.id);
                continue;
            };

            let home = upsert_team(&feed_game.home_team, postgres).await?;
            let away = upsert_team(&feed_game.away_team, postgres).await?;

            let week = week_number(feed_game.commence_time, season.season_start) as i32;
            upsert_game_from_feed(
                GameUpsert {
                    sport_key: SPORT_KEY.into(),
                    commence_time: feed_game.commence_time,
                    home_team_id: home.id,
                    away_team_id: away.id,
                    home_spread,
                    away_spread,
                    week,
                    odds_api_id: feed_game.id,
                },
                postgres,
            )
            .await?;
            upserted += 1;
        }

        tracing::info!("Upserted {} game(s) from the odds feed", upserted);
        Ok(upserted)
    }

    /// Pulls recent final scores and marks the matching games completed.
    /// Returns how many games were updated.
    pub async fn update_scores(&self, postgres: &PgPool) -> Result<usize, AppError> {
        let entries = self.fetch_scores().await?;

        let mut updated = 0;
        for entry in entries {
            if !entry.completed {
                continue;
            }
            let Some((home_score, away_score)) = extract_scores(&entry) else {
                tracing::warn!("Completed feed game {} has no parsable scores", entry.id);
                continue;
            };

            if record_final_scores(&entry.id, home_score, away_score, postgres).await? {
                updated += 1;
            }
        }

        tracing::info!("Recorded final scores for {} game(s)", updated);
        Ok(updated)
    }
}

/// Home and away spread points from the first bookmaker carrying a
/// spreads market, the same source of truth the pool has always used.
fn extract_spreads(game: &FeedGame) -> Option<(f64, f64)> {
    let market = game
        .bookmakers
        .iter()
        .flat_map(|b| b.markets.iter())
        .find(|m| m.key == SPREADS_MARKET)?;

    let point_for = |team: &str| {
        market
            .outcomes
            .iter()
            .find(|o| o.name == team)
            .and_then(|o| o.point)
    };

    Some((point_for(&game.home_team)?, point_for(&game.away_team)?))
}

fn extract_scores(entry: &FeedScoreEntry) -> Option<(i32, i32)> {
    let scores = entry.scores.as_ref()?;
    let mut home = None;
    let mut away = None;
    for s in scores {
        let value = s.score.parse::<i32>().ok()?;
        if s.name == entry.home_team {
            home = Some(value);
        } else {
            away = Some(value);
        }
    }
    Some((home?, away?))
}
