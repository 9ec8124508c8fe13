use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub team_picked: Uuid,
    pub week: i32,
    /// Spread for the picked side at selection time, kept for display
    /// and audit. Settlement reads the spread on the game row.
    pub spread_at_time: f64,
    pub did_win: Option<bool>,
    pub points_earned: Option<f64>,
    pub created_at: DateTime<Utc>,
}
