use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderBoard {
    pub user: User,
    pub rank: u64,
    pub total_picks: i64,
    pub total_wins: i64,
}
