use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub sport_key: String,
    pub commence_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    /// Published spread for the home side; the away side is stored
    /// explicitly as well rather than derived by negation.
    pub home_spread: f64,
    pub away_spread: f64,
    pub week: i32,
    pub odds_api_id: Option<String>,
    pub completed: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub processed: bool,
}

impl Game {
    pub fn spread_for(&self, team_id: Uuid) -> Option<f64> {
        if team_id == self.home_team_id {
            Some(self.home_spread)
        } else if team_id == self.away_team_id {
            Some(self.away_spread)
        } else {
            None
        }
    }
}

/// Game joined with its team names, the shape the frontend lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GameWithTeams {
    pub id: Uuid,
    pub sport_key: String,
    pub commence_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_spread: f64,
    pub away_spread: f64,
    pub week: i32,
    pub completed: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub processed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_spread_for_distinguishes_sides_and_strangers() {
        let game = Game {
            id: Uuid::new_v4(),
            sport_key: "americanfootball_nfl".into(),
            commence_time: Utc::now(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            home_spread: -3.5,
            away_spread: 3.5,
            week: 1,
            odds_api_id: None,
            completed: false,
            home_score: None,
            away_score: None,
            processed: false,
        };

        assert_eq!(game.spread_for(game.home_team_id), Some(-3.5));
        assert_eq!(game.spread_for(game.away_team_id), Some(3.5));
        // A team outside the matchup has no spread; pick creation turns
        // this into a not-found response.
        assert_eq!(game.spread_for(Uuid::new_v4()), None);
    }
}
