use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::{FIRST_WEEK, LAST_WEEK},
    db::game::get_games_by_week,
    models::game::GameWithTeams,
    scoring::{week_end, week_number, week_start},
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekInfo {
    pub week: u32,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
}

pub async fn get_week_handler(State(state): State<AppState>) -> Json<WeekInfo> {
    let week = week_number(Utc::now(), state.season.season_start);
    Json(WeekInfo {
        week,
        week_start: week_start(week, state.season.season_start),
        week_end: week_end(week, state.season.season_start),
    })
}

pub async fn get_current_week_games_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameWithTeams>>, (StatusCode, String)> {
    let week = week_number(Utc::now(), state.season.season_start);
    fetch_week_games(week as i32, &state).await
}

pub async fn get_week_games_handler(
    Path(week): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<GameWithTeams>>, (StatusCode, String)> {
    if !(FIRST_WEEK as i32..=LAST_WEEK as i32).contains(&week) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Week must be between {} and {}", FIRST_WEEK, LAST_WEEK),
        ));
    }
    fetch_week_games(week, &state).await
}

async fn fetch_week_games(
    week: i32,
    state: &AppState,
) -> Result<Json<Vec<GameWithTeams>>, (StatusCode, String)> {
    let games = get_games_by_week(week, &state.postgres).await.map_err(|e| {
        tracing::error!("Error retrieving games for week {}: {}", week, e);
        e.to_response()
    })?;

    Ok(Json(games))
}
