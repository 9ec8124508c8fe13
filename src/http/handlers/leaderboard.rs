use axum::{Json, extract::State, http::StatusCode};

use crate::{db::leaderboard::get_leaderboard, models::leaderboard::LeaderBoard, state::AppState};

pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderBoard>>, (StatusCode, String)> {
    let leaderboard = get_leaderboard(&state.postgres).await.map_err(|e| {
        tracing::error!("Failed to get leaderboard: {}", e);
        e.to_response()
    })?;

    Ok(Json(leaderboard))
}
