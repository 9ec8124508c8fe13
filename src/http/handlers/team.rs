use axum::{Json, extract::State, http::StatusCode};

use crate::{db::team::get_all_teams, models::team::Team, state::AppState};

pub async fn get_all_teams_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Team>>, (StatusCode, String)> {
    let teams = get_all_teams(&state.postgres).await.map_err(|e| {
        tracing::error!("Error retrieving teams: {}", e);
        e.to_response()
    })?;

    Ok(Json(teams))
}
