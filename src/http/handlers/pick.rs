use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::pick::{get_picks_by_week, upsert_pick},
    models::pick::Pick,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakePickPayload {
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub team_picked: Uuid,
}

pub async fn make_pick_handler(
    State(state): State<AppState>,
    Json(payload): Json<MakePickPayload>,
) -> Result<Json<Pick>, (StatusCode, String)> {
    let pick = upsert_pick(
        payload.user_id,
        payload.game_id,
        payload.team_picked,
        &state.postgres,
    )
    .await
    .map_err(|e| {
        tracing::error!("Error saving pick: {}", e);
        e.to_response()
    })?;

    tracing::info!(
        "Pick saved: user {} picked team {} for game {}",
        pick.user_id,
        pick.team_picked,
        pick.game_id
    );
    Ok(Json(pick))
}

pub async fn get_week_picks_handler(
    State(state): State<AppState>,
    Path(week): Path<i32>,
) -> Result<Json<Vec<Pick>>, (StatusCode, String)> {
    let picks = get_picks_by_week(week, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving picks for week {}: {}", week, e);
            e.to_response()
        })?;

    Ok(Json(picks))
}
