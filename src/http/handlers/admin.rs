use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{
    auth::CronGuard,
    db::user::{get_all_users, recalculate_user_points},
    reconcile::{SweepReport, run_sweep},
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: SweepReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGamesResponse {
    pub message: String,
    pub games_upserted: usize,
    pub scores_recorded: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateResponse {
    pub message: String,
    pub users_recalculated: usize,
}

/// Scheduler entrypoint: settle completed games into pick outcomes and
/// user totals.
pub async fn process_completed_games_handler(
    _guard: CronGuard,
    State(state): State<AppState>,
) -> Result<Json<ProcessResponse>, (StatusCode, String)> {
    let report = run_sweep(&state.postgres).await.map_err(|e| {
        tracing::error!("Error processing completed games: {}", e);
        e.to_response()
    })?;

    Ok(Json(ProcessResponse {
        message: "Completed games processed successfully".into(),
        report,
    }))
}

/// Scheduler entrypoint: refresh games and spreads from the odds feed,
/// then pull recent final scores.
pub async fn update_games_handler(
    _guard: CronGuard,
    State(state): State<AppState>,
) -> Result<Json<UpdateGamesResponse>, (StatusCode, String)> {
    let games_upserted = state
        .feed
        .update_games(state.season, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error updating games: {}", e);
            e.to_response()
        })?;

    let scores_recorded = state.feed.update_scores(&state.postgres).await.map_err(|e| {
        tracing::error!("Error updating scores: {}", e);
        e.to_response()
    })?;

    Ok(Json(UpdateGamesResponse {
        message: format!("Games updated successfully. {} games upserted.", games_upserted),
        games_upserted,
        scores_recorded,
    }))
}

/// Repair endpoint: rebuild every user's total from their picks.
pub async fn recalculate_all_users_handler(
    _guard: CronGuard,
    State(state): State<AppState>,
) -> Result<Json<RecalculateResponse>, (StatusCode, String)> {
    let users = get_all_users(&state.postgres).await.map_err(|e| {
        tracing::error!("Error fetching users for recalculation: {}", e);
        e.to_response()
    })?;

    let mut users_recalculated = 0;
    for user in &users {
        match recalculate_user_points(user.id, &state.postgres).await {
            Ok(_) => users_recalculated += 1,
            Err(e) => tracing::error!("Failed to recalculate user {}: {}", user.id, e),
        }
    }

    Ok(Json(RecalculateResponse {
        message: "All user points recalculated successfully".into(),
        users_recalculated,
    }))
}
