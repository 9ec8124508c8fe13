use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::{
        pick::get_picks_by_user,
        user::{create_user, get_user_by_id, update_user_name},
    },
    models::{User, pick::Pick},
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateUserPayload {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateUserNamePayload {
    pub name: String,
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    match create_user(payload.name, &state.postgres).await {
        Ok(user) => {
            tracing::info!("User created: {} (ID: {})", user.name, user.id);
            Ok(Json(user))
        }
        Err(err) => {
            tracing::error!("Error creating user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = get_user_by_id(user_id, &state.postgres).await.map_err(|e| {
        tracing::error!("Error retrieving user: {}", e);
        e.to_response()
    })?;

    Ok(Json(user))
}

pub async fn update_user_name_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserNamePayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = update_user_name(user_id, payload.name, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error updating user name: {}", e);
            e.to_response()
        })?;

    tracing::info!("User {} renamed to {}", user.id, user.name);
    Ok(Json(user))
}

pub async fn get_user_picks_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Pick>>, (StatusCode, String)> {
    let picks = get_picks_by_user(user_id, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving picks for user {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(picks))
}
