use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{
    http::handlers::{
        create_user_handler, get_all_teams_handler, get_current_week_games_handler,
        get_leaderboard_handler, get_user_handler, get_user_picks_handler, get_week_games_handler,
        get_week_handler,
        get_week_picks_handler, make_pick_handler, process_completed_games_handler,
        recalculate_all_users_handler, update_games_handler, update_user_name_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/week", get(get_week_handler))
        .route("/games", get(get_current_week_games_handler))
        .route("/games/{week}", get(get_week_games_handler))
        .route("/teams", get(get_all_teams_handler))
        .route("/users", post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/users/{id}", patch(update_user_name_handler))
        .route("/users/{id}/picks", get(get_user_picks_handler))
        .route("/leaderboard", get(get_leaderboard_handler))
        .route("/picks", post(make_pick_handler))
        .route("/picks/{week}", get(get_week_picks_handler))
        .route("/process-completed-games", post(process_completed_games_handler))
        .route("/update-games", post(update_games_handler))
        .route("/recalculate-all-users", post(recalculate_all_users_handler))
        .with_state(state)
}
