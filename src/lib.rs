pub mod auth;
pub mod config;
mod db;
pub mod errors;
pub mod feed;
mod http;
mod middleware;
pub mod models;
pub mod reconcile;
pub mod scoring;
mod state;

use axum::middleware as axum_middleware;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::net::SocketAddr;

use crate::{config::SeasonConfig, feed::OddsFeedClient};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let postgres = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&postgres)
        .await
        .expect("Failed to run migrations");

    let odds_api_key = std::env::var("ODDS_API_KEY").expect("ODDS_API_KEY must be set");

    let state = AppState {
        postgres,
        season: SeasonConfig::load(),
        feed: OddsFeedClient::new(odds_api_key),
    };

    let global_rate_limiter = create_global_rate_limiter();

    let app = http::create_http_routes(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("NFL picks server running on port {port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
