use sqlx::PgPool;

use crate::{config::SeasonConfig, feed::OddsFeedClient};

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub season: SeasonConfig,
    pub feed: OddsFeedClient,
}
