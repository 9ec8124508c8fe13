pub mod get;
pub mod patch;
pub mod post;

pub use get::{
    get_game_by_id, get_game_for_settlement, get_games_by_week, get_unprocessed_completed_games,
};
pub use patch::{claim_game, record_final_scores};
pub use post::upsert_game_from_feed;
