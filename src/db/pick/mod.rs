pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_picks_by_game, get_picks_by_user, get_picks_by_week};
pub use patch::record_pick_outcome;
pub use post::upsert_pick;
