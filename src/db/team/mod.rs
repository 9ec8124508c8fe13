pub mod get;
pub mod post;

pub use get::get_all_teams;
pub use post::upsert_team;
