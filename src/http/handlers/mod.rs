pub mod admin;
pub mod game;
pub mod leaderboard;
pub mod pick;
pub mod team;
pub mod user;

pub use admin::{
    process_completed_games_handler, recalculate_all_users_handler, update_games_handler,
};
pub use game::{get_current_week_games_handler, get_week_games_handler, get_week_handler};
pub use leaderboard::get_leaderboard_handler;
pub use pick::{get_week_picks_handler, make_pick_handler};
pub use team::get_all_teams_handler;
pub use user::{
    create_user_handler, get_user_handler, get_user_picks_handler, update_user_name_handler,
};
