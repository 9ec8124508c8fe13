pub mod points;
pub mod settle;
pub mod week;

pub use points::{display_points, potential_points};
pub use settle::{Settlement, settle_pick, winning_team};
pub use week::{week_end, week_number, week_start};
