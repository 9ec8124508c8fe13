pub mod game;
pub mod leaderboard;
pub mod pick;
pub mod team;
pub mod user;

pub use user::User;
