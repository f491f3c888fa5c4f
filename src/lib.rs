//! Shared pieces of the snake game: the grid engine, the high-score wire
//! types and an HTTP client for the score service.

pub mod api;
pub mod game;
pub mod leaderboard;
pub mod score;

pub use leaderboard::{Leaderboard, LeaderboardItem};
pub use score::{GameScore, NewScore, ScoreEntry, ScoreId};
