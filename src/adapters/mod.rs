//! External collaborators: the rankings backend API.

pub mod rankings_api;

pub use rankings_api::RankingsClient;
