pub mod game_metrics;

pub use game_metrics::{format_session_time, GameMetrics};
