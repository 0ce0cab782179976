use std::time::{Duration, Instant};

/// Totals over every run in this process. Nothing is persisted.
pub struct GameMetrics {
    pub start_time: Instant,
    /// Wall-clock time of the current run
    pub play_time: Duration,
    pub high_score: usize,
    pub furthest_session: usize,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            play_time: Duration::ZERO,
            high_score: 0,
            furthest_session: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.play_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.play_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: usize, session_index: usize) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.furthest_session = self.furthest_session.max(session_index);
    }

    pub fn format_play_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Session clock as shown in the header, e.g. `3.400 s`
pub fn format_session_time(elapsed: Duration) -> String {
    format!("{:.3} s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.play_time = Duration::from_secs(125);
        assert_eq!(metrics.format_play_time(), "02:05");

        metrics.play_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_play_time(), "61:01");
    }

    #[test]
    fn test_session_time_formatting() {
        assert_eq!(format_session_time(Duration::from_millis(3400)), "3.400 s");
        assert_eq!(format_session_time(Duration::ZERO), "0.000 s");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(12, 2);
        assert_eq!(metrics.high_score, 12);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(9, 4);
        assert_eq!(metrics.high_score, 12); // Should not decrease
        assert_eq!(metrics.furthest_session, 4);
        assert_eq!(metrics.games_played, 2);
    }
}
