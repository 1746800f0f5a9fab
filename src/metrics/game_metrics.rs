/// Per-process record of how the sessions went.
///
/// Elapsed time is the only score the game keeps.
pub struct GameMetrics {
    pub games_played: u32,
    pub best_time_secs: u64,
    pub last_time_secs: Option<u64>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            games_played: 0,
            best_time_secs: 0,
            last_time_secs: None,
        }
    }

    pub fn on_game_over(&mut self, elapsed_secs: u64) {
        self.games_played += 1;
        self.last_time_secs = Some(elapsed_secs);
        if elapsed_secs > self.best_time_secs {
            self.best_time_secs = elapsed_secs;
        }
    }

    pub fn format_time(total_secs: u64) -> String {
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        assert_eq!(GameMetrics::format_time(125), "02:05");
        assert_eq!(GameMetrics::format_time(0), "00:00");
        assert_eq!(GameMetrics::format_time(3661), "61:01");
    }

    #[test]
    fn test_best_time_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_time_secs, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_time_secs, 10); // Should not decrease
        assert_eq!(metrics.last_time_secs, Some(5));
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.best_time_secs, 15);
        assert_eq!(metrics.games_played, 3);
    }
}
