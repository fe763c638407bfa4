use std::time::{Duration, Instant};

/// Per-session statistics that outlive a single round
#[derive(Debug, Clone)]
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Set while the round is paused
    pub paused_at: Option<Instant>,
    pub high_score: usize,
    pub rounds_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            paused_at: None,
            high_score: 0,
            rounds_played: 0,
        }
    }

    /// Refresh the round clock; paused time is not counted
    pub fn update(&mut self) {
        let now = self.paused_at.unwrap_or_else(Instant::now);
        self.elapsed_time = now.saturating_duration_since(self.start_time);
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.paused_at = None;
    }

    pub fn on_pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    /// Push the start forward by the paused span so the clock resumes where it stopped
    pub fn on_resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            self.start_time += paused_at.elapsed();
        }
    }

    pub fn on_game_over(&mut self, final_score: usize) {
        self.update();
        self.rounds_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
