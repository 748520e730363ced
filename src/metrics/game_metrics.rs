use std::time::{Duration, Instant};

use crate::collision::CollisionKind;

/// Per-session play statistics shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub wall_deaths: u32,
    pub self_deaths: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            wall_deaths: 0,
            self_deaths: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32, cause: Option<CollisionKind>) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        match cause {
            Some(CollisionKind::Wall) => self.wall_deaths += 1,
            Some(CollisionKind::SelfCollision) => self.self_deaths += 1,
            Some(CollisionKind::None) | None => {}
        }
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
