use std::time::{Duration, Instant};

use crate::game::SoundEvent;

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Longest snake seen across games
    pub best_length: usize,
    pub games_played: u32,
    pub last_sound: Option<SoundEvent>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 0,
            games_played: 0,
            last_sound: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.last_sound = None;
    }

    pub fn on_game_over(&mut self, final_length: usize) {
        self.games_played += 1;
        if final_length > self.best_length {
            self.best_length = final_length;
        }
    }

    pub fn on_sound(&mut self, event: SoundEvent) {
        self.last_sound = Some(event);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
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
