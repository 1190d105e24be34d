//! Autopilot simulation without a terminal.

use anyhow::{Context, Result};

use crate::game::{
    Advance, AudioPort, Command, CollisionType, FoodPlacement, GameConfig, GameEngine, GameState,
    SoundEvent,
};

/// Counts of each sound the engine asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundTally {
    pub food_appear: u32,
    pub crunch: u32,
    pub meow: u32,
}

impl AudioPort for SoundTally {
    fn play(&mut self, event: SoundEvent) {
        match event {
            SoundEvent::FoodAppear => self.food_appear += 1,
            SoundEvent::Crunch => self.crunch += 1,
            SoundEvent::Meow => self.meow += 1,
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub cycles: u64,
    pub length: usize,
    pub food_eaten: u32,
    pub food_skipped: u32,
    pub collision: Option<CollisionType>,
    pub sounds: SoundTally,
}

impl std::fmt::Display for HeadlessSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ending = match self.collision {
            Some(CollisionType::Wall) => "hit a wall",
            Some(CollisionType::SelfCollision) => "bit itself",
            None => "still alive",
        };
        write!(
            f,
            "cycles: {}  length: {}  eaten: {}  skipped food: {}  ({})",
            self.cycles, self.length, self.food_eaten, self.food_skipped, ending
        )
    }
}

pub struct HeadlessMode {
    engine: GameEngine,
    state: GameState,
    max_cycles: u64,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, seed: u64, max_cycles: u64) -> Result<Self> {
        let mut engine = GameEngine::with_seed(config, seed);
        let state = engine.reset().context("Failed to set up the board")?;
        Ok(Self {
            engine,
            state,
            max_cycles,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Let the autopilot play until game over or `max_cycles`
    pub fn run(&mut self) -> HeadlessSummary {
        let mut sounds = SoundTally::default();
        let mut collision = None;
        let mut food_skipped = 0;

        self.engine
            .apply(&mut self.state, Command::ToggleAi, &mut sounds);
        self.engine
            .apply(&mut self.state, Command::PlayFoodSound, &mut sounds);

        while self.state.cycle_num < self.max_cycles && !self.state.game_over {
            let report = self.engine.cycle(&mut self.state, &mut sounds, &mut ());
            if let Some(Advance::Collided(kind)) = report.advance {
                collision = Some(kind);
            }
            if report.food == Some(FoodPlacement::BoardFull) {
                food_skipped += 1;
            }
        }

        let summary = HeadlessSummary {
            cycles: self.state.cycle_num,
            length: self.state.snake.len(),
            food_eaten: self.state.score,
            food_skipped,
            collision,
            sounds,
        };
        tracing::info!(%summary, "headless run finished");
        summary
    }
}
