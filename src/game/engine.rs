use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    action::{Command, Direction, SnakeMode},
    autopilot,
    cell::Position,
    config::GameConfig,
    error::Result,
    food::FoodPlacement,
    ports::{AudioPort, SoundEvent, SoundSet, ViewPort},
    state::{CollisionType, GameState},
};

/// What happened to the snake on a move tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Stepped into an open cell
    Moved { head: Position },
    /// Ate the food at `head` and grew by one
    Ate { head: Position },
    /// Hit something; the snake did not move
    Collided(CollisionType),
}

/// Summary of one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Cycle number this report belongs to
    pub cycle: u64,
    /// Set on move ticks
    pub advance: Option<Advance>,
    /// Set when food placement was attempted
    pub food: Option<FoodPlacement>,
    /// Whether the game has ended
    pub game_over: bool,
}

/// The game engine that handles all game logic.
///
/// The engine owns the random source and per-cycle sound bookkeeping; the
/// [`GameState`] it drives is owned by the host.
pub struct GameEngine<R: Rng = ChaCha8Rng> {
    config: GameConfig,
    rng: R,
    played: SoundSet,
}

impl GameEngine<ChaCha8Rng> {
    /// Create a new game engine seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            played: SoundSet::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game: fresh board, snake in the corner heading east
    pub fn reset(&mut self) -> Result<GameState> {
        self.played.clear();
        let state = GameState::new(&self.config)?;
        tracing::info!(
            rows = state.board.num_rows(),
            cols = state.board.num_columns(),
            "new game"
        );
        Ok(state)
    }

    /// Run one tick: maybe move, maintain food, render, count the cycle.
    ///
    /// After game over only the render step runs.
    pub fn cycle(
        &mut self,
        state: &mut GameState,
        audio: &mut dyn AudioPort,
        view: &mut dyn ViewPort,
    ) -> CycleReport {
        if state.game_over {
            view.render(&*state);
            self.played.clear();
            return CycleReport {
                cycle: state.cycle_num,
                advance: None,
                food: None,
                game_over: true,
            };
        }

        let cycle = state.cycle_num;
        let advance = self.update_snake(state, audio);
        let food = self.update_food(state);
        view.render(&*state);
        state.cycle_num += 1;
        self.played.clear();

        CycleReport {
            cycle,
            advance,
            food,
            game_over: state.game_over,
        }
    }

    /// Move the snake once every `refresh_rate` cycles
    pub fn update_snake(
        &mut self,
        state: &mut GameState,
        audio: &mut dyn AudioPort,
    ) -> Option<Advance> {
        if state.cycle_num % self.config.refresh_rate != 0 {
            return None;
        }
        let next = self.next_head_cell(state);
        Some(self.advance_snake(state, next, audio))
    }

    /// Cell the head would enter this move: autopilot or current heading
    pub fn next_head_cell(&self, state: &mut GameState) -> Position {
        let head = state.snake.head();
        match state.snake.mode() {
            SnakeMode::Ai(_) => autopilot::next_cell_from_bfs(&mut state.board, head),
            SnakeMode::Going(dir) => state.board.neighbor(head, dir),
        }
    }

    /// Move the head into `next`, which must be adjacent to it
    pub fn advance_snake(
        &mut self,
        state: &mut GameState,
        next: Position,
        audio: &mut dyn AudioPort,
    ) -> Advance {
        let cell = state.board.cell(next);

        if cell.is_wall() || cell.is_body() {
            let collision = if cell.is_wall() {
                CollisionType::Wall
            } else {
                CollisionType::SelfCollision
            };
            self.game_over(state, collision, audio);
            return Advance::Collided(collision);
        }

        if cell.is_food() {
            self.emit(audio, SoundEvent::Crunch);
            state.food.consume(next);
            state.snake.advance(&mut state.board, next, true);
            state.score += 1;
            tracing::debug!(?next, len = state.snake.len(), "ate food");
            Advance::Ate { head: next }
        } else {
            state.snake.advance(&mut state.board, next, false);
            Advance::Moved { head: next }
        }
    }

    /// Add food when there is none, and every `food_add_rate` cycles
    pub fn update_food(&mut self, state: &mut GameState) -> Option<FoodPlacement> {
        if !state.food.is_empty() && state.cycle_num % self.config.food_add_rate != 0 {
            return None;
        }
        Some(state.food.add_food(
            &mut state.board,
            state.snake.len(),
            self.config.min_free_ratio,
            &mut self.rng,
        ))
    }

    /// Apply a host command between ticks
    pub fn apply(&mut self, state: &mut GameState, command: Command, audio: &mut dyn AudioPort) {
        if command == Command::PlayFoodSound {
            self.emit(audio, SoundEvent::FoodAppear);
            return;
        }
        if state.game_over {
            tracing::debug!(?command, "ignoring command after game over");
            return;
        }

        let snake = &mut state.snake;
        match command {
            Command::SetDirection(dir) => snake.set_mode(SnakeMode::Going(dir)),
            Command::ToggleAi => snake.set_mode(SnakeMode::Ai(snake.mode().heading())),
            Command::Reverse => snake.reverse(&mut state.board),
            Command::Fallback => {
                if !snake.in_ai_mode() {
                    snake.set_mode(SnakeMode::Going(Direction::East));
                }
            }
            Command::PlayFoodSound => {}
        }
        tracing::debug!(?command, mode = snake.mode().label(), "command applied");
    }

    fn game_over(&mut self, state: &mut GameState, collision: CollisionType, audio: &mut dyn AudioPort) {
        state.game_over = true;
        tracing::info!(
            ?collision,
            cycle = state.cycle_num,
            len = state.snake.len(),
            score = state.score,
            "game over"
        );
        self.emit(audio, SoundEvent::Meow);
    }

    /// Play `event` unless it already played this cycle
    fn emit(&mut self, audio: &mut dyn AudioPort, event: SoundEvent) {
        if self.played.insert(event) {
            audio.play(event);
        }
    }
}
