use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Command, GameConfig, GameEngine, GameState, Snapshot, SoundEvent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{HudInfo, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    snapshot: Snapshot,
    sounds: Vec<SoundEvent>,
    start_in_ai: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>, start_in_ai: bool) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset().context("Failed to set up the board")?;

        let mut mode = Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            snapshot: Snapshot::new(),
            sounds: Vec::new(),
            start_in_ai,
            should_quit: false,
        };
        mode.begin_game();
        Ok(mode)
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(Duration::from_millis(self.engine.config().sleep_time_ms));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game tick; also repaints
                _ = tick_timer.tick() => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        let hud = self.hud();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.snapshot, &hud);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn hud(&self) -> HudInfo {
        HudInfo {
            cycle: self.state.cycle_num,
            length: self.state.snake.len(),
            score: self.state.score,
            mode: self.state.snake.mode().label(),
            elapsed: self.metrics.format_time(),
            last_sound: self.metrics.last_sound,
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameCommand(command) => {
                    self.engine.apply(&mut self.state, command, &mut self.sounds);
                    self.drain_sounds();
                }
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
            }
        }
    }

    fn update_game(&mut self) {
        let was_over = self.state.game_over;
        self.engine
            .cycle(&mut self.state, &mut self.sounds, &mut self.snapshot);
        self.drain_sounds();

        if self.state.game_over && !was_over {
            self.metrics.on_game_over(self.state.snake.len());
        }
    }

    fn drain_sounds(&mut self) {
        for event in self.sounds.drain(..) {
            tracing::debug!(sound = event.name(), "play");
            self.metrics.on_sound(event);
        }
    }

    fn begin_game(&mut self) {
        self.metrics.on_game_start();
        if self.start_in_ai {
            self.engine
                .apply(&mut self.state, Command::ToggleAi, &mut self.sounds);
        }
        self.engine
            .apply(&mut self.state, Command::PlayFoodSound, &mut self.sounds);
        self.drain_sounds();
    }

    fn reset_game(&mut self) {
        match self.engine.reset() {
            Ok(state) => {
                self.state = state;
                self.begin_game();
            }
            Err(err) => tracing::error!(%err, "could not start a new game"),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
