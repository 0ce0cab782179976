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
use tracing::debug;

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{HeadingLatch, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render rate, independent of the simulation tick rate
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    heading: HeadingLatch,
    should_quit: bool,
    paused: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            heading: HeadingLatch::default(),
            should_quit: false,
            paused: false,
        }
    }

    /// Best score over every run played in this process
    pub fn high_score(&self) -> usize {
        self.metrics.high_score
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

        let mut tick_timer = interval(self.engine.config().tick_interval());
        let mut render_timer = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_alive && !self.paused {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.state.is_alive {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            self.engine.config(),
                            &self.metrics,
                            self.paused,
                        );
                    }).context("Failed to draw frame")?;
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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(Action::Move(dir)) => {
                    if !self.paused {
                        self.heading.offer(dir);
                    }
                }
                KeyAction::GameAction(Action::Continue) => {}
                KeyAction::Pause => {
                    self.paused = !self.paused;
                    self.heading.clear();
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let tick = self.engine.tick(&mut self.state, self.heading.take());

        if tick.info.reborn {
            debug!(session = tick.session_index, "rebirth");
        }

        if tick.is_terminal {
            let score = self.engine.finalize(&self.state);
            self.metrics.on_game_over(score, self.state.session.index);
        }
    }

    fn reset_game(&mut self) {
        if self.state.is_alive {
            self.state.record_score();
            self.metrics
                .on_game_over(self.state.score, self.state.session.index);
        }
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.heading.clear();
        self.paused = false;
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
