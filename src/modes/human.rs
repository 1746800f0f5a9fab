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
use tokio::time::{Instant, interval, sleep_until};
use tracing::info;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, TrailCanvas};

pub struct HumanMode {
    config: GameConfig,
    seed: Option<u64>,
    engine: GameEngine,
    canvas: TrailCanvas,
    game_over: Option<u64>,
    game_over_recorded: bool,
    started_at: Instant,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let engine = Self::new_engine(&config, seed);
        let mut canvas = TrailCanvas::new(config.grid_width, config.grid_height);
        engine.begin(&mut canvas);

        Self {
            config,
            seed,
            engine,
            canvas,
            game_over: None,
            game_over_recorded: false,
            started_at: Instant::now(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    fn new_engine(config: &GameConfig, seed: Option<u64>) -> GameEngine {
        match seed {
            Some(seed) => GameEngine::with_seed(config.clone(), seed),
            None => GameEngine::new(config.clone()),
        }
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

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        self.started_at = Instant::now();

        loop {
            let deadline = self
                .engine
                .next_deadline()
                .map(|offset| self.started_at + offset);

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Engine activities (bombs, movement, clock)
                _ = wait_for(deadline) => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.engine,
                            &self.canvas,
                            &self.metrics,
                            self.game_over,
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
                KeyAction::GameCommand(command) => {
                    self.engine.handle_command(command);
                }
                KeyAction::Restart => {
                    if self.game_over.is_some() {
                        self.reset_game();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let now = self.started_at.elapsed();
        self.engine
            .run_until(now, &mut self.canvas, &mut self.game_over);

        if let (Some(elapsed_secs), false) = (self.game_over, self.game_over_recorded) {
            self.metrics.on_game_over(elapsed_secs);
            self.game_over_recorded = true;
        }
    }

    fn reset_game(&mut self) {
        info!(games_played = self.metrics.games_played, "restarting");
        self.engine = Self::new_engine(&self.config, self.seed);
        self.canvas = TrailCanvas::new(self.config.grid_width, self.config.grid_height);
        self.engine.begin(&mut self.canvas);
        self.game_over = None;
        self.game_over_recorded = false;
        self.started_at = Instant::now();
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

/// Sleep until the engine's next deadline, or forever if nothing is scheduled
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, RenderDirective};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Some(1));
        assert!(!mode.engine.is_over());
        assert!(mode.canvas.has_border());
        assert_eq!(mode.game_over, None);
    }

    #[test]
    fn test_keys_reach_engine() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));

        mode.handle_event(press(KeyCode::Up));
        assert_eq!(mode.engine.snake().direction(), Direction::Up);

        mode.handle_event(press(KeyCode::Down));
        assert_eq!(mode.engine.snake().direction(), Direction::Up);

        mode.handle_event(press(KeyCode::Char('a')));
        assert_eq!(mode.engine.snake().speed(), 5);

        mode.handle_event(press(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_game_over_and_restart() {
        let config = GameConfig::small();
        let mut mode = HumanMode::new(config, Some(1));
        let mut directives: Vec<RenderDirective> = Vec::new();

        // run straight into the right wall
        while !mode.engine.is_over() {
            mode.engine.advance(&mut directives, &mut mode.game_over);
        }
        assert_eq!(mode.game_over, Some(0));
        mode.update_game();
        assert_eq!(mode.metrics.games_played, 1);

        // restart is honoured after game over, ignored while playing
        mode.handle_event(press(KeyCode::Char('r')));
        assert!(!mode.engine.is_over());
        assert_eq!(mode.game_over, None);
        assert_eq!(mode.engine.snake().head, Position::new(32, 32));
        assert!(mode.canvas.trail().is_empty());

        mode.handle_event(press(KeyCode::Char('r')));
        assert_eq!(mode.metrics.games_played, 1);
    }
}
