use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::collision::CollisionKind;
use crate::game::{
    Action, BoardView, GameConfig, GameEngine, GameState, MotionMode, SMOOTH_DT, SmoothEngine,
    SmoothState,
};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// One running game in whichever representation the config selects
enum Session {
    Grid {
        engine: GameEngine,
        state: GameState,
    },
    Smooth {
        engine: SmoothEngine,
        state: SmoothState,
    },
}

impl Session {
    fn start(config: GameConfig) -> Self {
        match config.motion {
            MotionMode::Grid => {
                let mut engine = GameEngine::new(config);
                let state = engine.reset();
                Session::Grid { engine, state }
            }
            MotionMode::Smooth => {
                let mut engine = SmoothEngine::new(config);
                let state = engine.reset();
                Session::Smooth { engine, state }
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Session::Grid { engine, state } => *state = engine.reset(),
            Session::Smooth { engine, state } => *state = engine.reset(),
        }
    }

    /// Advance one tick; returns the cause of death if the game just ended
    fn advance(&mut self, action: Action) -> Result<Option<CollisionKind>> {
        match self {
            Session::Grid { engine, state } => {
                let result = engine.step(state, action);
                Ok(result.info.collision)
            }
            Session::Smooth { engine, state } => {
                let outcome = engine
                    .tick(state, action, SMOOTH_DT)
                    .context("Smooth tick rejected")?;
                Ok(outcome.collision)
            }
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Session::Grid { state, .. } => state.is_alive,
            Session::Smooth { state, .. } => state.is_alive,
        }
    }

    fn score(&self) -> u32 {
        match self {
            Session::Grid { state, .. } => state.score,
            Session::Smooth { state, .. } => state.score,
        }
    }

    fn board(&self) -> BoardView {
        match self {
            Session::Grid { state, .. } => state.board(),
            Session::Smooth { state, .. } => state.board(),
        }
    }
}

/// Interactive terminal play
pub struct HumanMode {
    session: Session,
    tick_interval: Duration,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_action: Option<Action>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let motion = config.motion;
        let tick_interval = match motion {
            MotionMode::Grid => Duration::from_secs_f64(1.0 / config.tick_hz),
            MotionMode::Smooth => Duration::from_secs_f64(SMOOTH_DT),
        };

        Self {
            session: Session::start(config),
            tick_interval,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(motion),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_action: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        // Render at 30 FPS
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    if self.session.is_alive() {
                        self.update_game()?;
                    }
                }

                _ = render_timer.tick() => {
                    if self.session.is_alive() {
                        self.metrics.update();
                    }
                    let board = self.session.board();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &board, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

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
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::GameAction(Action::Continue) | KeyAction::None => {}
            KeyAction::GameAction(action) => self.pending_action = Some(action),
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let action = self.pending_action.take().unwrap_or(Action::Continue);

        if let Some(cause) = self.session.advance(action)? {
            info!("Round over ({}), score {}", cause, self.session.score());
            self.metrics.on_game_over(self.session.score(), Some(cause));
        }

        Ok(())
    }

    fn reset_game(&mut self) {
        self.session.reset();
        self.metrics.on_game_start();
        self.pending_action = None;
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
