//! Headless replay of a scripted input sequence
//!
//! Drives the smooth engine at 60 Hz with "right for one second, then down"
//! and prints the head's position and velocity every step. Useful for eyeballing
//! the integrator without a terminal UI.

use anyhow::{Context, Result};
use log::info;
use std::time::Duration;
use tokio::time::interval;

use crate::collision::CollisionKind;
use crate::game::{Action, Direction, GameConfig, SMOOTH_DT, SmoothEngine, SmoothState};
use crate::motion::Vec2;

/// Steps spent heading right before the script turns down
pub const TURN_AFTER_STEPS: u32 = 60;

/// Velocity convergence rate used when neither a flag nor a config file sets one
pub const DEMO_ACCEL: f64 = 8.0;

/// Scripted input for a given step
pub fn scripted_action(step: u32) -> Action {
    if step < TURN_AFTER_STEPS {
        Action::Move(Direction::Right)
    } else {
        Action::Move(Direction::Down)
    }
}

/// One printed line of the demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrame {
    pub step: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub collision: Option<CollisionKind>,
}

impl std::fmt::Display for DemoFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "step={} pos=({:.3}, {:.3}) vel=({:.3}, {:.3})",
            self.step, self.position.x, self.position.y, self.velocity.x, self.velocity.y
        )?;
        if let Some(kind) = self.collision {
            write!(f, " collision={}", kind)?;
        }
        Ok(())
    }
}

pub struct DemoMode {
    engine: SmoothEngine,
    state: SmoothState,
    max_steps: u32,
    pace: Option<Duration>,
    step: u32,
}

impl DemoMode {
    /// `pace` sleeps between steps; `None` runs flat out
    pub fn new(config: GameConfig, max_steps: u32, pace: Option<Duration>) -> Self {
        let mut engine = SmoothEngine::new(config);
        let state = engine.reset();
        Self {
            engine,
            state,
            max_steps,
            pace,
            step: 0,
        }
    }

    /// Run one scripted step; `None` once the script or the game has ended
    pub fn next_frame(&mut self) -> Result<Option<DemoFrame>> {
        if self.step >= self.max_steps || !self.state.is_alive {
            return Ok(None);
        }

        let outcome = self
            .engine
            .tick(&mut self.state, scripted_action(self.step), SMOOTH_DT)
            .with_context(|| format!("Demo step {} failed", self.step))?;

        let frame = DemoFrame {
            step: self.step,
            position: self.state.head.position,
            velocity: self.state.head.velocity,
            collision: outcome.collision,
        };
        self.step += 1;
        Ok(Some(frame))
    }

    pub async fn run(&mut self) -> Result<()> {
        let config = self.engine.config();
        info!(
            "Demo: {}x{} grid, speed {}, accel {}, {} steps",
            config.grid_width, config.grid_height, config.speed, config.accel, self.max_steps
        );

        let mut pacer = self.pace.map(interval);

        while let Some(frame) = self.next_frame()? {
            println!("{}", frame);
            if let Some(timer) = pacer.as_mut() {
                timer.tick().await;
            }
        }

        info!(
            "Demo finished after {} steps, score {}",
            self.step, self.state.score
        );
        Ok(())
    }
}
