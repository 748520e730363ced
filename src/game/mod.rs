//! Game drivers for Snake
//!
//! Two engines share the same configuration and board view: [`GameEngine`]
//! moves one cell per step with exact-cell collisions, [`SmoothEngine`] glides
//! the head under the continuous integrator. Neither performs I/O.

pub mod action;
pub mod config;
pub mod engine;
pub mod smooth;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig, MotionMode};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use smooth::{SMOOTH_DT, SmoothEngine, SmoothState, TickOutcome};
pub use state::{BoardView, GameState, Position, Snake};
