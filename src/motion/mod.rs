//! Continuous movement
//!
//! Turns directional input into smoothed velocity and position, one step at a
//! time. Everything here is pure; callers keep the returned state.

pub mod integrator;
pub mod vector;

pub use integrator::{DEFAULT_ACCEL, KinematicState, MotionError, apply_input, input_vector};
pub use vector::Vec2;
