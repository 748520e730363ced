use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::vector::Vec2;
use crate::game::Direction;

/// Default rate at which velocity converges on its target, per second
pub const DEFAULT_ACCEL: f64 = 10.0;

/// Errors raised when the integrator is called outside its input domain
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MotionError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("acceleration rate must be finite and positive, got {0}")]
    InvalidAccel(f64),
}

/// Head kinematics for smooth movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vec2,
    /// Last nonzero input applied; informational only
    pub direction: Direction,
    /// Scalar speed in units per second
    pub speed: f64,
    pub velocity: Vec2,
}

impl KinematicState {
    /// A state at rest
    pub fn new(position: Vec2, direction: Direction, speed: f64) -> Self {
        Self {
            position,
            direction,
            speed,
            velocity: Vec2::ZERO,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO
    }
}

/// Unit vector for an input, `None` being the zero vector
pub fn input_vector(input: Option<Direction>) -> Vec2 {
    match input {
        Some(direction) => {
            let (dx, dy) = direction.delta();
            Vec2::new(dx as f64, dy as f64)
        }
        None => Vec2::ZERO,
    }
}

/// Advance `state` by one step of `dt` seconds under `input`
///
/// Velocity is interpolated toward `input * speed` by `min(accel * dt, 1.0)`,
/// then position is integrated with the new velocity. A `None` input brakes
/// with the same law.
pub fn apply_input(
    state: &KinematicState,
    input: Option<Direction>,
    dt: f64,
    accel: f64,
) -> Result<KinematicState, MotionError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(MotionError::InvalidTimeStep(dt));
    }
    if !accel.is_finite() || accel <= 0.0 {
        return Err(MotionError::InvalidAccel(accel));
    }

    let target = input_vector(input) * state.speed;
    let blend = (accel * dt).min(1.0);
    let velocity = state.velocity.lerp(target, blend);

    Ok(KinematicState {
        position: state.position + velocity * dt,
        direction: input.unwrap_or(state.direction),
        speed: state.speed,
        velocity,
    })
}
