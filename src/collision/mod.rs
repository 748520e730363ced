//! Collision evaluation for both movement representations
//!
//! [`continuous`] works on floating point positions with a distance tolerance,
//! [`discrete`] on exact grid cells with tail-vacate semantics. The two are
//! alternatives and never call each other.

pub mod continuous;
pub mod discrete;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollisionKind {
    #[default]
    None,
    /// Left the playfield
    Wall,
    /// Ran into its own body
    SelfCollision,
}

impl CollisionKind {
    pub fn is_collision(&self) -> bool {
        !matches!(self, CollisionKind::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::None => "none",
            CollisionKind::Wall => "wall",
            CollisionKind::SelfCollision => "self",
        }
    }
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
