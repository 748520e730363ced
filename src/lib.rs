//! FangShift - a Snake game with smooth and grid-locked movement
//!
//! This library provides:
//! - Continuous movement integration (motion module)
//! - Collision evaluation for continuous and grid positions (collision module)
//! - Game engines for both representations (game module)
//! - TUI rendering, input mapping and play modes

pub mod collision;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod motion;
pub mod render;
