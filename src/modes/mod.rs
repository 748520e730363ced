pub mod demo;
pub mod human;

pub use demo::{DEMO_ACCEL, DemoMode};
pub use human::HumanMode;
