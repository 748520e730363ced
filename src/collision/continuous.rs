//! Tolerance-based collision checks for smooth movement
//!
//! Positions are in game units. The playfield spans
//! `[0, grid_width * cell_size) x [0, grid_height * cell_size)`; two points
//! count as touching when their Euclidean distance is strictly below the
//! tolerance.
//!
//! [`predict_collision`] checks whatever body slice it is given in full. It has
//! no notion of a vacating tail: callers that want one pass the body without
//! its last segment.

use super::CollisionKind;
use crate::motion::Vec2;

pub const DEFAULT_CELL_SIZE: f64 = 1.0;
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// True if `pos` lies outside the playfield
pub fn wall_hit(pos: Vec2, grid_width: i32, grid_height: i32, cell_size: f64) -> bool {
    let max_x = grid_width as f64 * cell_size;
    let max_y = grid_height as f64 * cell_size;
    pos.x < 0.0 || pos.x >= max_x || pos.y < 0.0 || pos.y >= max_y
}

/// True if the head is within `tolerance` of any body point
pub fn self_hit(head: Vec2, body: &[Vec2], tolerance: f64) -> bool {
    body.iter().any(|&segment| head.distance(segment) < tolerance)
}

/// True if the head is close enough to the food to eat it
pub fn food_hit(head: Vec2, food: Vec2, tolerance: f64) -> bool {
    head.distance(food) < tolerance
}

/// Grid cell containing `pos`, truncating toward zero on each axis
///
/// Truncation (not floor) means `-0.5` maps to cell `0`.
pub fn snap_to_grid(pos: Vec2, cell_size: f64) -> (i32, i32) {
    ((pos.x / cell_size) as i32, (pos.y / cell_size) as i32)
}

/// Centre of a grid cell in game units
pub fn cell_center(cell: (i32, i32), cell_size: f64) -> Vec2 {
    Vec2::new(
        (cell.0 as f64 + 0.5) * cell_size,
        (cell.1 as f64 + 0.5) * cell_size,
    )
}

/// Check where `current + velocity * dt` would land
///
/// Walls are checked before the body, so a candidate that is both out of
/// bounds and touching a segment reports [`CollisionKind::Wall`].
#[allow(clippy::too_many_arguments)]
pub fn predict_collision(
    current: Vec2,
    velocity: Vec2,
    dt: f64,
    body: &[Vec2],
    grid_width: i32,
    grid_height: i32,
    cell_size: f64,
    tolerance: f64,
) -> (bool, CollisionKind) {
    let next = current + velocity * dt;

    if wall_hit(next, grid_width, grid_height, cell_size) {
        return (true, CollisionKind::Wall);
    }
    if self_hit(next, body, tolerance) {
        return (true, CollisionKind::SelfCollision);
    }
    (false, CollisionKind::None)
}
