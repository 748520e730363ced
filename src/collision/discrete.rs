//! Exact-cell collision checks for grid-locked movement

use super::CollisionKind;
use crate::game::{Direction, Position};

/// True if `cell` lies outside a `width` x `height` grid
pub fn wall_hit(cell: Position, width: i32, height: i32) -> bool {
    cell.x < 0 || cell.y < 0 || cell.x >= width || cell.y >= height
}

/// True if the head (`body[0]`) overlaps any other segment
pub fn self_hit(body: &[Position]) -> bool {
    match body.split_first() {
        Some((head, rest)) => rest.contains(head),
        None => false,
    }
}

/// Classify moving `head` one cell in `direction`
///
/// Unless the snake grows this tick its tail cell is vacated as the head
/// moves, so stepping onto the current tail is legal. When growing, the tail
/// stays put and counts as occupied.
pub fn classify_move(
    head: Position,
    direction: Direction,
    body: &[Position],
    width: i32,
    height: i32,
    will_grow: bool,
) -> CollisionKind {
    let next = head.moved_in_direction(direction);

    if wall_hit(next, width, height) {
        return CollisionKind::Wall;
    }

    let occupied = if will_grow {
        body
    } else {
        body.split_last().map_or(body, |(_, rest)| rest)
    };

    if occupied.contains(&next) {
        CollisionKind::SelfCollision
    } else {
        CollisionKind::None
    }
}

/// True if moving `head` one cell in `direction` ends the game
pub fn predict_collision(
    head: Position,
    direction: Direction,
    body: &[Position],
    width: i32,
    height: i32,
    will_grow: bool,
) -> bool {
    classify_move(head, direction, body, width, height, will_grow).is_collision()
}
