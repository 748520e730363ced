use rand::{Rng, seq::IteratorRandom};
use serde::{Deserialize, Serialize};

use super::action::Direction;
use crate::collision::{CollisionKind, discrete};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The grid snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = Vec::with_capacity(length.max(1));
        let mut cell = head;
        body.push(cell);
        for _ in 1..length {
            cell = cell.moved_in_direction(back);
            body.push(cell);
        }

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments excluding the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// What moving one cell in the current direction would run into
    pub fn classify_next_move(&self, width: i32, height: i32, will_grow: bool) -> CollisionKind {
        discrete::classify_move(
            self.head(),
            self.direction,
            &self.body,
            width,
            height,
            will_grow,
        )
    }

    /// Move snake in current direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete grid game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` once the snake covers every cell
    pub food: Option<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    /// Cause of death once the game is over
    pub collision: Option<CollisionKind>,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
            collision: None,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        !discrete::wall_hit(pos, self.grid_width as i32, self.grid_height as i32)
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    pub fn board(&self) -> BoardView {
        BoardView {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            head: self.snake.head(),
            body: self.snake.body_segments().to_vec(),
            food: self.food,
            score: self.score,
            steps: self.steps,
            is_alive: self.is_alive,
            collision: self.collision,
        }
    }
}

/// Uniformly random cell of a `width` x `height` grid that `is_occupied`
/// rejects, or `None` when every cell is taken
pub fn random_free_cell<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    is_occupied: impl Fn(Position) -> bool,
) -> Option<Position> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|&cell| !is_occupied(cell))
        .choose(rng)
}

/// Grid snapshot handed to the renderer, whichever engine produced it
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub grid_width: usize,
    pub grid_height: usize,
    pub head: Position,
    pub body: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    pub collision: Option<CollisionKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(4, 5));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body.last(), Some(&Position::new(3, 5)));

        let down = Snake::new(Position::new(2, 2), Direction::Down, 2);
        assert_eq!(down.body, vec![Position::new(2, 2), Position::new(2, 1)]);
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.move_snake(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.move_snake(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_classify_next_move_chases_tail() {
        // A 2x2 loop: head (2,3) heading down into the tail at (2,4)
        let snake = Snake {
            body: vec![
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 4),
                Position::new(2, 4),
            ],
            direction: Direction::Down,
        };
        assert_eq!(snake.classify_next_move(10, 10, false), CollisionKind::None);
        assert_eq!(
            snake.classify_next_move(10, 10, true),
            CollisionKind::SelfCollision
        );
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Some(Position::new(10, 10)),
            20,
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
        assert!(state.is_occupied_by_snake(Position::new(3, 5)));
    }

    #[test]
    fn test_board_view() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Some(Position::new(1, 1)),
            10,
            8,
        );
        let board = state.board();
        assert_eq!(board.head, Position::new(5, 5));
        assert_eq!(board.body, vec![Position::new(4, 5), Position::new(3, 5)]);
        assert_eq!(board.food, Some(Position::new(1, 1)));
        assert_eq!((board.grid_width, board.grid_height), (10, 8));
        assert!(board.is_alive);
    }

    #[test]
    fn test_random_free_cell_avoids_occupied_cells() {
        let mut rng = rand::thread_rng();
        let taken = [Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)];
        for _ in 0..20 {
            let cell = random_free_cell(&mut rng, 2, 2, |c| taken.contains(&c));
            assert_eq!(cell, Some(Position::new(1, 1)));
        }
    }

    #[test]
    fn test_random_free_cell_full_grid() {
        let mut rng = rand::thread_rng();
        assert_eq!(random_free_cell(&mut rng, 2, 1, |_| true), None);
        assert_eq!(random_free_cell(&mut rng, 0, 0, |_| false), None);
    }
}
