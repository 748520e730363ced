use log::{debug, info};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{GameState, Position, Snake, random_free_cell},
};
use crate::collision::CollisionKind;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionKind>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    pub info: StepInfo,
}

/// Grid-locked game engine: one cell per step, exact-cell collisions
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision: None,
                },
            };
        }

        // 180-degree turns are ignored; a grid snake cannot stop
        if let Action::Move(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        let ate_food = state.food == Some(new_head);

        let collision = state.snake.classify_next_move(
            state.grid_width as i32,
            state.grid_height as i32,
            ate_food,
        );

        if collision.is_collision() {
            state.is_alive = false;
            state.collision = Some(collision);
            state.steps += 1;
            info!(
                "Game over: {} collision at {:?}, score {}",
                collision, new_head, state.score
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision: Some(collision),
                },
            };
        }

        state.snake.move_snake(ate_food);

        if ate_food {
            state.score += 1;
            debug!("Ate food at {:?}, length {}", new_head, state.snake.len());
            state.food = self.spawn_food_avoid_snake(&state.snake);
        }

        state.steps += 1;

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision: None,
            },
        }
    }

    /// Spawn food at a random empty position; `None` when the snake fills the grid
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Position> {
        random_free_cell(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            |cell| snake.body.contains(&cell),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 3);
        let food = state.food.unwrap();
        assert!(!state.is_occupied_by_snake(food));
        assert!(state.is_in_bounds(food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.food = Some(Position::new(0, 0));
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, Action::Continue);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.moved_by(1, 0));
    }

    #[test]
    fn test_stop_is_ignored_on_grid() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        let initial_head = state.snake.head();

        engine.step(&mut state, Action::Stop);
        assert_eq!(state.snake.head(), initial_head.moved_by(1, 0));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();

        let head = state.snake.head();
        state.food = Some(head.moved_in_direction(state.snake.direction));
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert!(!state.is_occupied_by_snake(state.food.unwrap()));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Some(Position::new(5, 5)),
            10,
            10,
        );

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.terminated);
        assert!(!state.is_alive);
        assert_eq!(result.info.collision, Some(CollisionKind::Wall));
        assert_eq!(state.collision, Some(CollisionKind::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        let mut state = GameState::new(snake, Some(Position::new(8, 8)), 10, 10);

        // Down: (5,6), (5,5), (4,5), (3,5), (2,5)
        engine.step(&mut state, Action::Move(Direction::Down));
        // Left: (4,6), (5,6), (5,5), (4,5), (3,5)
        engine.step(&mut state, Action::Move(Direction::Left));
        // Up into (4,5), which is not the tail
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.terminated);
        assert_eq!(result.info.collision, Some(CollisionKind::SelfCollision));
    }

    #[test]
    fn test_chasing_tail_is_legal() {
        let mut engine = GameEngine::new(GameConfig::small());

        // Body: (5,5), (4,5), (3,5), (2,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        let mut state = GameState::new(snake, Some(Position::new(8, 8)), 10, 10);

        // Down: (5,6), (5,5), (4,5), (3,5)
        engine.step(&mut state, Action::Move(Direction::Down));
        // Left: (4,6), (5,6), (5,5), (4,5)
        engine.step(&mut state, Action::Move(Direction::Left));
        // Up into (4,5), the tail, which vacates this step
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(!result.terminated);
        assert_eq!(state.snake.head(), Position::new(4, 5));
    }

    #[test]
    fn test_growing_into_tail_collides() {
        let mut engine = GameEngine::new(GameConfig::small());
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        let mut state = GameState::new(snake, Some(Position::new(8, 8)), 10, 10);

        engine.step(&mut state, Action::Move(Direction::Down));
        engine.step(&mut state, Action::Move(Direction::Left));
        // Food sits on the tail cell, so the tail stays put
        state.food = Some(Position::new(4, 5));
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.terminated);
        assert_eq!(result.info.collision, Some(CollisionKind::SelfCollision));
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.snake.direction = Direction::Right;

        engine.step(&mut state, Action::Move(Direction::Left));

        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.is_alive = false;
        let steps_before = state.steps;

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.terminated);
        assert_eq!(state.steps, steps_before);
    }

    #[test]
    fn test_eating_last_free_cell_clears_food() {
        let mut engine = GameEngine::new(GameConfig::new(3, 1));
        // Body (1,0), (0,0) heading right; food on the only free cell
        let snake = Snake::new(Position::new(1, 0), Direction::Right, 2);
        let mut state = GameState::new(snake, Some(Position::new(2, 0)), 3, 1);

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.food, None);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_reset_on_smallest_playable_grid() {
        let mut config = GameConfig::new(2, 1);
        config.initial_snake_length = 1;
        assert!(config.validate().is_ok());

        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        assert_eq!(state.snake.head(), Position::new(1, 0));
        assert_eq!(state.food, Some(Position::new(0, 0)));
    }
}
