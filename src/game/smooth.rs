//! Continuous-movement game engine
//!
//! The head glides under [`apply_input`]; the body is a trail of cell centres
//! the head has passed through, most recent first. Collisions go through
//! [`crate::collision::continuous`], checked against every trail entry except
//! the cell the head currently occupies. There is no vacating-tail exception
//! here: the whole remaining trail counts.

use log::{debug, info};
use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{BoardView, Position, random_free_cell},
};
use crate::collision::{
    CollisionKind,
    continuous::{cell_center, food_hit, predict_collision, snap_to_grid},
};
use crate::motion::{KinematicState, MotionError, Vec2, apply_input};

/// Fixed time step used by the interactive smooth mode
pub const SMOOTH_DT: f64 = 1.0 / 60.0;

/// State of one smooth session
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothState {
    pub head: KinematicState,
    /// Input held since the last key press; `None` brakes
    pub input: Option<Direction>,
    /// Cell centres, index 0 being the head's cell
    pub trail: Vec<Vec2>,
    /// Segments still to be added as the head enters new cells
    pub pending_growth: usize,
    /// `None` once the trail covers every cell
    pub food: Option<Vec2>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: f64,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    pub collision: Option<CollisionKind>,
}

impl SmoothState {
    pub fn head_cell(&self) -> Position {
        snap_to_grid(self.head.position, self.cell_size).into()
    }

    /// Trail entries the head can run into
    pub fn body(&self) -> &[Vec2] {
        self.trail.get(1..).unwrap_or(&[])
    }

    pub fn board(&self) -> BoardView {
        BoardView {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            head: self.head_cell(),
            body: self
                .body()
                .iter()
                .map(|&p| snap_to_grid(p, self.cell_size).into())
                .collect(),
            food: self.food.map(|f| snap_to_grid(f, self.cell_size).into()),
            score: self.score,
            steps: self.steps,
            is_alive: self.is_alive,
            collision: self.collision,
        }
    }
}

/// Result of one smooth tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub terminated: bool,
    pub ate_food: bool,
    pub collision: Option<CollisionKind>,
}

pub struct SmoothEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl SmoothEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a session: head resting at the centre cell, heading right
    pub fn reset(&mut self) -> SmoothState {
        let cell_size = self.config.cell_size;
        let cx = (self.config.grid_width / 2) as i32;
        let cy = (self.config.grid_height / 2) as i32;

        let trail: Vec<Vec2> = (0..self.config.initial_snake_length.max(1) as i32)
            .map(|i| cell_center((cx - i, cy), cell_size))
            .collect();

        let head = KinematicState::new(trail[0], Direction::Right, self.config.speed);
        let food = self.spawn_food(&trail);

        SmoothState {
            head,
            input: Some(Direction::Right),
            trail,
            pending_growth: 0,
            food,
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            cell_size,
            score: 0,
            steps: 0,
            is_alive: true,
            collision: None,
        }
    }

    /// Advance the session by `dt` seconds
    ///
    /// Integrates first, then checks the landing point; a colliding move is
    /// not applied.
    pub fn tick(
        &mut self,
        state: &mut SmoothState,
        action: Action,
        dt: f64,
    ) -> Result<TickOutcome, MotionError> {
        if !state.is_alive {
            return Ok(TickOutcome {
                terminated: true,
                ate_food: false,
                collision: None,
            });
        }

        match action {
            Action::Move(direction) if !state.head.direction.is_opposite(direction) => {
                state.input = Some(direction);
            }
            Action::Stop => state.input = None,
            _ => {}
        }

        let next = apply_input(&state.head, state.input, dt, self.config.accel)?;

        let (hit, kind) = predict_collision(
            state.head.position,
            next.velocity,
            dt,
            state.body(),
            state.grid_width as i32,
            state.grid_height as i32,
            state.cell_size,
            self.config.tolerance,
        );

        if hit {
            state.is_alive = false;
            state.collision = Some(kind);
            state.steps += 1;
            info!(
                "Game over: {} collision near ({:.2}, {:.2}), score {}",
                kind, next.position.x, next.position.y, state.score
            );
            return Ok(TickOutcome {
                terminated: true,
                ate_food: false,
                collision: Some(kind),
            });
        }

        state.head = next;
        self.advance_trail(state);

        let tolerance = self.config.food_tolerance;
        let ate_food = state
            .food
            .is_some_and(|food| food_hit(state.head.position, food, tolerance));
        if ate_food {
            state.score += 1;
            state.pending_growth += 1;
            debug!("Ate food, score {}", state.score);
            state.food = self.spawn_food(&state.trail);
        }

        state.steps += 1;

        Ok(TickOutcome {
            terminated: false,
            ate_food,
            collision: None,
        })
    }

    /// Record the head's cell once it crosses into a new one
    fn advance_trail(&self, state: &mut SmoothState) {
        let center = cell_center(
            snap_to_grid(state.head.position, state.cell_size),
            state.cell_size,
        );
        if state.trail.first() == Some(&center) {
            return;
        }

        state.trail.insert(0, center);
        if state.pending_growth > 0 {
            state.pending_growth -= 1;
        } else {
            state.trail.pop();
        }
    }

    /// Centre of a random cell not covered by the trail
    fn spawn_food(&mut self, trail: &[Vec2]) -> Option<Vec2> {
        let cell_size = self.config.cell_size;
        random_free_cell(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            |cell| trail.contains(&cell_center((cell.x, cell.y), cell_size)),
        )
        .map(|cell| cell_center((cell.x, cell.y), cell_size))
    }
}
