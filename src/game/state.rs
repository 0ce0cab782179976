use std::time::Duration;

use super::grid::{Cell, Grid, Position};
use super::snake::Snake;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// A live cell cut the snake down to nothing
    Automaton,
}

/// Session bookkeeping: one timed phase between rebirths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Starts at 1, incremented on every rebirth. Also the food target.
    pub index: usize,
    /// Simulated time since the session started
    pub elapsed: Duration,
}

impl Session {
    pub fn first() -> Self {
        Self {
            index: 1,
            elapsed: Duration::ZERO,
        }
    }

    pub fn food_target(&self) -> usize {
        self.index
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub foods: Vec<Position>,
    pub session: Session,
    /// Ticks left during which the tail is kept instead of trimmed
    pub queued_growth: usize,
    /// Longest snake observed over the run
    pub score: usize,
    pub steps: u32,
    pub is_alive: bool,
    pub collision: Option<CollisionType>,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, foods: Vec<Position>) -> Self {
        let score = snake.len();
        Self {
            grid,
            snake,
            foods,
            session: Session::first(),
            queued_growth: 0,
            score,
            steps: 0,
            is_alive: true,
            collision: None,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Write head and body markings onto the grid
    pub fn mark_snake(&mut self) {
        if let Some((&head, rest)) = self.snake.body.split_first() {
            self.grid[head] = Cell::SnakeHead;
            for &segment in rest {
                self.grid[segment] = Cell::SnakeBody;
            }
        }
    }

    pub fn record_score(&mut self) {
        self.score = self.score.max(self.snake.len());
    }
}
