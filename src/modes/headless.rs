//! Headless mode: run the simulation without a terminal
//!
//! The snake is steered by a greedy autopilot that heads for the nearest
//! food and avoids walls, its own body and live cells one step ahead.
//! Useful for soak runs and for watching the board evolve in the logs.

use anyhow::Result;
use tracing::{debug, info};

use crate::game::{Cell, Direction, GameConfig, GameEngine, GameState, Position};

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    pub score: usize,
    pub sessions: usize,
    pub ticks: u32,
    /// False if the tick limit ran out first
    pub finished: bool,
}

pub struct HeadlessMode {
    engine: GameEngine,
    state: GameState,
    max_ticks: u32,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, max_ticks: u32) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self {
            engine,
            state,
            max_ticks,
        }
    }

    pub fn run(&mut self) -> Result<HeadlessReport> {
        let mut ticks = 0;

        while ticks < self.max_ticks {
            let heading = autopilot(&self.state);
            let tick = self.engine.tick(&mut self.state, heading);
            ticks += 1;

            if tick.info.reborn {
                info!(session = tick.session_index, score = tick.score, "new session");
            }
            if tick.info.truncated > 0 {
                debug!(lost = tick.info.truncated, "snake cut by live cells");
            }
            if tick.is_terminal {
                break;
            }
        }

        let finished = !self.state.is_alive;
        let score = if finished {
            self.engine.finalize(&self.state)
        } else {
            self.state.score
        };

        Ok(HeadlessReport {
            score,
            sessions: self.state.session.index,
            ticks,
            finished,
        })
    }
}

/// Pick a heading for the next tick, or `None` to keep going straight
pub fn autopilot(state: &GameState) -> Option<Direction> {
    let head = state.snake.head()?;
    let current = state.snake.direction;

    let target = state
        .foods
        .iter()
        .min_by_key(|food| manhattan(head, **food))
        .copied();

    let options: Vec<Direction> = [
        current,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .into_iter()
    .filter(|dir| !current.is_opposite(*dir))
    .filter(|dir| is_safe(state, head.moved_in_direction(*dir)))
    .collect();

    let best = match target {
        Some(food) => options
            .into_iter()
            .min_by_key(|dir| manhattan(head.moved_in_direction(*dir), food)),
        None => options.into_iter().next(),
    }?;

    (best != current).then_some(best)
}

/// The tail still counts as body when the head moves, so it is never safe.
fn is_safe(state: &GameState, pos: Position) -> bool {
    matches!(state.grid.get(pos), Some(Cell::Dead) | Some(Cell::Food))
}

fn manhattan(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Snake};

    fn state_with(snake: Snake, foods: Vec<Position>) -> GameState {
        let mut state = GameState::new(Grid::new(10), snake, Vec::new());
        state.mark_snake();
        for &food in &foods {
            state.grid.set(food, Cell::Food);
        }
        state.foods = foods;
        state
    }

    #[test]
    fn test_autopilot_turns_away_from_wall() {
        let snake = Snake::new(Position::new(0, 5), Direction::Up, 3);
        let state = state_with(snake, vec![Position::new(9, 9)]);

        let heading = autopilot(&state);
        assert!(matches!(heading, Some(Direction::Left) | Some(Direction::Right)));
    }

    #[test]
    fn test_autopilot_keeps_straight_towards_food() {
        let snake = Snake::new(Position::new(5, 5), Direction::Up, 3);
        let state = state_with(snake, vec![Position::new(1, 5)]);
        assert_eq!(autopilot(&state), None);
    }

    #[test]
    fn test_autopilot_avoids_live_cell() {
        let snake = Snake::new(Position::new(5, 5), Direction::Up, 3);
        let mut state = state_with(snake, vec![Position::new(1, 5)]);
        state.grid.set(Position::new(4, 5), Cell::Alive);

        let heading = autopilot(&state);
        assert!(matches!(heading, Some(Direction::Left) | Some(Direction::Right)));
    }

    #[test]
    fn test_headless_run_respects_tick_limit() {
        let mut mode = HeadlessMode::new(GameConfig::small().with_seed(5), 20);
        let report = mode.run().unwrap();
        assert!(report.ticks <= 20);
        assert!(report.score >= 3);
        assert_eq!(report.finished, !mode.state.is_alive);
    }
}
