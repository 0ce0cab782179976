use std::time::Duration;

use tracing::{debug, info};

use super::{
    action::{Action, Direction},
    automaton,
    config::GameConfig,
    food::FoodManager,
    grid::{Cell, Grid, Position},
    snake::Snake,
    state::{CollisionType, GameState},
    tint::{body_tint, BodyTint},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Foods consumed this step
    pub foods_eaten: usize,
    /// Segments cut off by live cells
    pub truncated: usize,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The session timed out and the snake respawned
    pub reborn: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Everything a front end needs to draw one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub grid: Grid,
    pub snake: Vec<Position>,
    pub elapsed: Duration,
    pub score: usize,
    pub session_index: usize,
    pub is_terminal: bool,
    pub tint: BodyTint,
    pub info: StepInfo,
}

/// Runs sessions: automaton, snake movement and food, in a fixed order per tick
pub struct GameEngine {
    config: GameConfig,
    food: FoodManager,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let food = FoodManager::new(config.seed);
        Self { config, food }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh run: empty board, snake at its spawn point, first food
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_size);
        let mut state = GameState::new(grid, self.spawn_snake(), Vec::new());
        state.mark_snake();

        let (_, foods) =
            self.food
                .replenish(&mut state.grid, &[], state.session.food_target());
        state.foods = foods;

        state
    }

    /// Advance one tick and capture the result for rendering.
    ///
    /// At most one heading per tick; callers drop any others.
    pub fn tick(&mut self, state: &mut GameState, heading: Option<Direction>) -> TickResult {
        let result = self.step(state, heading.into());
        self.snapshot(state, result.info)
    }

    pub fn snapshot(&self, state: &GameState, info: StepInfo) -> TickResult {
        TickResult {
            grid: state.grid.clone(),
            snake: state.snake.body.clone(),
            elapsed: state.session.elapsed,
            score: state.score,
            session_index: state.session.index,
            is_terminal: !state.is_alive,
            tint: body_tint(&state.session, &self.config),
            info,
        }
    }

    /// Final score of a finished run
    pub fn finalize(&self, state: &GameState) -> usize {
        debug_assert!(!state.is_alive, "finalize called on a live run");
        info!(
            score = state.score,
            sessions = state.session.index,
            steps = state.steps,
            "run finalized"
        );
        state.score
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        if state.session.elapsed >= self.config.session_duration() {
            self.rebirth(state);
            state.steps += 1;

            return StepResult {
                terminated: false,
                info: StepInfo {
                    reborn: true,
                    ..Default::default()
                },
            };
        }

        if let Action::Move(direction) = action {
            state.snake.turn(direction);
        }

        let mut next = automaton::advance(&state.grid);
        FoodManager::place(&mut next, &state.foods);

        // Work on a candidate so a fatal tick leaves the board untouched.
        let mut snake = state.snake.clone();
        snake.advance_head();

        if let Some(collision) = snake.check_collision(&next) {
            return self.terminate(state, collision, 0);
        }

        let truncated = if state.session.elapsed <= self.config.invincible_duration() {
            0
        } else {
            snake.truncate_at_live(&next)
        };

        if snake.is_empty() {
            return self.terminate(state, CollisionType::Automaton, truncated);
        }

        state.queued_growth = snake.trim_tail(state.queued_growth);
        state.snake = snake;
        state.grid = next;
        state.mark_snake();

        let (foods_eaten, foods) = self.food.replenish(
            &mut state.grid,
            &state.foods,
            state.session.food_target(),
        );
        state.foods = foods;
        state.queued_growth += foods_eaten;

        state.session.elapsed += self.config.tick_interval();
        state.steps += 1;
        state.record_score();

        StepResult {
            terminated: false,
            info: StepInfo {
                foods_eaten,
                truncated,
                collision_type: None,
                reborn: false,
            },
        }
    }

    /// Session timeout: the old snake turns into live cells, a fresh one
    /// spawns and the food target grows.
    fn rebirth(&mut self, state: &mut GameState) {
        for &segment in &state.snake.body {
            state.grid[segment] = Cell::Alive;
        }

        state.session.index += 1;
        state.session.elapsed = Duration::ZERO;
        state.queued_growth = 0;

        state.snake = self.spawn_snake();
        state.mark_snake();

        // Food under the respawned snake is gone, not eaten.
        state.foods.retain(|&food| state.grid[food] == Cell::Food);
        let (_, foods) = self.food.replenish(
            &mut state.grid,
            &state.foods,
            state.session.food_target(),
        );
        state.foods = foods;
        state.record_score();

        debug!(
            session = state.session.index,
            live_cells = state.grid.count(Cell::Alive),
            foods = state.foods.len(),
            "session reborn"
        );
    }

    fn terminate(
        &self,
        state: &mut GameState,
        collision: CollisionType,
        truncated: usize,
    ) -> StepResult {
        state.is_alive = false;
        state.collision = Some(collision);
        state.snake.body.clear();
        state.steps += 1;

        info!(
            ?collision,
            score = state.score,
            session = state.session.index,
            "snake died"
        );

        StepResult {
            terminated: true,
            info: StepInfo {
                truncated,
                collision_type: Some(collision),
                ..Default::default()
            },
        }
    }

    fn spawn_snake(&self) -> Snake {
        let centre = (self.config.grid_size / 2) as i32;
        Snake::new(
            Position::new(centre, centre),
            Direction::Up,
            self.config.initial_snake_length,
        )
    }
}
