//! Core simulation: Game of Life board with a snake on it
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A front end calls [`GameEngine::tick`] once per clock tick and draws the result.

pub mod action;
pub mod automaton;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tint;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult, TickResult};
pub use food::FoodManager;
pub use grid::{Cell, Grid, Position};
pub use snake::Snake;
pub use state::{CollisionType, GameState, Session};
pub use tint::{body_tint, BodyTint};
