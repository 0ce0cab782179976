//! Game of Growth - Snake on a Game of Life board
//!
//! This library provides:
//! - Core simulation (game module): automaton, snake, food, sessions
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Per-process play metrics (metrics module)
//! - Execution modes (human, headless)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
