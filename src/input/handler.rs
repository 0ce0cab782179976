use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

/// Holds the first heading pressed since the last tick; later presses in the
/// same tick are dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLatch {
    pending: Option<Direction>,
}

impl HeadingLatch {
    /// Returns false if a heading is already latched for this tick
    pub fn offer(&mut self, direction: Direction) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Hand the latched heading to the tick and clear it
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Pause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameAction(Action::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameAction(Action::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameAction(Action::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameAction(Action::Move(Direction::Right))
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => KeyAction::Pause,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
