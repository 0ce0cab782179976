use std::time::Duration;

use super::config::GameConfig;
use super::state::Session;

/// Display hint for the snake body. Has no effect on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTint {
    Normal,
    /// Invincible, even tick
    FlashA,
    /// Invincible, odd tick
    FlashB,
}

/// Body tint for a moment in a session.
///
/// The first session never flashes; later sessions alternate while
/// invincible so the player can see the window.
pub fn body_tint(session: &Session, config: &GameConfig) -> BodyTint {
    if session.index <= 1 || session.elapsed > config.invincible_duration() {
        return BodyTint::Normal;
    }

    if tick_parity(session.elapsed, config.tick_rate_hz) == 0 {
        BodyTint::FlashA
    } else {
        BodyTint::FlashB
    }
}

fn tick_parity(elapsed: Duration, tick_rate_hz: u32) -> u128 {
    (elapsed.as_millis() * u128::from(tick_rate_hz) / 1000) % 2
}
