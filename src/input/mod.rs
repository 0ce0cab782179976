pub mod handler;

pub use handler::{HeadingLatch, InputHandler, KeyAction};
