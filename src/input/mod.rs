//! Input handling: event types, drag tracking, and the input processor
//! that converts raw window events into navigation commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable navigation actions.
pub mod keyboard;
/// Drag tracking for mouse panning.
pub(crate) mod mouse;
/// Converts raw events into navigation commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
