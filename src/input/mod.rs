//! Input handling: pointer events, key bindings, UI control events, and the
//! processor that converts raw events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;
/// Discrete change events from external UI controls.
pub mod ui;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use ui::UiEvent;
