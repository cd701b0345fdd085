//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient pointer state (surface size,
//! the active drag point) and the key-binding map. It is the only thing
//! that sits between raw window events and the engine's
//! [`execute`](crate::engine::Engine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::arcball::normalize_pointer;
use crate::engine::Command;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`Command`]s.
///
/// A left-button press starts a drag; every cursor move during the drag
/// yields one [`Command::ArcballDrag`] segment from the previous sample to
/// the current one, and the release yields the final segment.
pub struct InputProcessor {
    /// Render surface size in physical pixels.
    surface: Vec2,
    /// Last cursor position in physical pixels.
    cursor: Vec2,
    /// Normalized position of the previous drag sample, while dragging.
    drag_point: Option<Vec2>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor for a surface of the given size with default key
    /// bindings.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            surface: Vec2::new(width, height),
            cursor: Vec2::ZERO,
            drag_point: None,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(
        width: f32,
        height: f32,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            key_bindings,
            ..Self::new(width, height)
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_point.is_some()
    }

    /// Width over height of the render surface.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.surface.y > 0.0 {
            self.surface.x / self.surface.y
        } else {
            1.0
        }
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<Command> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.drag_to_cursor(true)
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    self.drag_point = Some(self.normalized_cursor());
                    None
                } else {
                    self.drag_to_cursor(false)
                }
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::Scroll { delta } => Some(Command::Zoom { delta }),
            InputEvent::Resized { width, height } => {
                self.surface = Vec2::new(width, height);
                None
            }
        }
    }

    fn normalized_cursor(&self) -> Vec2 {
        normalize_pointer(self.cursor, self.surface)
    }

    /// Emit the drag segment ending at the cursor; keep the drag alive only
    /// when `keep` is set.
    fn drag_to_cursor(&mut self, keep: bool) -> Option<Command> {
        let from = self.drag_point?;
        let to = self.normalized_cursor();
        self.drag_point = keep.then_some(to);
        Some(Command::ArcballDrag { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut input = InputProcessor::new(800.0, 600.0);
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 })
            .is_none());
        assert!(input.handle_event(press(false)).is_none());
    }

    #[test]
    fn drag_emits_chained_segments() {
        let mut input = InputProcessor::new(800.0, 600.0);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert!(input.handle_event(press(true)).is_none());
        assert!(input.dragging());

        let first = input
            .handle_event(InputEvent::CursorMoved { x: 600.0, y: 300.0 })
            .unwrap();
        assert_eq!(
            first,
            Command::ArcballDrag {
                from: Vec2::ZERO,
                to: Vec2::new(0.5, 0.0)
            }
        );

        let last = input
            .handle_event(InputEvent::CursorMoved { x: 600.0, y: 100.0 })
            .unwrap();
        // Y is flipped and scaled by half the width, not the height.
        let to = Vec2::new(0.5, 0.5);
        assert_eq!(
            last,
            Command::ArcballDrag {
                from: Vec2::new(0.5, 0.0),
                to
            }
        );

        let release = input.handle_event(press(false)).unwrap();
        assert_eq!(release, Command::ArcballDrag { from: to, to });
        assert!(!input.dragging());
    }

    #[test]
    fn other_buttons_do_not_drag() {
        let mut input = InputProcessor::new(800.0, 600.0);
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.dragging());
    }

    #[test]
    fn scroll_and_keys_map_to_commands() {
        let mut input = InputProcessor::new(800.0, 600.0);
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.0 }),
            Some(Command::Zoom { delta: 1.0 })
        );
        assert_eq!(input.handle_key_press("KeyV"), Some(Command::ToggleViewDirection));
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut input = InputProcessor::new(800.0, 600.0);
        let _ = input.handle_event(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
        });
        assert!((input.aspect_ratio() - 2.0).abs() < 1e-6);
    }
}
