//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! gesture, UI control or hash change, is represented as a `Command`.
//! Consumers construct commands and pass them to
//! [`Engine::execute`](super::Engine::execute).

use glam::Vec2;

use crate::options::{RotationLock, ViewDirection};

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(Command::Navigate { address: "Sun/Mars".into() });
/// engine.execute(Command::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by one trackball drag segment.
    ArcballDrag {
        /// Previous sample in trackball coordinates.
        from: Vec2,
        /// Current sample in trackball coordinates.
        to: Vec2,
    },

    /// Zoom the camera (positive = closer, negative = farther).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Drop the accumulated rotation and zoom.
    ResetCamera,

    /// Set whether the eye looks at or away from the selected body.
    SetViewDirection(ViewDirection),

    /// Flip the view direction.
    ToggleViewDirection,

    /// Set which of the selected body's rotations the camera follows.
    SetRotationLock(RotationLock),

    /// Step to the next rotation lock.
    CycleRotationLock,

    // ── Navigation ──────────────────────────────────────────────────
    /// Select the body at a `/`-joined address.
    Navigate {
        /// Address such as `Sun/Earth/Moon`.
        address: String,
    },

    /// Select the body the current one orbits.
    SelectParent,

    // ── Playback ────────────────────────────────────────────────────
    /// Set the simulated-time multiplier.
    SetSpeed(f64),

    /// Multiply the simulated-time multiplier.
    ScaleSpeed {
        /// Factor applied to the current speed.
        factor: f64,
    },

    /// Stop the clock, or restart it at the configured speed.
    TogglePause,
}
