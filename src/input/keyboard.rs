use serde::{Deserialize, Serialize};

use crate::engine::Command;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_rotation_lock = "KeyL"
/// toggle_pause = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Drop the accumulated arcball rotation and zoom.
    ResetCamera,
    /// Flip between looking at and looking away from the body.
    ToggleViewDirection,
    /// Step through free / orbit / surface rotation lock.
    CycleRotationLock,
    /// Double the animation speed.
    SpeedUp,
    /// Halve the animation speed.
    SlowDown,
    /// Stop or restart the frame clock.
    TogglePause,
    /// Select the body the current one orbits.
    SelectParent,
}

impl KeyAction {
    /// The parameterless command this key triggers.
    #[must_use]
    pub fn to_command(self) -> Command {
        match self {
            Self::ResetCamera => Command::ResetCamera,
            Self::ToggleViewDirection => Command::ToggleViewDirection,
            Self::CycleRotationLock => Command::CycleRotationLock,
            Self::SpeedUp => Command::ScaleSpeed { factor: 2.0 },
            Self::SlowDown => Command::ScaleSpeed { factor: 0.5 },
            Self::TogglePause => Command::TogglePause,
            Self::SelectParent => Command::SelectParent,
        }
    }
}
