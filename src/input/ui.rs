//! Change events emitted by the page's discrete controls.
//!
//! Controls only ever report their latest value; the engine applies each
//! event immediately and keeps no queue.

use crate::error::SolariumError;
use crate::options::{RotationLock, ViewDirection};

/// A discrete UI control change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The view-direction selector changed.
    ViewDirection(ViewDirection),
    /// The rotation-lock selector changed.
    RotationLock(RotationLock),
    /// The animation speed field changed.
    Speed(f64),
}

impl UiEvent {
    /// Parse a `(control id, raw value)` pair as reported by the page.
    ///
    /// Control ids are `viewDirection`, `rotationLock` and `speed`. The
    /// short selector values (`in`, `out`, `galaxy`) are accepted alongside
    /// the option names (`inward`, `outward`, `free`).
    pub fn parse(control: &str, value: &str) -> Result<Self, SolariumError> {
        let invalid = || SolariumError::InvalidControlValue {
            control: control.to_owned(),
            value: value.to_owned(),
        };
        let value = value.trim();
        match control {
            "viewDirection" => match value {
                "in" | "inward" => Ok(Self::ViewDirection(ViewDirection::Inward)),
                "out" | "outward" => {
                    Ok(Self::ViewDirection(ViewDirection::Outward))
                }
                _ => Err(invalid()),
            },
            "rotationLock" => match value {
                "galaxy" | "free" => Ok(Self::RotationLock(RotationLock::Free)),
                "orbit" => Ok(Self::RotationLock(RotationLock::Orbit)),
                "surface" => Ok(Self::RotationLock(RotationLock::Surface)),
                _ => Err(invalid()),
            },
            "speed" => value
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite())
                .map(Self::Speed)
                .ok_or_else(invalid),
            _ => Err(SolariumError::UnknownControl(control.to_owned())),
        }
    }
}
