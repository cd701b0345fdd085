use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SolariumError;

/// Which way the eye looks relative to the selected body.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewDirection {
    /// Look at the body from outside.
    #[default]
    Inward,
    /// Stand at the eye offset and look away from the body.
    Outward,
}

/// Which of the selected body's rotations the camera cancels out.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationLock {
    /// Camera stays in the galactic frame.
    #[default]
    Free,
    /// Camera follows the body's orbital frame.
    Orbit,
    /// Camera follows the body's orbital frame and its spin.
    Surface,
}

impl ViewDirection {
    /// The other direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Inward => Self::Outward,
            Self::Outward => Self::Inward,
        }
    }
}

impl RotationLock {
    /// Next lock mode in `Free → Orbit → Surface → Free` order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Free => Self::Orbit,
            Self::Orbit => Self::Surface,
            Self::Surface => Self::Free,
        }
    }

    /// Whether the body's spin is cancelled.
    #[must_use]
    pub fn locks_surface(self) -> bool {
        self == Self::Surface
    }

    /// Whether the body's orbital frame is cancelled.
    #[must_use]
    pub fn locks_orbit(self) -> bool {
        matches!(self, Self::Orbit | Self::Surface)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Smallest allowed zoom factor (closest approach).
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest allowed zoom factor.
    #[schemars(skip)]
    pub max_zoom: f32,
    /// Zoom sensitivity multiplier per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Initial view direction.
    #[schemars(title = "View Direction")]
    pub view_direction: ViewDirection,
    /// Initial rotation lock.
    #[schemars(title = "Rotation Lock")]
    pub rotation_lock: RotationLock,
    /// Multiplier applied to the focus radius before the eye offset's cube
    /// root.
    #[schemars(skip)]
    pub distance_factor: f32,
    /// Near plane is `cbrt(focus_radius * near_factor)`.
    #[schemars(skip)]
    pub near_factor: f32,
    /// Far plane is `cbrt(focus_radius * far_factor)`.
    #[schemars(skip)]
    pub far_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            min_zoom: 0.05,
            max_zoom: 20.0,
            zoom_speed: 0.1,
            view_direction: ViewDirection::Inward,
            rotation_lock: RotationLock::Free,
            distance_factor: 10.0,
            near_factor: 1e-3,
            far_factor: 1e8,
        }
    }
}

impl CameraOptions {
    /// Check values that deserialize fine but cannot drive a camera.
    pub fn validate(&self) -> Result<(), SolariumError> {
        let limits_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if !limits_ok {
            return Err(SolariumError::OptionsParse(format!(
                "camera zoom limits must satisfy 0 < min_zoom <= max_zoom \
                 (got {} and {})",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    /// `(min, max)` zoom limits, always ordered and finite.
    ///
    /// Unusable limits fall back to the defaults so clamping never panics,
    /// even on options built in code without [`validate`](Self::validate).
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        let defaults = Self::default();
        let usable = |v: f32| v.is_finite() && v > 0.0;
        let min = if usable(self.min_zoom) { self.min_zoom } else { defaults.min_zoom };
        let max = if usable(self.max_zoom) { self.max_zoom } else { defaults.max_zoom };
        (min.min(max), min.max(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zoom_limits_validate() {
        let opts = CameraOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.zoom_range(), (0.05, 20.0));
    }

    #[test]
    fn inverted_zoom_limits_are_rejected_and_reordered() {
        let opts = CameraOptions {
            min_zoom: 5.0,
            max_zoom: 1.0,
            ..CameraOptions::default()
        };
        assert!(matches!(opts.validate(), Err(SolariumError::OptionsParse(_))));
        assert_eq!(opts.zoom_range(), (1.0, 5.0));
    }

    #[test]
    fn non_finite_zoom_limits_fall_back_to_defaults() {
        let opts = CameraOptions {
            min_zoom: f32::NAN,
            max_zoom: f32::INFINITY,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
        assert_eq!(opts.zoom_range(), (0.05, 20.0));
    }
}
