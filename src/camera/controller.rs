use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec2, Vec3};

use super::arcball::drag_rotation;
use super::core::ViewProjection;
use crate::options::{CameraOptions, RotationLock, ViewDirection};
use crate::scene::transform::scale_distance;
use crate::scene::{BodyId, SolarSystem};

/// Camera state that persists across frames: the accumulated arcball
/// rotation, zoom, selected body and view modes.
///
/// The selection is a plain arena index; it is checked against the system
/// every frame rather than trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Accumulated arcball rotation (unit quaternion).
    pub rotation: Quat,
    zoom: f32,
    /// Body the camera is framed on.
    pub selected: Option<BodyId>,
    /// Whether the eye looks at or away from the selected body.
    pub view_direction: ViewDirection,
    /// Which of the selected body's rotations the camera follows.
    pub rotation_lock: RotationLock,
}

impl CameraState {
    /// Fresh camera: no rotation, unit zoom, modes from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let (min_zoom, max_zoom) = options.zoom_range();
        Self {
            rotation: Quat::IDENTITY,
            zoom: 1.0_f32.clamp(min_zoom, max_zoom),
            selected: None,
            view_direction: options.view_direction,
            rotation_lock: options.rotation_lock,
        }
    }

    /// Current zoom factor; scales the eye's distance from the body.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Apply one drag segment in trackball coordinates.
    ///
    /// The increment is applied on the left, so drags act in world space
    /// rather than in the camera's current frame.
    pub fn drag(&mut self, from: Vec2, to: Vec2) {
        self.rotation = (drag_rotation(from, to) * self.rotation).normalize();
    }

    /// Zoom by a scroll amount (positive = closer).
    pub fn zoom_by(&mut self, delta: f32, options: &CameraOptions) {
        let (min_zoom, max_zoom) = options.zoom_range();
        let factor = (1.0 - delta * options.zoom_speed).max(0.1);
        let zoom = self.zoom * factor;
        if zoom.is_finite() {
            self.zoom = zoom.clamp(min_zoom, max_zoom);
        }
    }

    /// Forget the accumulated rotation and zoom.
    pub fn reset(&mut self) {
        self.rotation = Quat::IDENTITY;
        self.zoom = 1.0;
    }

    /// View and projection for this frame.
    ///
    /// Frames the selected body when it is valid and has a positive focus
    /// radius; otherwise falls back to a fixed overview of the whole
    /// system.
    #[must_use]
    pub fn view_projection(
        &self,
        system: &SolarSystem,
        aspect: f32,
        options: &CameraOptions,
    ) -> ViewProjection {
        self.selected
            .filter(|id| system.contains(*id))
            .and_then(|id| self.focused(system, id, aspect, options))
            .unwrap_or_else(|| overview(aspect, options))
    }

    fn focused(
        &self,
        system: &SolarSystem,
        id: BodyId,
        aspect: f32,
        options: &CameraOptions,
    ) -> Option<ViewProjection> {
        let transform = system.transform(id)?;
        let focus_radius = system.focus_radius(id);
        if focus_radius <= 0.0 || !focus_radius.is_finite() {
            return None;
        }

        let distance =
            scale_distance(focus_radius * options.distance_factor) * self.zoom;

        let mut view = Mat4::IDENTITY;
        if self.view_direction == ViewDirection::Outward {
            view *= Mat4::from_rotation_y(PI);
        }
        view *= Mat4::from_translation(Vec3::new(0.0, 0.0, -distance));
        view *= Mat4::from_quat(self.rotation);
        if self.rotation_lock.locks_surface() {
            view *= transform.surface_rotation.inverse();
        }
        if self.rotation_lock.locks_orbit() {
            let (_, frame, _) = transform.position.to_scale_rotation_translation();
            view *= Mat4::from_quat(frame.inverse());
        }
        view *= Mat4::from_translation(-transform.world_position());

        Some(ViewProjection::perspective(
            view,
            options.fovy,
            aspect,
            scale_distance(focus_radius * options.near_factor),
            scale_distance(focus_radius * options.far_factor),
            Some(id),
        ))
    }
}

/// Fixed overview of the whole system, used when nothing is selected.
fn overview(aspect: f32, options: &CameraOptions) -> ViewProjection {
    let eye = Vec3::new(0.0, scale_distance(1e9), scale_distance(8e9));
    let target = Vec3::new(0.0, -scale_distance(5e8), 0.0);
    let view = Mat4::look_at_rh(eye, target, Vec3::new(0.0, 1e3, -1e3).normalize());
    ViewProjection::perspective(
        view,
        options.fovy,
        aspect,
        scale_distance(1e8),
        scale_distance(1e32),
        None,
    )
}
