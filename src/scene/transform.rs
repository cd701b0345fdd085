//! Per-frame transform propagation through the body tree.
//!
//! Distances, radii and periods span many orders of magnitude, so every
//! physical quantity passes through a cube root before it reaches the
//! scene: outer planets stay on screen and slow bodies still visibly move.

use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

use super::body::CelestialBody;

/// Matrices derived for one body in one frame.
///
/// Every field starts as identity and is overwritten each frame; a body
/// lacking the matching physical field keeps identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// Body centre in world space (parent position · orbital offset).
    pub position: Mat4,
    /// Accumulated orbital rotation including all ancestors.
    pub orbit_rotation: Mat4,
    /// Spin about the body's own Y axis.
    pub surface_rotation: Mat4,
    /// Model matrix of the rendered sphere.
    pub surface: Mat4,
    /// Model matrix of the orbit ring, in the parent's frame.
    pub orbit: Mat4,
    /// Model matrix of the glow billboard: scaled, not spun.
    pub halo: Mat4,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self {
            position: Mat4::IDENTITY,
            orbit_rotation: Mat4::IDENTITY,
            surface_rotation: Mat4::IDENTITY,
            surface: Mat4::IDENTITY,
            orbit: Mat4::IDENTITY,
            halo: Mat4::IDENTITY,
        }
    }
}

impl BodyTransform {
    /// World-space centre of the body.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.position.w_axis.truncate()
    }

    /// The frame a child inherits: this body's position and orbit rotation.
    #[must_use]
    pub fn parent_frame(&self) -> ParentFrame {
        ParentFrame {
            position: self.position,
            orbit_rotation: self.orbit_rotation,
        }
    }
}

/// The part of a parent's transform its satellites build on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// Parent body centre.
    pub position: Mat4,
    /// Parent accumulated orbit rotation.
    pub orbit_rotation: Mat4,
}

impl ParentFrame {
    /// The frame of the root body: identity on both matrices.
    pub const ROOT: Self = Self {
        position: Mat4::IDENTITY,
        orbit_rotation: Mat4::IDENTITY,
    };
}

/// Compress a distance or radius for display.
#[must_use]
pub fn scale_distance(d: f32) -> f32 {
    d.cbrt()
}

/// Angular speed (radians per simulated millisecond) for a period in days.
///
/// The cube root keeps the sign, so negative periods run backwards. A zero
/// period is stationary.
#[must_use]
pub fn scale_speed(period: f64) -> f64 {
    if period == 0.0 {
        0.0
    } else {
        1.0 / (period.cbrt() * 1000.0)
    }
}

/// Rotation angle after `time` simulated milliseconds for a period in days.
///
/// Reduced to one turn in `f64` before narrowing; simulated time is
/// unbounded and `f32` cannot resolve a frame's step at large angles. The
/// sign follows the period.
#[must_use]
pub fn rotation_angle(time: f64, period: f32) -> f32 {
    ((time * scale_speed(f64::from(period))) % TAU) as f32
}

/// Derive a body's transform at `time` from its parent's frame.
#[must_use]
pub fn compute(body: &CelestialBody, parent: &ParentFrame, time: f64) -> BodyTransform {
    let mut t = BodyTransform {
        position: parent.position,
        orbit_rotation: parent.orbit_rotation,
        ..BodyTransform::default()
    };

    if body.orbital_period != 0.0 {
        t.orbit_rotation *=
            Mat4::from_rotation_y(rotation_angle(time, body.orbital_period));
    }

    if let Some(distance) = body.orbital_distance.filter(|d| *d != 0.0) {
        let distance = scale_distance(distance);
        t.position *= t.orbit_rotation
            * Mat4::from_translation(Vec3::new(0.0, 0.0, distance));
        // Drawn in the parent's frame so the ring itself stays put.
        t.orbit = parent.position * Mat4::from_scale(Vec3::splat(distance));
    }

    if body.rotation_period != 0.0 {
        t.surface_rotation =
            Mat4::from_rotation_y(rotation_angle(time, body.rotation_period));
    }

    if let Some(radius) = body.radius.filter(|r| *r != 0.0) {
        let scale = Mat4::from_scale(Vec3::splat(scale_distance(radius)));
        t.surface = t.position * (t.surface_rotation * scale);
        t.halo = t.position * scale;
    }

    t
}
