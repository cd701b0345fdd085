//! Virtual trackball: pointer positions are lifted onto a unit sphere and
//! consecutive samples become shortest-arc rotations.

use glam::{Quat, Vec2, Vec3};

/// Map a pointer position (pixels from the surface's top-left corner) to
/// trackball coordinates centred on the surface.
///
/// Both axes are divided by half the surface *width*, so a circle on screen
/// stays a circle; Y is flipped to point up.
#[must_use]
pub fn normalize_pointer(position: Vec2, surface: Vec2) -> Vec2 {
    let half = surface * 0.5;
    if half.x <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (position.x - half.x) / half.x,
        -(position.y - half.y) / half.x,
    )
}

/// Lift a trackball point onto the unit sphere.
///
/// Points inside the unit disk land on the front hemisphere; points
/// outside are pulled onto the equator along their direction.
#[must_use]
pub fn sphere_vector(point: Vec2) -> Vec3 {
    let m_squared = point.length_squared();
    if m_squared <= 1.0 {
        Vec3::new(point.x, point.y, (1.0 - m_squared).sqrt())
    } else {
        let m = m_squared.sqrt();
        Vec3::new(point.x / m, point.y / m, 0.0)
    }
}

/// Rotation carrying the sphere vector of `from` onto that of `to`.
#[must_use]
pub fn drag_rotation(from: Vec2, to: Vec2) -> Quat {
    Quat::from_rotation_arc(sphere_vector(from), sphere_vector(to))
}
