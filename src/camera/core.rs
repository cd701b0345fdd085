use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::scene::BodyId;

/// Aspect ratio the skybox projection is fixed to.
const SKYBOX_ASPECT: f32 = 1024.0 / 768.0;

/// View and projection matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    /// World → view transform, used as-is by the shaders.
    pub view: Mat4,
    /// View → clip transform.
    pub projection: Mat4,
    /// Eye position in world space.
    pub eye: Vec3,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Body the view is framed on, `None` for the overview fallback.
    pub focus: Option<BodyId>,
}

impl ViewProjection {
    /// Build from a view matrix and perspective parameters (OpenGL clip
    /// depth, since the draw side is WebGL).
    #[must_use]
    pub fn perspective(
        view: Mat4,
        fovy_degrees: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
        focus: Option<BodyId>,
    ) -> Self {
        let projection =
            Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, znear, zfar);
        Self {
            view,
            projection,
            eye: view.inverse().w_axis.truncate(),
            znear,
            zfar,
            focus,
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Rotation-only view for the skybox, so it never translates.
    #[must_use]
    pub fn skybox_view(&self) -> Mat4 {
        let (_, rotation, _) = self.view.to_scale_rotation_translation();
        Mat4::from_quat(rotation)
    }

    /// Fixed projection of the unit skybox sphere.
    #[must_use]
    pub fn skybox_projection() -> Mat4 {
        Mat4::perspective_rh_gl(FRAC_PI_2, SKYBOX_ASPECT, 0.2, 2.0)
    }

    /// GPU uniform for this frame.
    #[must_use]
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            view_proj: self.view_proj().to_cols_array_2d(),
            position: self.eye.to_array(),
            aspect,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the frame's camera matrices.
pub struct CameraUniform {
    /// World → view matrix (`View` in the shaders).
    pub view: [[f32; 4]; 4],
    /// View → clip matrix (`Projection` in the shaders).
    pub projection: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn skybox_view_drops_translation() {
        let view = Mat4::from_rotation_translation(
            Quat::from_rotation_z(0.7),
            Vec3::new(10.0, -4.0, 2.0),
        );
        let vp = ViewProjection::perspective(view, 90.0, 1.5, 0.1, 100.0, None);
        let sky = vp.skybox_view();
        assert!(sky.w_axis.truncate().abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(sky
            .transform_vector3(Vec3::X)
            .abs_diff_eq(view.transform_vector3(Vec3::X), 1e-5));
    }

    #[test]
    fn skybox_projection_keeps_unit_sphere_in_depth_range() {
        let proj = ViewProjection::skybox_projection();
        for dir in [Vec3::NEG_Z, Vec3::new(0.3, -0.2, -1.0).normalize()] {
            let clip = proj * dir.extend(1.0);
            let ndc_z = clip.z / clip.w;
            assert!((-1.0..=1.0).contains(&ndc_z), "{ndc_z}");
        }
        // Fixed 1024x768 aspect, 90 degree field of view.
        assert!((proj.y_axis.y - 1.0).abs() < 1e-6);
        assert!((proj.x_axis.x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn eye_is_view_origin() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let vp = ViewProjection::perspective(view, 90.0, 1.0, 0.1, 100.0, None);
        assert!(vp.eye.abs_diff_eq(eye, 1e-4));
        assert_eq!(bytemuck::bytes_of(&vp.uniform(1.0)).len(), 208);
    }
}
