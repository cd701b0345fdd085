use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Tessellation detail for the sphere and ring meshes.
pub struct GeometryOptions {
    /// Sphere rows from pole to pole.
    pub sphere_latitude_bands: u32,
    /// Sphere columns around the equator.
    pub sphere_longitude_bands: u32,
    /// Line segments in orbit and halo rings.
    pub circle_segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_latitude_bands: 48,
            sphere_longitude_bands: 96,
            circle_segments: 1024,
        }
    }
}
