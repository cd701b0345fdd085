//! CPU-side meshes shared by every body: a UV sphere for surfaces and the
//! skybox, and a unit ring for orbits.

use std::f32::consts::{PI, TAU};

use crate::options::GeometryOptions;

/// Vertex of the unit sphere mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
    /// Outward normal (equal to the position on a unit sphere).
    pub normal: [f32; 3],
    /// Equirectangular texture coordinate.
    pub uv: [f32; 2],
}

/// Indexed mesh drawn as a single triangle strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex buffer contents.
    pub vertices: Vec<SphereVertex>,
    /// Triangle-strip indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Raw vertex bytes for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Unit UV sphere with `(lat_bands + 1) · (lon_bands + 1)` vertices.
///
/// Latitude runs from the +Y pole (v = 0) to the −Y pole (v = 1); the seam
/// column is duplicated so texture coordinates wrap cleanly.
#[must_use]
pub fn sphere(lat_bands: u32, lon_bands: u32) -> Mesh {
    let lat_bands = lat_bands.max(1);
    let lon_bands = lon_bands.max(3);
    let row = lon_bands + 1;

    let mut vertices = Vec::with_capacity(((lat_bands + 1) * row) as usize);
    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for lon in 0..=lon_bands {
            let phi = lon as f32 * TAU / lon_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let p = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            vertices.push(SphereVertex {
                position: p,
                normal: p,
                uv: [
                    lon as f32 / lon_bands as f32,
                    lat as f32 / lat_bands as f32,
                ],
            });
        }
    }

    // Each latitude band zig-zags between its lower and upper row.
    let mut indices = Vec::with_capacity((lat_bands * row * 2) as usize);
    for lat in 0..lat_bands {
        for lon in 0..row {
            indices.push((lat + 1) * row + lon);
            indices.push(lat * row + lon);
        }
    }

    Mesh { vertices, indices }
}

/// Unit circle in the XZ plane, `segments` points for a line loop.
///
/// Starts at +Z, the direction a body at zero orbital angle sits in.
#[must_use]
pub fn circle(segments: u32) -> Vec<[f32; 3]> {
    let segments = segments.max(3);
    let step = TAU / segments as f32;
    (0..segments)
        .map(|i| {
            let (s, c) = (step * i as f32).sin_cos();
            [s, 0.0, c]
        })
        .collect()
}

/// The meshes every draw command refers to, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedMeshes {
    /// Unit sphere for body surfaces and the skybox.
    pub sphere: Mesh,
    /// Unit ring for orbits.
    pub ring: Vec<[f32; 3]>,
}

impl SharedMeshes {
    /// Tessellate with the configured detail.
    #[must_use]
    pub fn new(options: &GeometryOptions) -> Self {
        Self {
            sphere: sphere(
                options.sphere_latitude_bands,
                options.sphere_longitude_bands,
            ),
            ring: circle(options.circle_segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_counts() {
        let mesh = sphere(48, 96);
        assert_eq!(mesh.vertices.len(), 49 * 97);
        assert_eq!(mesh.indices.len(), 48 * 97 * 2);
        let max = *mesh.indices.iter().max().unwrap();
        assert_eq!(max as usize, mesh.vertices.len() - 1);
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertices.len() * 32);
        assert_eq!(mesh.index_bytes().len(), mesh.indices.len() * 4);
    }

    #[test]
    fn sphere_vertices_are_unit_with_matching_normals() {
        let mesh = sphere(8, 16);
        for v in &mesh.vertices {
            let len = glam::Vec3::from(v.position).length();
            assert!((len - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
        assert!((mesh.vertices[0].position[1] - 1.0).abs() < 1e-6);
        assert!((mesh.vertices.last().unwrap().position[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn strip_stitches_adjacent_rows() {
        let mesh = sphere(4, 6);
        let row = 7;
        for pair in mesh.indices.chunks(2) {
            assert_eq!(pair[0], pair[1] + row);
        }
    }

    #[test]
    fn shared_meshes_follow_options() {
        let options = GeometryOptions {
            sphere_latitude_bands: 6,
            sphere_longitude_bands: 12,
            circle_segments: 64,
        };
        let meshes = SharedMeshes::new(&options);
        assert_eq!(meshes.sphere.vertices.len(), 7 * 13);
        assert_eq!(meshes.ring.len(), 64);
    }

    #[test]
    fn circle_lies_on_unit_ring() {
        let ring = circle(1024);
        assert_eq!(ring.len(), 1024);
        assert_eq!(ring[0], [0.0, 0.0, 1.0]);
        for p in &ring {
            assert_eq!(p[1], 0.0);
            assert!((p[0].hypot(p[2]) - 1.0).abs() < 1e-6);
        }
        let quarter = ring[256];
        assert!((quarter[0] - 1.0).abs() < 1e-6 && quarter[2].abs() < 1e-6);
    }
}
