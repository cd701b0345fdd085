//! Point lights gathered from luminous bodies for planet shading.

use glam::Vec3;

use super::SolarSystem;

/// Lights the shading uniform block has room for.
pub const MAX_LIGHTS: usize = 4;

/// World positions and luminosities of every luminous body this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightSet {
    /// Light positions in world space.
    pub positions: Vec<Vec3>,
    /// Radiant power per light, parallel to `positions`.
    pub luminosities: Vec<f32>,
}

impl LightSet {
    /// Collect lights depth-first from the transforms of the last update.
    #[must_use]
    pub fn collect(system: &SolarSystem) -> Self {
        let mut set = Self::default();
        for id in system.ids() {
            let (Some(body), Some(transform)) =
                (system.body(id), system.transform(id))
            else {
                continue;
            };
            if let Some(luminosity) = body.luminosity.filter(|l| *l > 0.0) {
                set.positions.push(transform.world_position());
                set.luminosities.push(luminosity);
            }
        }
        set
    }

    /// Number of lights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no body emits light.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pack the first [`MAX_LIGHTS`] lights into a uniform block.
    #[must_use]
    pub fn uniform(&self) -> LightUniform {
        let mut uniform = LightUniform::default();
        let count = self.len().min(MAX_LIGHTS);
        if self.len() > MAX_LIGHTS {
            log::debug!(
                "{} luminous bodies, shading only the first {MAX_LIGHTS}",
                self.len()
            );
        }
        for (i, (position, luminosity)) in self
            .positions
            .iter()
            .zip(&self.luminosities)
            .take(count)
            .enumerate()
        {
            uniform.positions[i] = position.extend(1.0).to_array();
            uniform.luminosities[i] = *luminosity;
        }
        uniform.count = count as u32;
        uniform
    }
}

/// GPU uniform block for the planet shader's light arrays.
///
/// Layout (std140-compatible, 96 bytes):
///   positions: array<vec4<f32>, 4>  (offset 0)
///   luminosities: vec4<f32>         (offset 64)
///   count: u32                      (offset 80)
///   _pad: 3 × u32                   (offset 84)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Light positions, `w = 1`.
    pub positions: [[f32; 4]; MAX_LIGHTS],
    /// Radiant power per light.
    pub luminosities: [f32; MAX_LIGHTS],
    /// Number of valid entries.
    pub count: u32,
    pub(crate) _pad: [u32; 3],
}

impl Default for LightUniform {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{catalog, BodySpec, CelestialBody};

    #[test]
    fn sun_is_the_only_light() {
        let mut system = catalog::solar_system().unwrap();
        system.update(42.0);
        let lights = LightSet::collect(&system);
        assert_eq!(lights.len(), 1);
        assert_eq!(lights.positions[0], Vec3::ZERO);
        assert_eq!(lights.luminosities[0], 3846e23);
    }

    #[test]
    fn orbiting_star_light_follows_its_body() {
        let companion = CelestialBody::new("B", "乙")
            .with_radius(1000.0)
            .with_luminosity(1e20)
            .with_orbit(10.0, 1e6);
        let root = BodySpec::with_satellites(
            CelestialBody::new("A", "甲").with_luminosity(1e26),
            vec![BodySpec::leaf(companion)],
        );
        let mut system = SolarSystem::new(root).unwrap();
        system.update(1234.0);
        let lights = LightSet::collect(&system);
        assert_eq!(lights.len(), 2);
        assert!((lights.positions[1].length() - 1e6_f32.cbrt()).abs() < 1e-3);

        let uniform = lights.uniform();
        assert_eq!(uniform.count, 2);
        assert_eq!(uniform.positions[1][3], 1.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }
}
