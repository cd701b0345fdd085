//! Authoritative scene: the celestial body tree stored as a flat arena,
//! with per-frame transforms in a parallel array.
//!
//! Bodies are stored in depth-first pre-order, so every parent precedes
//! its satellites and a single forward sweep is a valid parent-first
//! traversal. Structure is fixed after construction; only transforms
//! change from frame to frame.

mod address;
mod body;
pub mod catalog;
pub mod info;
pub mod lights;
pub mod transform;

pub use body::{BodySpec, CelestialBody};
pub use info::{BodyLink, BodySummary, PropertyKind};
pub use lights::{LightSet, LightUniform, MAX_LIGHTS};
pub use transform::{BodyTransform, ParentFrame};

use crate::error::SolariumError;

/// Stable index of a body within its [`SolarSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Arena slot of this body.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct BodyNode {
    body: CelestialBody,
    parent: Option<BodyId>,
    satellites: Vec<BodyId>,
}

/// The body tree plus the transforms of the current frame.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    /// Bodies in depth-first pre-order; index 0 is the root.
    nodes: Vec<BodyNode>,
    /// Transforms parallel to `nodes`, overwritten by [`Self::update`].
    transforms: Vec<BodyTransform>,
}

impl SolarSystem {
    /// The root body's id.
    pub const ROOT: BodyId = BodyId(0);

    /// Flatten a body tree into an arena.
    ///
    /// The root must not orbit anything (`orbital_period == 0`), and names
    /// must be non-empty and free of `/` so addresses stay unambiguous to
    /// split.
    pub fn new(root: BodySpec) -> Result<Self, SolariumError> {
        if root.body.orbital_period != 0.0 {
            return Err(SolariumError::InvalidSystem(format!(
                "root body {} has a non-zero orbital period",
                root.body.name
            )));
        }

        let mut system = Self {
            nodes: Vec::new(),
            transforms: Vec::new(),
        };
        let _ = system.insert(root, None)?;
        system.transforms = vec![BodyTransform::default(); system.nodes.len()];
        log::debug!("built solar system with {} bodies", system.nodes.len());
        Ok(system)
    }

    fn insert(
        &mut self,
        spec: BodySpec,
        parent: Option<BodyId>,
    ) -> Result<BodyId, SolariumError> {
        let name = &spec.body.name;
        if name.is_empty() || name.contains('/') {
            return Err(SolariumError::InvalidSystem(format!(
                "body name {name:?} cannot be used in an address"
            )));
        }

        let id = BodyId(self.nodes.len() as u32);
        self.nodes.push(BodyNode {
            body: spec.body,
            parent,
            satellites: Vec::with_capacity(spec.satellites.len()),
        });
        for satellite in spec.satellites {
            let child = self.insert(satellite, Some(id))?;
            self.nodes[id.index()].satellites.push(child);
        }
        Ok(id)
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the system has no bodies. Never true for a built system.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` addresses a body of this system.
    #[must_use]
    pub fn contains(&self, id: BodyId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Static data of a body.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        self.nodes.get(id.index()).map(|n| &n.body)
    }

    /// Transform of a body as of the last [`Self::update`].
    #[must_use]
    pub fn transform(&self, id: BodyId) -> Option<&BodyTransform> {
        self.transforms.get(id.index())
    }

    /// The body `id` orbits, if any.
    #[must_use]
    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Direct satellites of a body, in display order.
    #[must_use]
    pub fn satellites(&self, id: BodyId) -> &[BodyId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |n| n.satellites.as_slice())
    }

    /// All body ids in depth-first pre-order.
    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.nodes.len() as u32).map(BodyId)
    }

    /// Recompute every body's transform for simulated time `time` (ms).
    ///
    /// One depth-first pass, parent before children; every transform is
    /// rebuilt from identity so nothing from the previous frame survives.
    pub fn update(&mut self, time: f64) {
        for index in 0..self.nodes.len() {
            let parent = self.nodes[index]
                .parent
                .map_or(ParentFrame::ROOT, |p| {
                    self.transforms[p.index()].parent_frame()
                });
            self.transforms[index] =
                transform::compute(&self.nodes[index].body, &parent, time);
        }
    }

    /// Largest of the body's own radius and its direct satellites' orbital
    /// distances. Only one level deep.
    #[must_use]
    pub fn system_radius(&self, id: BodyId) -> f32 {
        let own = self.body(id).and_then(|b| b.radius).unwrap_or(0.0);
        self.satellites(id)
            .iter()
            .filter_map(|s| self.body(*s).and_then(|b| b.orbital_distance))
            .fold(own, f32::max)
    }

    /// Camera framing radius: `0.4 · system radius + 0.6 · body radius`.
    #[must_use]
    pub fn focus_radius(&self, id: BodyId) -> f32 {
        let radius = self.body(id).and_then(|b| b.radius).unwrap_or(0.0);
        self.system_radius(id) * 0.4 + radius * 0.6
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn arena_is_pre_order() {
        let system = catalog::solar_system().unwrap();
        assert_eq!(system.body(SolarSystem::ROOT).unwrap().name, "Sun");
        for id in system.ids() {
            if let Some(parent) = system.parent(id) {
                assert!(parent < id);
                assert!(system.satellites(parent).contains(&id));
            }
        }
        assert_eq!(system.len(), 11);
    }

    #[test]
    fn rejects_orbiting_root() {
        let root = BodySpec::leaf(
            CelestialBody::new("Earth", "地球").with_orbit(365.0, 1.0),
        );
        assert!(matches!(
            SolarSystem::new(root),
            Err(SolariumError::InvalidSystem(_))
        ));
    }

    #[test]
    fn rejects_slash_in_name() {
        let root = BodySpec::with_satellites(
            CelestialBody::new("Sun", "太阳"),
            vec![BodySpec::leaf(CelestialBody::new("a/b", "?"))],
        );
        assert!(SolarSystem::new(root).is_err());
    }

    #[test]
    fn update_places_children_relative_to_parents() {
        let mut system = catalog::solar_system().unwrap();
        system.update(86_400.0);

        let earth = system.resolve("Sun/Earth").unwrap();
        let moon = system.resolve("Sun/Earth/Moon").unwrap();
        let earth_pos = system.transform(earth).unwrap().world_position();
        let moon_pos = system.transform(moon).unwrap().world_position();

        let expected = 38e4_f32.cbrt();
        assert!(((moon_pos - earth_pos).length() - expected).abs() < 1e-2);

        // Moon's ring is centred on Earth.
        let ring_centre = system
            .transform(moon)
            .unwrap()
            .orbit
            .transform_point3(Vec3::ZERO);
        assert!((ring_centre - earth_pos).length() < 1e-3);
    }

    #[test]
    fn update_overwrites_previous_frame() {
        let mut a = catalog::solar_system().unwrap();
        a.update(1e7);
        a.update(5.0);
        let mut b = catalog::solar_system().unwrap();
        b.update(5.0);
        for id in a.ids() {
            assert_eq!(a.transform(id), b.transform(id));
        }
    }

    #[test]
    fn root_orbit_rotation_is_time_invariant() {
        let mut system = catalog::solar_system().unwrap();
        for time in [0.0, 3.0e4, 9.9e8] {
            system.update(time);
            assert_eq!(
                system.transform(SolarSystem::ROOT).unwrap().orbit_rotation,
                glam::Mat4::IDENTITY
            );
        }
    }

    #[test]
    fn system_radius_looks_one_level_deep() {
        let earth = BodySpec::with_satellites(
            CelestialBody::new("Earth", "地球")
                .with_radius(6378.0)
                .with_orbit(365.0, 1496e5),
            vec![BodySpec::leaf(
                CelestialBody::new("Moon", "月球")
                    .with_radius(868.55)
                    .with_orbit(27.3, 384_000.0),
            )],
        );
        let root = BodySpec::with_satellites(
            CelestialBody::new("Sun", "太阳").with_radius(696_342.0),
            vec![earth],
        );
        let system = SolarSystem::new(root).unwrap();
        let earth = system.resolve("Sun/Earth").unwrap();
        assert_eq!(system.system_radius(earth), 384_000.0);
        assert!(
            (system.focus_radius(earth) - (0.4 * 384_000.0 + 0.6 * 6378.0))
                .abs()
                < 1e-2
        );
        // The Sun only sees Earth's distance, never the Moon's.
        assert_eq!(system.system_radius(SolarSystem::ROOT), 1496e5);
    }
}
