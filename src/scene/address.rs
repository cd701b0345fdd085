//! `/`-joined body addresses (`Sun/Earth/Moon`), as used for hash
//! navigation.

use super::{BodyId, SolarSystem};

impl SolarSystem {
    /// Address of a body: the names from the root down to it.
    #[must_use]
    pub fn path(&self, id: BodyId) -> Option<String> {
        let mut names = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.nodes.get(current.index())?;
            names.push(node.body.name.as_str());
            cursor = node.parent;
        }
        names.reverse();
        Some(names.join("/"))
    }

    /// Find the body an address names.
    ///
    /// Addresses normally start at the root. When the first segment is not
    /// the root's name, the walk starts from the first body (depth-first)
    /// bearing that name instead, so `Moon` and `Earth/Moon` also resolve.
    /// Among equally named siblings the first one whose subtree matches
    /// wins.
    #[must_use]
    pub fn resolve(&self, address: &str) -> Option<BodyId> {
        let segments: Vec<&str> = address
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let (first, rest) = segments.split_first()?;

        let root = self.nodes.first()?;
        if root.body.name == *first {
            return self.walk(Self::ROOT, rest);
        }
        self.ids()
            .filter(|id| self.nodes[id.index()].body.name == *first)
            .find_map(|id| self.walk(id, rest))
    }

    /// Resolve `address`, falling back to `fallback` and then to the root.
    ///
    /// Never fails: navigation to a body that does not exist lands on the
    /// default body instead of surfacing an error.
    #[must_use]
    pub fn resolve_or_default(&self, address: &str, fallback: &str) -> BodyId {
        if let Some(id) = self.resolve(address) {
            return id;
        }
        log::warn!("no body at address {address:?}, falling back to {fallback:?}");
        self.resolve(fallback).unwrap_or(Self::ROOT)
    }

    fn walk(&self, from: BodyId, segments: &[&str]) -> Option<BodyId> {
        let Some((name, rest)) = segments.split_first() else {
            return Some(from);
        };
        self.satellites(from)
            .iter()
            .filter(|child| self.nodes[child.index()].body.name == *name)
            .find_map(|child| self.walk(*child, rest))
    }
}

#[cfg(test)]
mod tests {
    use crate::scene::{catalog, BodySpec, CelestialBody, SolarSystem};

    #[test]
    fn path_and_resolve_are_inverse() {
        let system = catalog::solar_system().unwrap();
        for id in system.ids() {
            let path = system.path(id).unwrap();
            assert_eq!(system.resolve(&path), Some(id), "{path}");
        }
    }

    #[test]
    fn paths_are_root_anchored() {
        let system = catalog::solar_system().unwrap();
        let moon = system.resolve("Sun/Earth/Moon").unwrap();
        assert_eq!(system.path(moon).unwrap(), "Sun/Earth/Moon");
        assert_eq!(system.path(SolarSystem::ROOT).unwrap(), "Sun");
    }

    #[test]
    fn unknown_address_falls_back_to_default() {
        let system = catalog::solar_system().unwrap();
        assert_eq!(system.resolve("Sun/Pluto"), None);
        let earth = system.resolve("Sun/Earth").unwrap();
        assert_eq!(system.resolve_or_default("Sun/Pluto", "Sun/Earth"), earth);
        assert_eq!(system.resolve_or_default("", "Sun/Earth"), earth);
        assert_eq!(
            system.resolve_or_default("Sun/Pluto", "Sun/Vulcan"),
            SolarSystem::ROOT
        );
    }

    #[test]
    fn partial_addresses_start_anywhere() {
        let system = catalog::solar_system().unwrap();
        let moon = system.resolve("Sun/Earth/Moon").unwrap();
        assert_eq!(system.resolve("Moon"), Some(moon));
        assert_eq!(system.resolve("Earth/Moon"), Some(moon));
        assert_eq!(system.resolve("/Sun/Earth/Moon/"), Some(moon));
        assert_eq!(system.resolve("Mars/Moon"), None);
    }

    #[test]
    fn duplicate_names_take_first_matching_subtree() {
        let root = BodySpec::with_satellites(
            CelestialBody::new("Star", "恒星"),
            vec![
                BodySpec::leaf(CelestialBody::new("Twin", "甲")),
                BodySpec::with_satellites(
                    CelestialBody::new("Twin", "乙"),
                    vec![BodySpec::leaf(CelestialBody::new("Rock", "石"))],
                ),
            ],
        );
        let system = SolarSystem::new(root).unwrap();
        let first_twin = system.satellites(SolarSystem::ROOT)[0];
        let second_twin = system.satellites(SolarSystem::ROOT)[1];
        assert_eq!(system.resolve("Star/Twin"), Some(first_twin));
        // The first twin has no Rock, so the search continues to the second.
        let rock = system.resolve("Star/Twin/Rock").unwrap();
        assert_eq!(system.parent(rock), Some(second_twin));
    }
}
