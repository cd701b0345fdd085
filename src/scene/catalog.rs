//! The hard-coded solar system shown by the viewer.
//!
//! Radii and distances are in kilometres, periods in Earth days. Rotation
//! periods are negative for retrograde spin (Venus, Uranus).

use super::{BodySpec, CelestialBody, SolarSystem};
use crate::error::SolariumError;

const DAYS_PER_YEAR: f32 = 365.0;

fn planet(
    name: &str,
    display_name: &str,
    texture: &str,
    image: &str,
) -> CelestialBody {
    CelestialBody::new(name, display_name).with_texture(texture, image)
}

/// Sun, the eight planets, the Moon and Phobos.
#[must_use]
pub fn solar_system_spec() -> BodySpec {
    let mercury = planet("Mercury", "水星", "mercury", "textures/mercury.jpg")
        .with_radius(4878.0 / 2.0)
        .with_orbit(0.24 * DAYS_PER_YEAR, 579e5)
        .with_rotation_period(58.65);

    let venus = planet("Venus", "金星", "venus", "textures/venus.jpg")
        .with_radius(12104.0 / 2.0)
        .with_orbit(0.62 * DAYS_PER_YEAR, 1082e5)
        .with_rotation_period(-243.0)
        .with_axial_tilt(2.64);

    let moon = planet("Moon", "月球", "moon", "textures/moon.jpg")
        .with_radius(1737.1 / 2.0)
        .with_orbit(27.3, 38e4)
        .with_axial_tilt(6.687);

    let earth = planet("Earth", "地球", "earth", "textures/earth.jpg")
        .with_radius(12756.0 / 2.0)
        .with_orbit(DAYS_PER_YEAR, 1496e5)
        .with_rotation_period(1.0)
        .with_axial_tilt(23.44);

    let phobos = planet("phobos", "火卫一", "phobos", "textures/mars-phobos.jpg")
        .with_radius(11.2667 / 2.0)
        .with_orbit(7.65, 9400.0);

    let mars = planet("Mars", "火星", "mars", "textures/mars.jpg")
        .with_radius(6787.0 / 2.0)
        .with_orbit(1.88 * DAYS_PER_YEAR, 2279e5)
        .with_rotation_period(1.03)
        .with_axial_tilt(25.19);

    let jupiter = planet("Jupiter", "木星", "jupiter", "textures/jupiter.jpg")
        .with_radius(1_427_960.0 / 2.0)
        .with_orbit(11.86 * DAYS_PER_YEAR, 7783e5)
        .with_rotation_period(0.41)
        .with_axial_tilt(3.13);

    let saturn = planet("Saturn", "土星", "saturn", "textures/saturn.jpg")
        .with_radius(120_660.0 / 2.0)
        .with_orbit(29.46 * DAYS_PER_YEAR, 1427e6)
        .with_rotation_period(0.44)
        .with_axial_tilt(26.73);

    let uranus = planet("Uranus", "天王星", "uranus", "textures/uranus.jpg")
        .with_radius(51118.0 / 2.0)
        .with_orbit(84.01 * DAYS_PER_YEAR, 2871e6)
        .with_rotation_period(-0.72)
        .with_axial_tilt(97.77);

    let neptune = planet("Neptune", "海王星", "neptune", "textures/neptune.jpg")
        .with_radius(48600.0 / 2.0)
        .with_orbit(164.8 * DAYS_PER_YEAR, 44971e5)
        .with_rotation_period(0.72)
        .with_axial_tilt(28.32);

    let sun = planet("Sun", "太阳", "sun", "textures/sun.jpg")
        .with_luminosity(3846e23)
        .with_radius(1_392_684.0)
        .with_rotation_period(24.47 * 24.0);

    BodySpec::with_satellites(
        sun,
        vec![
            BodySpec::leaf(mercury),
            BodySpec::leaf(venus),
            BodySpec::with_satellites(earth, vec![BodySpec::leaf(moon)]),
            BodySpec::with_satellites(mars, vec![BodySpec::leaf(phobos)]),
            BodySpec::leaf(jupiter),
            BodySpec::leaf(saturn),
            BodySpec::leaf(uranus),
            BodySpec::leaf(neptune),
        ],
    )
}

/// The catalog flattened into a ready [`SolarSystem`].
pub fn solar_system() -> Result<SolarSystem, SolariumError> {
    SolarSystem::new(solar_system_spec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_is_the_only_luminous_stationary_body() {
        let system = solar_system().unwrap();
        for id in system.ids() {
            let body = system.body(id).unwrap();
            if id == SolarSystem::ROOT {
                assert_eq!(body.orbital_period, 0.0);
                assert!(body.is_luminous());
            } else {
                assert_ne!(body.orbital_period, 0.0, "{}", body.name);
                assert!(!body.is_luminous());
                assert!(body.orbital_distance.is_some());
            }
        }
    }

    #[test]
    fn every_body_has_a_texture() {
        let system = solar_system().unwrap();
        assert!(system
            .ids()
            .all(|id| system.body(id).unwrap().texture.is_some()));
    }

    #[test]
    fn phobos_keeps_its_lowercase_address() {
        let system = solar_system().unwrap();
        let phobos = system.resolve("Sun/Mars/phobos").unwrap();
        assert_eq!(system.path(phobos).as_deref(), Some("Sun/Mars/phobos"));
        assert_eq!(system.body(phobos).unwrap().display_name, "火卫一");
        assert_eq!(system.resolve("Sun/Mars/Phobos"), None);
    }

    #[test]
    fn retrograde_spinners() {
        let system = solar_system().unwrap();
        let venus = system.resolve("Sun/Venus").unwrap();
        let uranus = system.resolve("Sun/Uranus").unwrap();
        assert!(system.body(venus).unwrap().rotation_period < 0.0);
        assert!(system.body(uranus).unwrap().rotation_period < 0.0);
    }
}
