/// Static description of one star, planet or moon.
///
/// Optional fields mean "feature absent": a body without a radius is never
/// drawn, a body without an orbital distance sits at its parent's position,
/// and a zero period means no rotation at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Unique ASCII key used in `/`-joined addresses.
    pub name: String,
    /// Localized label for UI display.
    pub display_name: String,
    /// Mean radius in kilometres.
    pub radius: Option<f32>,
    /// Radiant power in watts; only self-luminous bodies carry one.
    pub luminosity: Option<f32>,
    /// Sidereal day in Earth days. The sign encodes spin direction.
    pub rotation_period: f32,
    /// Orbital period in Earth days. Zero means the body does not orbit.
    pub orbital_period: f32,
    /// Mean distance to the parent body in kilometres.
    pub orbital_distance: Option<f32>,
    /// Axial tilt in degrees.
    pub axial_tilt: Option<f32>,
    /// Logical texture name, resolved against the texture registry.
    pub texture: Option<String>,
    /// Path of the surface image the texture is loaded from.
    pub surface_image: Option<String>,
}

impl CelestialBody {
    /// A body with the given names and every optional field absent.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            radius: None,
            luminosity: None,
            rotation_period: 0.0,
            orbital_period: 0.0,
            orbital_distance: None,
            axial_tilt: None,
            texture: None,
            surface_image: None,
        }
    }

    /// Set the radius (km).
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Mark the body as self-luminous with the given radiant power.
    #[must_use]
    pub fn with_luminosity(mut self, luminosity: f32) -> Self {
        self.luminosity = Some(luminosity);
        self
    }

    /// Set the signed rotation period (days).
    #[must_use]
    pub fn with_rotation_period(mut self, period: f32) -> Self {
        self.rotation_period = period;
        self
    }

    /// Set the orbit: period (days) and distance to the parent (km).
    #[must_use]
    pub fn with_orbit(mut self, period: f32, distance: f32) -> Self {
        self.orbital_period = period;
        self.orbital_distance = Some(distance);
        self
    }

    /// Set the axial tilt (degrees).
    #[must_use]
    pub fn with_axial_tilt(mut self, tilt: f32) -> Self {
        self.axial_tilt = Some(tilt);
        self
    }

    /// Set the texture key and its source image path.
    #[must_use]
    pub fn with_texture(
        mut self,
        texture: impl Into<String>,
        surface_image: impl Into<String>,
    ) -> Self {
        self.texture = Some(texture.into());
        self.surface_image = Some(surface_image.into());
        self
    }

    /// Whether this body emits light.
    #[must_use]
    pub fn is_luminous(&self) -> bool {
        self.luminosity.is_some_and(|l| l > 0.0)
    }
}

/// A body together with the satellites it owns, as handed to
/// [`SolarSystem::new`](super::SolarSystem::new).
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    /// The body itself.
    pub body: CelestialBody,
    /// Bodies orbiting this one, in display order.
    pub satellites: Vec<BodySpec>,
}

impl BodySpec {
    /// A body with no satellites.
    #[must_use]
    pub fn leaf(body: CelestialBody) -> Self {
        Self {
            body,
            satellites: Vec::new(),
        }
    }

    /// A body with the given satellites.
    #[must_use]
    pub fn with_satellites(body: CelestialBody, satellites: Vec<Self>) -> Self {
        Self { body, satellites }
    }
}
