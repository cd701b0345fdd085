//! Read-only summary of a body for the info panel: its address, parent,
//! physical properties and satellites.

use super::{BodyId, SolarSystem};

/// A physical property shown in the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Radiant power.
    Luminosity,
    /// Mean radius.
    Radius,
    /// Sidereal day.
    RotationPeriod,
    /// Orbital period.
    OrbitalPeriod,
}

impl PropertyKind {
    /// English label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Luminosity => "Luminosity",
            Self::Radius => "Radius",
            Self::RotationPeriod => "Rotation period",
            Self::OrbitalPeriod => "Orbital period",
        }
    }

    /// Label matching the catalog's display-name locale.
    #[must_use]
    pub fn localized_label(self) -> &'static str {
        match self {
            Self::Luminosity => "光照",
            Self::Radius => "半径",
            Self::RotationPeriod => "自转周期",
            Self::OrbitalPeriod => "公转周期",
        }
    }
}

/// A navigable reference to another body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLink {
    /// Address to navigate to.
    pub address: String,
    /// Label to show.
    pub display_name: String,
}

/// Everything the info panel shows about one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySummary {
    /// Link to the body itself.
    pub link: BodyLink,
    /// Link to the body it orbits.
    pub parent: Option<BodyLink>,
    /// Present properties, formatted to four significant digits.
    pub properties: Vec<(PropertyKind, String)>,
    /// Links to the body's direct satellites.
    pub satellites: Vec<BodyLink>,
}

impl BodySummary {
    /// Summarize a body. `None` if `id` is not part of `system`.
    #[must_use]
    pub fn of(system: &SolarSystem, id: BodyId) -> Option<Self> {
        let body = system.body(id)?;
        let link = |id: BodyId| -> Option<BodyLink> {
            Some(BodyLink {
                address: system.path(id)?,
                display_name: system.body(id)?.display_name.clone(),
            })
        };

        let properties = [
            (PropertyKind::Luminosity, body.luminosity),
            (PropertyKind::Radius, body.radius),
            (PropertyKind::RotationPeriod, Some(body.rotation_period)),
            (PropertyKind::OrbitalPeriod, Some(body.orbital_period)),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value.map(|v| (kind, to_precision(f64::from(v), 4)))
        })
        .collect();

        Some(Self {
            link: link(id)?,
            parent: system.parent(id).and_then(link),
            properties,
            satellites: system
                .satellites(id)
                .iter()
                .filter_map(|s| link(*s))
                .collect(),
        })
    }

    /// Formatted value of a property, if the body has it.
    #[must_use]
    pub fn property(&self, kind: PropertyKind) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }
}

/// Format `value` with `digits` significant digits: fixed notation for
/// moderate magnitudes, `1.234e+5` style otherwise.
#[must_use]
pub fn to_precision(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }

    // Rust's `{:e}` applies the rounding, so the exponent already accounts
    // for carries like 9.9996 → 1.000e1.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{value:.decimals$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::catalog;

    #[test]
    fn precision_matches_panel_format() {
        assert_eq!(to_precision(3.846e26, 4), "3.846e+26");
        assert_eq!(to_precision(696_342.0, 4), "6.963e+5");
        assert_eq!(to_precision(587.28, 4), "587.3");
        assert_eq!(to_precision(1.0, 4), "1.000");
        assert_eq!(to_precision(-243.0, 4), "-243.0");
        assert_eq!(to_precision(0.0, 4), "0.000");
        assert_eq!(to_precision(0.41, 4), "0.4100");
        assert_eq!(to_precision(9999.6, 4), "1.000e+4");
    }

    #[test]
    fn every_property_has_both_labels() {
        let kinds = [
            PropertyKind::Luminosity,
            PropertyKind::Radius,
            PropertyKind::RotationPeriod,
            PropertyKind::OrbitalPeriod,
        ];
        for kind in kinds {
            assert!(!kind.label().is_empty());
            assert!(!kind.localized_label().is_ascii(), "{kind:?}");
        }
        assert_eq!(PropertyKind::Radius.localized_label(), "半径");
    }

    #[test]
    fn earth_summary_links_parent_and_moon() {
        let system = catalog::solar_system().unwrap();
        let earth = system.resolve("Sun/Earth").unwrap();
        let summary = BodySummary::of(&system, earth).unwrap();

        assert_eq!(summary.link.address, "Sun/Earth");
        assert_eq!(summary.link.display_name, "地球");
        let parent = summary.parent.as_ref().unwrap();
        assert_eq!(parent.address, "Sun");
        assert_eq!(summary.satellites.len(), 1);
        assert_eq!(summary.satellites[0].address, "Sun/Earth/Moon");

        assert_eq!(summary.property(PropertyKind::Luminosity), None);
        assert_eq!(summary.property(PropertyKind::Radius), Some("6378"));
        assert_eq!(summary.property(PropertyKind::OrbitalPeriod), Some("365.0"));
    }

    #[test]
    fn sun_summary_has_no_parent() {
        let system = catalog::solar_system().unwrap();
        let summary = BodySummary::of(&system, SolarSystem::ROOT).unwrap();
        assert!(summary.parent.is_none());
        assert_eq!(summary.satellites.len(), 8);
        assert_eq!(
            summary.property(PropertyKind::Luminosity),
            Some("3.846e+26")
        );
        assert_eq!(summary.property(PropertyKind::OrbitalPeriod), Some("0.000"));
    }
}
