//! Orbital elements for the planets (and Pluto), referenced to J2000.
//! Simplified, approximate values for a flattened 2D heliocentric view.

use std::fmt;

/// Identifier for the bodies in the element table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBodyId {
    /// Every body in table order (innermost first).
    pub const ALL: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
        CelestialBodyId::Pluto,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
            CelestialBodyId::Pluto => "Pluto",
        }
    }

    /// Look up a body by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<CelestialBodyId> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Orbital elements for this body.
    pub fn elements(&self) -> OrbitalElements {
        get_elements(*self)
    }
}

impl fmt::Display for CelestialBodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classical orbital elements of a body.
///
/// Angles are in degrees, distances in AU, time in days. Inclination, node and
/// argument of periapsis are carried for completeness; the planar transform in
/// [`super::kepler`] treats every orbit as an unrotated ellipse in one plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in AU
    pub semi_major_axis_au: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees
    pub inclination_deg: f64,
    /// Longitude of the ascending node in degrees
    pub ascending_node_deg: f64,
    /// Argument of periapsis in degrees
    pub arg_periapsis_deg: f64,
    /// Mean anomaly at the J2000 epoch in degrees
    pub mean_anomaly_at_epoch_deg: f64,
    /// Sidereal orbital period in days
    pub orbital_period_days: f64,
}

impl OrbitalElements {
    /// Elements for a body with no orientation (i = Ω = ω = 0).
    pub const fn planar(
        semi_major_axis_au: f64,
        eccentricity: f64,
        mean_anomaly_at_epoch_deg: f64,
        orbital_period_days: f64,
    ) -> Self {
        Self {
            semi_major_axis_au,
            eccentricity,
            inclination_deg: 0.0,
            ascending_node_deg: 0.0,
            arg_periapsis_deg: 0.0,
            mean_anomaly_at_epoch_deg,
            orbital_period_days,
        }
    }
}

/// Get the orbital elements for a body.
pub const fn get_elements(id: CelestialBodyId) -> OrbitalElements {
    match id {
        CelestialBodyId::Mercury => OrbitalElements {
            semi_major_axis_au: 0.387,
            eccentricity: 0.206,
            inclination_deg: 7.0,
            ascending_node_deg: 48.3,
            arg_periapsis_deg: 29.1,
            mean_anomaly_at_epoch_deg: 174.8,
            orbital_period_days: 88.0,
        },
        CelestialBodyId::Venus => OrbitalElements {
            semi_major_axis_au: 0.723,
            eccentricity: 0.007,
            inclination_deg: 3.4,
            ascending_node_deg: 76.7,
            arg_periapsis_deg: 54.9,
            mean_anomaly_at_epoch_deg: 50.4,
            orbital_period_days: 224.7,
        },
        CelestialBodyId::Earth => OrbitalElements {
            semi_major_axis_au: 1.000,
            eccentricity: 0.017,
            inclination_deg: 0.0,
            ascending_node_deg: -11.3,
            arg_periapsis_deg: 114.2,
            mean_anomaly_at_epoch_deg: 358.6,
            orbital_period_days: 365.25,
        },
        CelestialBodyId::Mars => OrbitalElements {
            semi_major_axis_au: 1.524,
            eccentricity: 0.093,
            inclination_deg: 1.85,
            ascending_node_deg: 49.6,
            arg_periapsis_deg: 286.5,
            mean_anomaly_at_epoch_deg: 19.4,
            orbital_period_days: 687.0,
        },
        CelestialBodyId::Jupiter => OrbitalElements {
            semi_major_axis_au: 5.203,
            eccentricity: 0.049,
            inclination_deg: 1.3,
            ascending_node_deg: 100.5,
            arg_periapsis_deg: 273.9,
            mean_anomaly_at_epoch_deg: 20.0,
            orbital_period_days: 4331.0,
        },
        CelestialBodyId::Saturn => OrbitalElements {
            semi_major_axis_au: 9.537,
            eccentricity: 0.056,
            inclination_deg: 2.5,
            ascending_node_deg: 113.7,
            arg_periapsis_deg: 339.4,
            mean_anomaly_at_epoch_deg: 317.0,
            orbital_period_days: 10747.0,
        },
        CelestialBodyId::Uranus => OrbitalElements {
            semi_major_axis_au: 19.191,
            eccentricity: 0.046,
            inclination_deg: 0.8,
            ascending_node_deg: 74.0,
            arg_periapsis_deg: 96.9,
            mean_anomaly_at_epoch_deg: 142.2,
            orbital_period_days: 30589.0,
        },
        CelestialBodyId::Neptune => OrbitalElements {
            semi_major_axis_au: 30.07,
            eccentricity: 0.010,
            inclination_deg: 1.8,
            ascending_node_deg: 131.8,
            arg_periapsis_deg: 272.8,
            mean_anomaly_at_epoch_deg: 256.1,
            orbital_period_days: 59800.0,
        },
        CelestialBodyId::Pluto => OrbitalElements {
            semi_major_axis_au: 39.482,
            eccentricity: 0.2488,
            inclination_deg: 17.14,
            ascending_node_deg: 110.3,
            arg_periapsis_deg: 224.1,
            mean_anomaly_at_epoch_deg: 14.9,
            orbital_period_days: 90560.0,
        },
    }
}

/// Iterate over every body and its elements, in table order.
pub fn all_bodies() -> impl Iterator<Item = (CelestialBodyId, OrbitalElements)> {
    CelestialBodyId::ALL.iter().map(|&id| (id, get_elements(id)))
}
