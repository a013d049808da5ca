//! Test utilities for orbit computations.
//!
//! Provides fixtures for creating test elements and assertions for verifying
//! geometric invariants of Keplerian orbits.

use bevy::math::DVec2;

use crate::ephemeris::OrbitalElements;

/// Fixtures for creating test orbital elements.
pub mod fixtures {
    use super::*;

    /// Circular orbit of radius `radius_au` starting at periapsis (+x).
    pub fn circular_orbit(radius_au: f64, period_days: f64) -> OrbitalElements {
        OrbitalElements::planar(radius_au, 0.0, 0.0, period_days)
    }

    /// Elliptical orbit starting at the given mean anomaly.
    pub fn elliptical_orbit(
        semi_major_axis_au: f64,
        eccentricity: f64,
        mean_anomaly_deg: f64,
    ) -> OrbitalElements {
        assert!(
            (0.0..1.0).contains(&eccentricity),
            "Eccentricity must be in [0, 1) for elliptical orbit"
        );
        OrbitalElements::planar(semi_major_axis_au, eccentricity, mean_anomaly_deg, 100.0)
    }
}

/// Assertions for verifying orbit invariants.
pub mod assertions {
    use super::*;

    /// |E - e·sin(E) - M| for M in degrees.
    pub fn kepler_residual(eccentric_anomaly: f64, eccentricity: f64, mean_anomaly_deg: f64) -> f64 {
        (eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly_deg.to_radians())
            .abs()
    }

    /// Assert that a position lies between perihelion and aphelion.
    ///
    /// # Panics
    /// Panics if the distance from the Sun is outside [a(1-e), a(1+e)] by more
    /// than `tolerance` AU.
    pub fn assert_within_apsides(elements: &OrbitalElements, pos: DVec2, tolerance: f64) {
        let r = pos.length();
        assert!(
            r >= elements.perihelion_au() - tolerance && r <= elements.aphelion_au() + tolerance,
            "r = {r:.9} AU outside [{:.9}, {:.9}]",
            elements.perihelion_au(),
            elements.aphelion_au()
        );
    }

    /// Assert that two positions agree within `tolerance` AU.
    pub fn assert_positions_close(actual: DVec2, expected: DVec2, tolerance: f64) {
        let distance = (actual - expected).length();
        assert!(
            distance <= tolerance,
            "positions differ: actual={actual:?}, expected={expected:?}, distance={distance:.3e}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::compute_position;
    use crate::ephemeris::Ephemeris;
    use crate::types::SimulationTime;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_has_constant_radius() {
        let orbit = fixtures::circular_orbit(2.0, 50.0);
        for day in [0.0, 7.0, 25.0, 49.0] {
            let pos = compute_position(&orbit, day).unwrap();
            assert_relative_eq!(pos.length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_elliptical_orbit_within_apsides() {
        let orbit = fixtures::elliptical_orbit(3.0, 0.4, 10.0);
        for day in [0.0, 33.0, 66.0] {
            let pos = compute_position(&orbit, day).unwrap();
            assertions::assert_within_apsides(&orbit, pos, 1e-9);
        }
    }

    #[test]
    #[should_panic(expected = "Eccentricity must be in [0, 1)")]
    fn test_elliptical_orbit_rejects_parabolic() {
        fixtures::elliptical_orbit(1.0, 1.0, 0.0);
    }

    #[test]
    fn test_headless_app_holds_resources() {
        let mut app = bevy_test::headless_app();
        app.insert_resource(Ephemeris::default());
        app.insert_resource(SimulationTime::at_j2000_days(0.0));
        app.update();

        let sim_time = app.world().resource::<SimulationTime>();
        assert_eq!(sim_time.days, 0.0);
    }
}
