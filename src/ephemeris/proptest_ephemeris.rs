//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use proptest::prelude::*;

use super::data::OrbitalElements;
use super::kepler::{
    DEFAULT_TOLERANCE, SolverConfig, compute_position, position_at_mean_anomaly,
    sample_orbit_path, solve_eccentric_anomaly,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Verify Kepler solver convergence for all valid eccentricities and mean anomalies.
    ///
    /// The solver should always converge and produce E such that M = E - e*sin(E).
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_deg in 0.0f64..360.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let e_anom = solve_eccentric_anomaly(mean_anomaly_deg, eccentricity).unwrap();

        let m_check = e_anom - eccentricity * e_anom.sin();
        let error = (m_check - mean_anomaly_deg.to_radians()).abs();
        prop_assert!(
            error < DEFAULT_TOLERANCE,
            "Kepler solver failed: M={}, e={}, E={}, M_check={}, error={}",
            mean_anomaly_deg, eccentricity, e_anom, m_check, error
        );
    }

    /// Zero mean anomaly maps to exactly zero eccentric anomaly below the
    /// high-eccentricity starting point.
    #[test]
    fn prop_zero_mean_anomaly(eccentricity in 0.0f64..0.8) {
        prop_assert_eq!(solve_eccentric_anomaly(0.0, eccentricity), Ok(0.0));
    }

    /// Verify position returns to start after one period.
    #[test]
    fn prop_position_periodic(
        eccentricity in 0.0f64..0.9,
        semi_major_axis_au in 0.1f64..50.0,
        period_days in 10.0f64..100_000.0,
        mean_anomaly_at_epoch in 0.0f64..360.0,
        start_days in -10_000.0f64..10_000.0,
    ) {
        let orbit = OrbitalElements::planar(
            semi_major_axis_au,
            eccentricity,
            mean_anomaly_at_epoch,
            period_days,
        );

        let pos_start = compute_position(&orbit, start_days).unwrap();
        let pos_end = compute_position(&orbit, start_days + period_days).unwrap();

        let distance = (pos_end - pos_start).length();
        prop_assert!(
            distance < 1e-7 * semi_major_axis_au,
            "Position not periodic: distance after one period = {} AU",
            distance
        );
    }

    /// Radius always lies between perihelion and aphelion.
    #[test]
    fn prop_radius_bounded(
        eccentricity in 0.0f64..0.9,
        elapsed_days in -5_000.0f64..5_000.0,
    ) {
        let orbit = OrbitalElements::planar(3.0, eccentricity, 42.0, 1000.0);
        let r = compute_position(&orbit, elapsed_days).unwrap().length();

        prop_assert!(r >= orbit.perihelion_au() - 1e-9, "r={} below perihelion", r);
        prop_assert!(r <= orbit.aphelion_au() + 1e-9, "r={} beyond aphelion", r);
    }

    /// Every position lies on the ellipse with the Sun at the focus.
    ///
    /// Relative to the ellipse centre at (-ae, 0): (x + ae)²/a² + y²/b² = 1.
    #[test]
    fn prop_position_on_ellipse(
        eccentricity in 0.0f64..0.9,
        mean_anomaly_deg in 0.0f64..360.0,
    ) {
        let a = 5.0;
        let orbit = OrbitalElements::planar(a, eccentricity, 0.0, 365.0);
        let pos = position_at_mean_anomaly(&orbit, mean_anomaly_deg, &SolverConfig::default())
            .unwrap();

        let b = a * (1.0 - eccentricity * eccentricity).sqrt();
        let cx = pos.x + a * eccentricity;
        let value = (cx / a).powi(2) + (pos.y / b).powi(2);
        prop_assert!((value - 1.0).abs() < 1e-6, "ellipse equation gives {}", value);
    }

    /// Path samples are the positions at their mean anomalies.
    #[test]
    fn prop_path_matches_mean_anomaly(
        sample_count in 1usize..720,
        eccentricity in 0.0f64..0.5,
    ) {
        let orbit = OrbitalElements::planar(1.0, eccentricity, 0.0, 100.0);
        let path = sample_orbit_path(&orbit, sample_count).unwrap();
        prop_assert_eq!(path.len(), sample_count);

        let k = sample_count / 2;
        let expected = position_at_mean_anomaly(
            &orbit,
            k as f64 * (360.0 / sample_count as f64),
            &SolverConfig::default(),
        )
        .unwrap();
        prop_assert!((path[k] - expected).length() < 1e-12);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;
    use crate::ephemeris::data::all_bodies;

    #[test]
    fn test_all_bodies_have_finite_positions() {
        for (id, elements) in all_bodies() {
            for days in [0.0, 9000.0, -36525.0, 1e6] {
                let pos = compute_position(&elements, days).unwrap();
                assert!(pos.is_finite(), "{id} position not finite at t={days}");
            }
        }
    }

    #[test]
    fn test_kepler_solver_at_boundary_mean_anomaly() {
        for m in [0.0, 180.0, 359.999, 360.0, 720.0, -90.0] {
            let e = solve_eccentric_anomaly(m, 0.5).unwrap();
            assert!(e.is_finite(), "Solver failed at M = {}", m);
        }
    }
}
