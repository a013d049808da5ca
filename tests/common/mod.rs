//! Common test utilities for integration tests.

use bevy::math::DVec2;
use solar_orbits::ephemeris::OrbitalElements;

/// Elapsed days at which a body's mean anomaly equals `mean_anomaly_deg`
/// during its first revolution after the epoch.
pub fn days_at_mean_anomaly(elements: &OrbitalElements, mean_anomaly_deg: f64) -> f64 {
    let advance = (mean_anomaly_deg - elements.mean_anomaly_at_epoch_deg).rem_euclid(360.0);
    advance / 360.0 * elements.orbital_period_days
}

/// Distance between two positions, in AU.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a - b).length()
}
