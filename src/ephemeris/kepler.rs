//! Kepler orbit solver using Newton's method for the Kepler equation,
//! and the elements → planar position transform built on it.

use bevy::math::DVec2;
use std::f64::consts::PI;

use super::data::OrbitalElements;

/// Default convergence tolerance on the Newton step, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on Newton iterations before giving up.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default number of samples for one revolution of an orbit path.
pub const DEFAULT_PATH_SAMPLES: usize = 360;

/// Above this eccentricity the solver starts from E = π instead of E = M.
const HIGH_ECCENTRICITY: f64 = 0.8;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KeplerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Kepler solver did not converge after {iterations} iterations \
         (M = {mean_anomaly_deg} deg, e = {eccentricity})"
    )]
    Convergence {
        mean_anomaly_deg: f64,
        eccentricity: f64,
        iterations: u32,
    },

    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),
}

/// Settings for the Newton-Raphson Kepler solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Stop once |ΔE| falls below this value (radians).
    pub tolerance: f64,
    /// Fail with [`KeplerError::Convergence`] after this many steps.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Default iteration cap with a custom tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Solve Kepler's equation M = E - e*sin(E) for the eccentric anomaly E.
    ///
    /// # Arguments
    /// * `mean_anomaly_deg` - Mean anomaly M in degrees (any finite value)
    /// * `eccentricity` - Orbital eccentricity in [0, 1)
    ///
    /// # Returns
    /// Eccentric anomaly E in radians. The result is not wrapped into [0, 2π).
    pub fn solve(&self, mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64, KeplerError> {
        if !mean_anomaly_deg.is_finite() {
            return Err(KeplerError::InvalidInput(format!(
                "mean anomaly must be finite, got {mean_anomaly_deg}"
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(KeplerError::InvalidInput(format!(
                "eccentricity must be in [0, 1), got {eccentricity}"
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(KeplerError::InvalidInput(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }

        let m = mean_anomaly_deg.to_radians();

        // Initial guess: E = M for low eccentricity, π for high e
        let mut e_anomaly = if eccentricity < HIGH_ECCENTRICITY {
            m
        } else {
            PI
        };

        for _ in 0..self.max_iterations {
            // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
            let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
            let f_prime = 1.0 - eccentricity * e_anomaly.cos();

            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < self.tolerance {
                return Ok(e_anomaly);
            }
        }

        Err(KeplerError::Convergence {
            mean_anomaly_deg,
            eccentricity,
            iterations: self.max_iterations,
        })
    }
}

/// Solve Kepler's equation with the default tolerance and iteration cap.
///
/// See [`SolverConfig::solve`].
pub fn solve_eccentric_anomaly(mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64, KeplerError> {
    SolverConfig::default().solve(mean_anomaly_deg, eccentricity)
}

/// True anomaly ν (radians) from eccentric anomaly E.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;

    // atan2 keeps the full quadrant range near E = π
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

/// Mean anomaly in degrees, wrapped into [0, 360), after `elapsed_days`.
///
/// Assumes the elements have a non-zero period; see [`OrbitalElements::validate`].
pub fn mean_anomaly_at(elements: &OrbitalElements, elapsed_days: f64) -> f64 {
    let m = (elements.mean_anomaly_at_epoch_deg
        + 360.0 * elapsed_days / elements.orbital_period_days)
        .rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if m >= 360.0 { 0.0 } else { m }
}

/// Distance from the focus (AU) at eccentric anomaly E.
pub fn radius_at(elements: &OrbitalElements, eccentric_anomaly: f64) -> f64 {
    elements.semi_major_axis_au * (1.0 - elements.eccentricity * eccentric_anomaly.cos())
}

/// Planar position (AU) at a given mean anomaly (degrees).
///
/// The orbit is treated as an unrotated ellipse with periapsis on +x.
pub fn position_at_mean_anomaly(
    elements: &OrbitalElements,
    mean_anomaly_deg: f64,
    solver: &SolverConfig,
) -> Result<DVec2, KeplerError> {
    elements.validate()?;
    planar_position(elements, mean_anomaly_deg, solver)
}

/// Heliocentric planar position (AU) after `elapsed_days` since the epoch.
pub fn compute_position(elements: &OrbitalElements, elapsed_days: f64) -> Result<DVec2, KeplerError> {
    compute_position_with(elements, elapsed_days, &SolverConfig::default())
}

/// [`compute_position`] with an explicit solver configuration.
pub fn compute_position_with(
    elements: &OrbitalElements,
    elapsed_days: f64,
    solver: &SolverConfig,
) -> Result<DVec2, KeplerError> {
    elements.validate()?;
    if !elapsed_days.is_finite() {
        return Err(KeplerError::InvalidInput(format!(
            "elapsed days must be finite, got {elapsed_days}"
        )));
    }

    let m = mean_anomaly_at(elements, elapsed_days);
    planar_position(elements, m, solver)
}

/// Sample one full revolution at evenly spaced mean anomalies.
///
/// Sample `k` lies at mean anomaly `k * 360 / sample_count` degrees, so the
/// default count yields the positions at 0°, 1°, …, 359°.
pub fn sample_orbit_path(
    elements: &OrbitalElements,
    sample_count: usize,
) -> Result<Vec<DVec2>, KeplerError> {
    sample_orbit_path_with(elements, sample_count, &SolverConfig::default())
}

/// [`sample_orbit_path`] with an explicit solver configuration.
pub fn sample_orbit_path_with(
    elements: &OrbitalElements,
    sample_count: usize,
    solver: &SolverConfig,
) -> Result<Vec<DVec2>, KeplerError> {
    elements.validate()?;
    if sample_count == 0 {
        return Err(KeplerError::InvalidInput(
            "orbit path needs at least one sample".to_string(),
        ));
    }

    let step = 360.0 / sample_count as f64;
    (0..sample_count)
        .map(|k| planar_position(elements, k as f64 * step, solver))
        .collect()
}

fn planar_position(
    elements: &OrbitalElements,
    mean_anomaly_deg: f64,
    solver: &SolverConfig,
) -> Result<DVec2, KeplerError> {
    let e_anomaly = solver.solve(mean_anomaly_deg, elements.eccentricity)?;
    let radius = radius_at(elements, e_anomaly);
    let nu = true_anomaly(e_anomaly, elements.eccentricity);
    Ok(DVec2::new(radius * nu.cos(), radius * nu.sin()))
}

impl OrbitalElements {
    /// Check that the elements describe a closed orbit.
    pub fn validate(&self) -> Result<(), KeplerError> {
        let fields = [
            ("semi-major axis", self.semi_major_axis_au),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination_deg),
            ("ascending node", self.ascending_node_deg),
            ("argument of periapsis", self.arg_periapsis_deg),
            ("mean anomaly at epoch", self.mean_anomaly_at_epoch_deg),
            ("orbital period", self.orbital_period_days),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(KeplerError::InvalidElements(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.orbital_period_days <= 0.0 {
            return Err(KeplerError::InvalidElements(format!(
                "orbital period must be positive, got {} days",
                self.orbital_period_days
            )));
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(KeplerError::InvalidElements(format!(
                "semi-major axis must be positive, got {} AU",
                self.semi_major_axis_au
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(KeplerError::InvalidElements(format!(
                "eccentricity must be in [0, 1), got {}",
                self.eccentricity
            )));
        }
        Ok(())
    }

    /// Closest distance to the Sun, a(1 - e), in AU.
    pub fn perihelion_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the Sun, a(1 + e), in AU.
    pub fn aphelion_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Mean motion in degrees per day.
    pub fn mean_motion_deg_per_day(&self) -> f64 {
        360.0 / self.orbital_period_days
    }

    /// Position (AU) after `elapsed_days` since the epoch.
    pub fn position_at(&self, elapsed_days: f64) -> Result<DVec2, KeplerError> {
        compute_position(self, elapsed_days)
    }

    /// One revolution sampled at `sample_count` evenly spaced mean anomalies.
    pub fn orbit_path(&self, sample_count: usize) -> Result<Vec<DVec2>, KeplerError> {
        sample_orbit_path(self, sample_count)
    }
}
