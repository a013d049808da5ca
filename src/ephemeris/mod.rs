//! Ephemeris module for computing planetary positions.
//!
//! Positions come from analytic two-body Keplerian orbits over a fixed element
//! table. Everything here is pure: no caching, no mutation after construction.
//!
//! Coordinate frame:
//! - 2D heliocentric (Sun at origin), periapsis of every orbit on +x.
//! - Inclination and orientation elements are carried but not applied.

pub mod data;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{CelestialBodyId, OrbitalElements, all_bodies, get_elements};
pub use kepler::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_PATH_SAMPLES, DEFAULT_TOLERANCE, KeplerError, SolverConfig,
    compute_position, sample_orbit_path, solve_eccentric_anomaly,
};

use bevy::math::DVec2;
use bevy::prelude::*;

/// Resource providing read-only ephemeris queries over the element table.
#[derive(Resource, Clone, Debug, Default)]
pub struct Ephemeris {
    solver: SolverConfig,
}

impl Ephemeris {
    /// Ephemeris over the built-in table with default solver settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ephemeris using a custom solver configuration.
    pub fn with_solver(solver: SolverConfig) -> Self {
        Self { solver }
    }

    /// Solver configuration used for every query.
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Enumerate every body and its elements, in table order.
    pub fn bodies(&self) -> impl Iterator<Item = (CelestialBodyId, OrbitalElements)> {
        all_bodies()
    }

    /// Orbital elements for a body.
    pub fn elements(&self, id: CelestialBodyId) -> OrbitalElements {
        get_elements(id)
    }

    /// Planar position (AU) of a body `days` after J2000.
    pub fn position(&self, id: CelestialBodyId, days: f64) -> Result<DVec2, KeplerError> {
        kepler::compute_position_with(&get_elements(id), days, &self.solver)
    }

    /// Positions of every body `days` after J2000.
    ///
    /// Each body is solved independently; a failure for one body is reported
    /// in its slot and does not affect the others.
    pub fn positions(&self, days: f64) -> Vec<(CelestialBodyId, Result<DVec2, KeplerError>)> {
        CelestialBodyId::ALL
            .iter()
            .map(|&id| (id, self.position(id, days)))
            .collect()
    }

    /// One revolution of a body's orbit sampled at evenly spaced mean anomalies.
    pub fn orbit_path(
        &self,
        id: CelestialBodyId,
        sample_count: usize,
    ) -> Result<Vec<DVec2>, KeplerError> {
        kepler::sample_orbit_path_with(&get_elements(id), sample_count, &self.solver)
    }
}
