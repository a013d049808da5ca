//! Rendering systems for the orbit viewer.
//!
//! Draws the Sun, each planet's sampled orbit and its current position. All
//! numbers come from the [`Ephemeris`]; this module only maps AU to pixels.

pub mod bodies;
pub mod orbits;

use std::collections::HashSet;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::ephemeris::{CelestialBodyId, Ephemeris, KeplerError};
use crate::types::SimulationTime;

use self::bodies::draw_bodies;
use self::orbits::OrbitPathPlugin;

pub use self::orbits::{OrbitPathSettings, OrbitPaths};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Ephemeris>()
            .init_resource::<BodyPositions>()
            .add_plugins(OrbitPathPlugin)
            .add_systems(Update, (update_body_positions, draw_bodies).chain());
    }
}

/// Positions of the planets for the current frame, in AU.
#[derive(Resource, Default)]
pub struct BodyPositions {
    /// Bodies that solved this frame.
    pub current: Vec<(CelestialBodyId, DVec2)>,
    /// Bodies that have failed at least once (reported only the first time).
    failed: HashSet<CelestialBodyId>,
}

impl BodyPositions {
    /// Recompute every position at `days` since J2000.
    ///
    /// Bodies that fail are left out of [`Self::current`]. Returns the errors
    /// for bodies failing for the first time.
    pub fn refresh(
        &mut self,
        ephemeris: &Ephemeris,
        days: f64,
    ) -> Vec<(CelestialBodyId, KeplerError)> {
        self.current.clear();
        let mut new_failures = Vec::new();
        for (id, result) in ephemeris.positions(days) {
            match result {
                Ok(pos) => self.current.push((id, pos)),
                Err(err) => {
                    if self.failed.insert(id) {
                        new_failures.push((id, err));
                    }
                }
            }
        }
        new_failures
    }
}

fn update_body_positions(
    ephemeris: Res<Ephemeris>,
    sim_time: Res<SimulationTime>,
    mut positions: ResMut<BodyPositions>,
) {
    for (id, err) in positions.refresh(&ephemeris, sim_time.days) {
        warn!("Skipping {}: {}", id, err);
    }
}

/// Map a heliocentric position in AU to screen-space world units.
pub fn to_screen(pos_au: DVec2, pixels_per_au: f32) -> Vec2 {
    pos_au.as_vec2() * pixels_per_au
}

/// Shorter side of the window, in logical pixels.
pub(crate) fn window_min_side(window: &Window) -> f32 {
    window.width().min(window.height())
}

/// Approximate visual color for a body.
pub fn body_color(id: CelestialBodyId) -> Color {
    orbit_color(id, 1.0)
}

/// Body color with a given alpha.
pub fn orbit_color(id: CelestialBodyId, alpha: f32) -> Color {
    match id {
        CelestialBodyId::Mercury => Color::srgba(0.6, 0.6, 0.6, alpha),
        CelestialBodyId::Venus => Color::srgba(0.9, 0.85, 0.7, alpha),
        CelestialBodyId::Earth => Color::srgba(0.2, 0.5, 0.8, alpha),
        CelestialBodyId::Mars => Color::srgba(0.8, 0.4, 0.2, alpha),
        CelestialBodyId::Jupiter => Color::srgba(0.8, 0.7, 0.6, alpha),
        CelestialBodyId::Saturn => Color::srgba(0.9, 0.85, 0.6, alpha),
        CelestialBodyId::Uranus => Color::srgba(0.6, 0.8, 0.9, alpha),
        CelestialBodyId::Neptune => Color::srgba(0.3, 0.5, 0.9, alpha),
        CelestialBodyId::Pluto => Color::srgba(0.75, 0.65, 0.55, alpha),
    }
}
