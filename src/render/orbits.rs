//! Orbit path rendering using Bevy Gizmos.
//!
//! Each planet's orbit is sampled once at startup by mean anomaly (the shape
//! does not depend on time) and drawn every frame as a closed polyline.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::Viewport;
use crate::ephemeris::{CelestialBodyId, DEFAULT_PATH_SAMPLES, Ephemeris};
use crate::render::{orbit_color, to_screen, window_min_side};

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .init_resource::<OrbitPaths>()
            .add_systems(Startup, build_orbit_paths)
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Samples per revolution.
    pub samples: usize,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            samples: DEFAULT_PATH_SAMPLES,
            alpha: 0.2,
        }
    }
}

/// Sampled orbit shapes in AU, one per body that solved successfully.
#[derive(Resource, Default)]
pub struct OrbitPaths {
    pub paths: Vec<(CelestialBodyId, Vec<DVec2>)>,
}

fn build_orbit_paths(
    ephemeris: Res<Ephemeris>,
    settings: Res<OrbitPathSettings>,
    mut orbit_paths: ResMut<OrbitPaths>,
) {
    orbit_paths.paths.clear();
    for (id, _) in ephemeris.bodies() {
        match ephemeris.orbit_path(id, settings.samples) {
            Ok(path) => orbit_paths.paths.push((id, path)),
            Err(err) => warn!("Skipping orbit path for {}: {}", id, err),
        }
    }
    info!("Sampled {} orbit paths", orbit_paths.paths.len());
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    orbit_paths: Res<OrbitPaths>,
    viewport: Res<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !settings.visible {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let scale = viewport.pixels_per_au(window_min_side(window));

    for (id, path) in &orbit_paths.paths {
        let Some(&first) = path.first() else {
            continue;
        };
        let color = orbit_color(*id, settings.alpha);
        let points = path
            .iter()
            .chain(std::iter::once(&first))
            .map(|&p| to_screen(p, scale));
        gizmos.linestrip_2d(points, color);
    }
}
