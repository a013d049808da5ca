//! Camera and viewport for the orbit viewer.
//!
//! The viewport is an owned resource describing how many AU are visible from
//! the Sun to the edge of the window; keyboard shortcuts zoom it.

use bevy::prelude::*;

/// Default half-width of the visible region, in AU (fits Pluto's orbit).
pub const DEFAULT_HALF_EXTENT_AU: f64 = 45.0;

/// Closest zoom, in AU from centre to edge.
pub const MIN_HALF_EXTENT_AU: f64 = 0.1;

/// Furthest zoom, in AU from centre to edge.
pub const MAX_HALF_EXTENT_AU: f64 = 100.0;

/// Multiplier applied per zoom step.
pub const ZOOM_STEP: f64 = 1.2;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Visible region of the heliocentric plane.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Distance in AU from the Sun to the nearest window edge.
    pub half_extent_au: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            half_extent_au: DEFAULT_HALF_EXTENT_AU,
        }
    }
}

impl Viewport {
    /// Show less of the plane.
    pub fn zoom_in(&mut self) {
        self.half_extent_au = (self.half_extent_au / ZOOM_STEP).max(MIN_HALF_EXTENT_AU);
    }

    /// Show more of the plane.
    pub fn zoom_out(&mut self) {
        self.half_extent_au = (self.half_extent_au * ZOOM_STEP).min(MAX_HALF_EXTENT_AU);
    }

    /// Back to the default extent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pixels per AU for a window whose shorter side is `min_side_px` pixels.
    pub fn pixels_per_au(&self, min_side_px: f32) -> f32 {
        (0.5 * min_side_px as f64 / self.half_extent_au) as f32
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, zoom_shortcuts);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// `=`/`+` zoom in, `-` zooms out, `0` resets.
fn zoom_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut viewport: ResMut<Viewport>) {
    let before = *viewport;

    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        viewport.zoom_in();
    }
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        viewport.zoom_out();
    }
    if keys.just_pressed(KeyCode::Digit0) || keys.just_pressed(KeyCode::Numpad0) {
        viewport.reset();
    }

    if *viewport != before {
        info!("Zoom: ±{:.2} AU", viewport.half_extent_au);
    }
}
