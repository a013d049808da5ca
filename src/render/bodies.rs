//! Sun and planet markers at their current positions.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::Viewport;
use crate::render::{BodyPositions, body_color, to_screen, window_min_side};

/// Marker radius for the Sun, in pixels.
const SUN_RADIUS_PX: f32 = 8.0;

/// Marker radius for planets, in pixels.
const PLANET_RADIUS_PX: f32 = 4.0;

pub(crate) fn draw_bodies(
    mut gizmos: Gizmos,
    positions: Res<BodyPositions>,
    viewport: Res<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let scale = viewport.pixels_per_au(window_min_side(window));

    gizmos.circle_2d(
        Isometry2d::from_translation(Vec2::ZERO),
        SUN_RADIUS_PX,
        Color::srgb(1.0, 0.95, 0.4),
    );

    for &(id, pos) in &positions.current {
        gizmos.circle_2d(
            Isometry2d::from_translation(to_screen(pos, scale)),
            PLANET_RADIUS_PX,
            body_color(id),
        );
    }
}
