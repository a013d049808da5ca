//! Solar Orbits - real-time 2D view of the solar system
//!
//! Draws every planet's Keplerian orbit and its current position.
//! Keys: `=`/`-` zoom, `0` reset zoom, Space pause, `[`/`]` time scale.

use bevy::prelude::*;

use solar_orbits::camera::CameraPlugin;
use solar_orbits::ephemeris::Ephemeris;
use solar_orbits::render::RenderPlugin;
use solar_orbits::time::TimePlugin;
use solar_orbits::types::SimulationTime;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Real-Time Solar System Orbits (2D)".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
        // Insert resources before plugins that depend on them
        .insert_resource(Ephemeris::default())
        .insert_resource(SimulationTime::default())
        .add_plugins((CameraPlugin, TimePlugin, RenderPlugin))
        .run();
}
