//! Time advancement system for the orbit viewer.
//!
//! Handles progression of simulation time and the keyboard controls for it.

use bevy::prelude::*;

use crate::types::SimulationTime;

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .add_systems(Update, (time_shortcuts, advance_time).chain());
    }
}

/// Advance simulation time based on scale and pause state.
fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    sim_time.advance(time.delta_secs_f64());
}

/// Space toggles pause; `[` and `]` halve and double the time scale.
fn time_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut sim_time: ResMut<SimulationTime>) {
    if keys.just_pressed(KeyCode::Space) {
        sim_time.paused = !sim_time.paused;
        info!("Simulation {}", if sim_time.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        sim_time.slow_down();
        info!("Time scale: {} days/s", sim_time.scale);
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        sim_time.speed_up();
        info!("Time scale: {} days/s", sim_time.scale);
    }
}
