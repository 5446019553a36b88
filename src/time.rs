//! Time advancement system for the orbit simulator.
//!
//! Handles progression of simulation time based on scale and pause state.

use bevy::prelude::*;

use crate::types::SimulationTime;

/// System set label for clock advancement (runs before position sync).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdvanceTimeSet;

/// Plugin providing time advancement functionality.
pub struct SimulationClockPlugin;

impl Plugin for SimulationClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .add_systems(Update, advance_time.in_set(AdvanceTimeSet));
    }
}

/// Advance simulation time based on scale and pause state.
///
/// Scale is simulation seconds per real second, so scale=1.0 runs the
/// orbits in real time.
pub fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    if sim_time.paused {
        return;
    }

    sim_time.current += time.delta_secs_f64() * sim_time.scale;
}
