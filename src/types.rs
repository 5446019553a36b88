//! Shared constants and the simulation clock resource.

use bevy::prelude::*;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Frame rate the built-in body table was tuned against.
///
/// Angular rates in the built-in table are given per frame; periods are
/// derived as 2π / (rate × FRAME_RATE).
pub const FRAME_RATE: f64 = 60.0;

/// Simulation time resource tracking the current simulation state.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationTime {
    /// Current time in simulation seconds
    pub current: f64,
    /// Simulation seconds per real second
    pub scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Initial time for reset functionality
    pub initial: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl SimulationTime {
    /// Create a running clock starting at `start`.
    pub fn new(start: f64, scale: f64) -> Self {
        Self {
            current: start,
            scale,
            paused: false,
            initial: start,
        }
    }

    /// Reset to initial time
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.paused = true;
    }

    /// Simulation seconds elapsed since the clock started.
    pub fn elapsed(&self) -> f64 {
        self.current - self.initial
    }
}

/// Period in seconds of a body advancing `rate` radians per frame at [`FRAME_RATE`].
pub fn period_from_frame_rate(rate: f64) -> f64 {
    std::f64::consts::TAU / (rate * FRAME_RATE)
}
