//! Orrery - Keplerian orbit solver and scene driver
//!
//! A library crate computing body positions from orbital elements and
//! keeping a headless scene graph in step with the simulation clock.

pub mod bodies;
pub mod config;
pub mod orbit;
pub mod scene;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
