//! Orbital position solver.
//!
//! Converts elapsed simulation time into a 3D position for one body:
//! mean anomaly → eccentric anomaly (Kepler's equation, Newton–Raphson) →
//! true anomaly and radius → planar position → inclination tilt.
//!
//! Everything here is a pure function of the elements and the time; no state
//! is carried between calls.
//!
//! Coordinate frame:
//! - Reference plane is x/z, with periapsis on +x.
//! - Inclination tilts the plane about the x axis, lifting +z toward +y.

pub mod elements;
pub mod kepler;

#[cfg(test)]
mod proptest_orbit;

pub use elements::{ElementsError, OrbitalElements};
pub use kepler::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, KeplerSolution, OrbitSample, SolverConfig,
    mean_anomaly, orbital_radius, solve_kepler, true_anomaly,
};
