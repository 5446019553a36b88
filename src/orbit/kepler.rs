//! Kepler orbit solver using Newton's method for the Kepler equation.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use super::elements::OrbitalElements;

/// Default Newton iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Default convergence threshold on |ΔE| in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Iteration policy for the Kepler equation solver.
///
/// The cap bounds worst-case cost for eccentricities close to 1; when it is
/// hit the last estimate is returned as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of Newton steps
    pub max_iterations: u32,
    /// Stop once a step moves E by no more than this
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Result of solving E − e·sin(E) = M.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians (not wrapped)
    pub eccentric_anomaly: f64,
    /// Newton steps taken, never more than the configured cap
    pub iterations: u32,
    /// Whether the last step fell within tolerance
    pub converged: bool,
}

/// Everything the solver computes for one body at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSample {
    pub mean_anomaly: f64,
    pub eccentric_anomaly: f64,
    pub true_anomaly: f64,
    pub radius: f64,
    /// Position relative to the focus, after inclination
    pub position: DVec3,
    pub iterations: u32,
    pub converged: bool,
}

/// Mean anomaly M = 2π·t / period.
///
/// Not wrapped into [0, 2π): only trig functions of M and E are used
/// downstream, so large values stay well-behaved.
pub fn mean_anomaly(period: f64, time: f64) -> f64 {
    TAU * time / period
}

/// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
/// using Newton's method, starting from E₀ = M + e·sin(M).
///
/// Terminates after `config.max_iterations` steps even if the tolerance
/// was never met.
pub fn solve_kepler(eccentricity: f64, mean_anomaly: f64, config: &SolverConfig) -> KeplerSolution {
    let e = eccentricity;
    let m = mean_anomaly;

    let mut e_anomaly = m + e * m.sin();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let (sin_e, cos_e) = e_anomaly.sin_cos();

        // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
        let f = e_anomaly - e * sin_e - m;
        let f_prime = 1.0 - e * cos_e;

        let delta = f / f_prime;
        e_anomaly -= delta;
        iterations += 1;

        if delta.abs() <= config.tolerance {
            converged = true;
            break;
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anomaly,
        iterations,
        converged,
    }
}

/// True anomaly from eccentric anomaly.
///
/// Uses atan2(√(1−e²)·sin E, cos E − e), which stays finite at E = π where
/// the half-angle tangent form divides by zero.
pub fn true_anomaly(eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    let e = eccentricity;
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    ((1.0 - e * e).sqrt() * sin_e).atan2(cos_e - e)
}

/// Distance from the focus: r = a·(1 − e·cos E).
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Place a point of the reference-plane orbit (x, z) into the tilted plane.
fn incline(radius: f64, true_anomaly: f64, inclination: f64) -> DVec3 {
    let x = radius * true_anomaly.cos();
    let z = radius * true_anomaly.sin();
    let (sin_i, cos_i) = inclination.sin_cos();
    DVec3::new(x, z * sin_i, z * cos_i)
}

impl OrbitalElements {
    /// Run the full solver pipeline at time `time`.
    pub fn sample(&self, time: f64, config: &SolverConfig) -> OrbitSample {
        let m = mean_anomaly(self.period, time);
        let solution = solve_kepler(self.eccentricity, m, config);
        let e_anomaly = solution.eccentric_anomaly;

        let nu = true_anomaly(self.eccentricity, e_anomaly);
        let radius = orbital_radius(self.semi_major_axis, self.eccentricity, e_anomaly);

        OrbitSample {
            mean_anomaly: m,
            eccentric_anomaly: e_anomaly,
            true_anomaly: nu,
            radius,
            position: incline(radius, nu, self.inclination()),
            iterations: solution.iterations,
            converged: solution.converged,
        }
    }

    /// Position relative to the parent at `time`, with the default solver policy.
    pub fn position(&self, time: f64) -> DVec3 {
        self.position_with(time, &SolverConfig::default())
    }

    /// Position relative to the parent at `time`.
    pub fn position_with(&self, time: f64, config: &SolverConfig) -> DVec3 {
        self.sample(time, config).position
    }

    /// Points along the orbit at evenly spaced eccentric anomaly, suitable
    /// for drawing the orbit ring. The path is closed implicitly: the last
    /// point connects back to the first.
    pub fn path_points(&self, segments: usize) -> Vec<DVec3> {
        let inclination = self.inclination();
        (0..segments)
            .map(|i| {
                let e_anomaly = TAU * i as f64 / segments as f64;
                let nu = true_anomaly(self.eccentricity, e_anomaly);
                let radius = orbital_radius(self.semi_major_axis, self.eccentricity, e_anomaly);
                incline(radius, nu, inclination)
            })
            .collect()
    }
}
