//! Built-in solar system in scene units.
//!
//! Distances are scene units (the Sun has radius 3). Periods come from the
//! per-frame angular rates the system was first tuned with at 60 fps, so
//! Earth still completes a turn every ~10.5 s. Eccentricities and
//! inclinations are the real J2000 values.

use crate::config::BodyConfig;
use crate::orbit::OrbitalElements;
use crate::types::period_from_frame_rate;

struct BodyEntry {
    name: &'static str,
    parent: Option<&'static str>,
    /// (semi-major axis, eccentricity, radians per frame, inclination deg)
    orbit: Option<(f64, f64, f64, f64)>,
}

const BODIES: &[BodyEntry] = &[
    BodyEntry {
        name: "Sun",
        parent: None,
        orbit: None,
    },
    BodyEntry {
        name: "Mercury",
        parent: Some("Sun"),
        orbit: Some((3.0, 0.2056, 0.025, 7.00)),
    },
    BodyEntry {
        name: "Venus",
        parent: Some("Sun"),
        orbit: Some((5.0, 0.0068, 0.015, 3.39)),
    },
    BodyEntry {
        name: "Earth",
        parent: Some("Sun"),
        orbit: Some((8.0, 0.0167, 0.01, 0.0)),
    },
    BodyEntry {
        name: "Moon",
        parent: Some("Earth"),
        orbit: Some((2.0, 0.0549, 0.02, 5.145)),
    },
    BodyEntry {
        name: "Mars",
        parent: Some("Sun"),
        orbit: Some((12.0, 0.0934, 0.008, 1.85)),
    },
    BodyEntry {
        name: "Jupiter",
        parent: Some("Sun"),
        orbit: Some((20.0, 0.0484, 0.004, 1.31)),
    },
    BodyEntry {
        name: "Saturn",
        parent: Some("Sun"),
        orbit: Some((28.0, 0.0542, 0.003, 2.49)),
    },
    BodyEntry {
        name: "Uranus",
        parent: Some("Sun"),
        orbit: Some((36.0, 0.0472, 0.002, 0.77)),
    },
    BodyEntry {
        name: "Neptune",
        parent: Some("Sun"),
        orbit: Some((44.0, 0.0086, 0.0015, 1.77)),
    },
];

/// The built-in body table, parents first.
pub fn default_bodies() -> Vec<BodyConfig> {
    BODIES
        .iter()
        .map(|entry| BodyConfig {
            name: entry.name.to_string(),
            parent: entry.parent.map(str::to_string),
            orbit: entry.orbit.map(|(a, e, rate, inclination)| {
                OrbitalElements::new(a, e, period_from_frame_rate(rate), inclination)
            }),
        })
        .collect()
}
