//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::config::{BodyConfig, SystemConfig};
use orrery::orbit::OrbitalElements;

/// Headless app whose real clock advances by exactly `frame` per update.
///
/// Bevy reports a zero delta on the very first update.
pub fn minimal_app(frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
    app
}

/// Star at the origin, one planet, one moon around the planet.
pub fn star_planet_moon() -> SystemConfig {
    SystemConfig {
        bodies: vec![
            BodyConfig {
                name: "Star".to_string(),
                parent: None,
                orbit: None,
            },
            BodyConfig {
                name: "Planet".to_string(),
                parent: Some("Star".to_string()),
                orbit: Some(OrbitalElements::new(8.0, 0.1, 10.0, 3.0)),
            },
            BodyConfig {
                name: "Moon".to_string(),
                parent: Some("Planet".to_string()),
                orbit: Some(OrbitalElements::new(2.0, 0.05, 4.0, 5.0)),
            },
        ],
        ..SystemConfig::default()
    }
}

/// Solve Kepler's equation by bisection, as an independent reference.
pub fn reference_eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> f64 {
    use std::f64::consts::PI;

    // f(E) = E - e sin E - M is monotonic, and the root lies within M ± e
    let m = mean_anomaly;
    let mut lo = m - eccentricity - PI;
    let mut hi = m + eccentricity + PI;
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if mid - eccentricity * mid.sin() - m > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}
