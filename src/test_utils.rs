//! Test utilities for orbital solver and registry tests.
//!
//! Provides fixtures for common orbits and small system configurations.

/// Fixtures for creating test orbital elements.
pub mod fixtures {
    use crate::config::{BodyConfig, SystemConfig};
    use crate::orbit::OrbitalElements;

    /// Radius 1, period 1, no tilt.
    pub fn unit_circle() -> OrbitalElements {
        OrbitalElements::circular(1.0, 1.0)
    }

    /// Circular, uninclined orbit.
    pub fn circular(radius: f64, period: f64) -> OrbitalElements {
        OrbitalElements::circular(radius, period)
    }

    /// Uninclined ellipse.
    pub fn elliptical(semi_major_axis: f64, eccentricity: f64, period: f64) -> OrbitalElements {
        assert!(
            (0.0..1.0).contains(&eccentricity),
            "Eccentricity must be in [0, 1) for elliptical orbit"
        );
        OrbitalElements::new(semi_major_axis, eccentricity, period, 0.0)
    }

    /// A root body with no orbit.
    pub fn star(name: &str) -> BodyConfig {
        BodyConfig {
            name: name.to_string(),
            parent: None,
            orbit: None,
        }
    }

    /// A body orbiting `parent`.
    pub fn satellite(name: &str, parent: &str, orbit: OrbitalElements) -> BodyConfig {
        BodyConfig {
            name: name.to_string(),
            parent: Some(parent.to_string()),
            orbit: Some(orbit),
        }
    }

    /// Star, planet on a circle of radius 8, moon on a circle of radius 2
    /// around the planet.
    pub fn star_planet_moon() -> SystemConfig {
        SystemConfig {
            bodies: vec![
                star("Star"),
                satellite("Planet", "Star", circular(8.0, 10.0)),
                satellite("Moon", "Planet", circular(2.0, 5.0)),
            ],
            ..SystemConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(unit_circle().validate().is_ok());
        assert!(elliptical(2.0, 0.5, 3.0).validate().is_ok());
        assert!(star_planet_moon().validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "Eccentricity must be in [0, 1)")]
    fn test_elliptical_rejects_parabolic() {
        let _ = elliptical(1.0, 1.0, 1.0);
    }
}
