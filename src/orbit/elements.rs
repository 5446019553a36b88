//! Orbital elements for a single body.

use serde::{Deserialize, Serialize};

use crate::types::DEG_TO_RAD;

/// Keplerian elements describing one body's orbit around its parent.
///
/// Distances are in scene units, time in simulation seconds. The orbital
/// plane is tilted about the x axis only; there is no ascending node or
/// argument of periapsis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbitalElements {
    /// Semi-major axis (> 0)
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub eccentricity: f64,
    /// Time for one full revolution (> 0)
    pub period: f64,
    /// Tilt of the orbital plane in degrees
    #[serde(default)]
    pub inclination_deg: f64,
}

/// A violated constraint on [`OrbitalElements`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ElementsError {
    #[error("semi-major axis must be finite and positive, got {0}")]
    SemiMajorAxis(f64),

    #[error("eccentricity must be in [0, 1), got {0}")]
    Eccentricity(f64),

    #[error("period must be finite and positive, got {0}")]
    Period(f64),

    #[error("inclination must be finite, got {0}")]
    Inclination(f64),
}

impl OrbitalElements {
    /// Build elements without validation.
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        period: f64,
        inclination_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            period,
            inclination_deg,
        }
    }

    /// Circular, uninclined orbit.
    pub const fn circular(radius: f64, period: f64) -> Self {
        Self::new(radius, 0.0, period, 0.0)
    }

    /// Check the elements against the domain the solver is defined on.
    ///
    /// The solver never calls this itself; configuration loading does.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(ElementsError::SemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::Eccentricity(self.eccentricity));
        }
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(ElementsError::Period(self.period));
        }
        if !self.inclination_deg.is_finite() {
            return Err(ElementsError::Inclination(self.inclination_deg));
        }
        Ok(())
    }

    /// Inclination in radians.
    pub fn inclination(&self) -> f64 {
        self.inclination_deg * DEG_TO_RAD
    }

    /// Closest approach to the focus: a(1 − e).
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus: a(1 + e).
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}
