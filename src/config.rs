//! System configuration: the per-body table plus solver and clock settings.
//!
//! Configuration is read from JSON and validated once at load time. Nothing
//! downstream re-checks it; the solver in particular assumes valid elements.

use std::collections::HashSet;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bodies::data::default_bodies;
use crate::orbit::{ElementsError, OrbitalElements, SolverConfig};

/// One entry of the body table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Unique display name
    pub name: String,
    /// Body this one orbits; must appear earlier in the table
    #[serde(default)]
    pub parent: Option<String>,
    /// Orbit around the parent (or the origin). `None` pins the body in place.
    #[serde(default)]
    pub orbit: Option<OrbitalElements>,
}

/// Simulation clock settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Simulation time at startup
    pub start: f64,
    /// Simulation seconds per real second
    pub scale: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            scale: 1.0,
        }
    }
}

/// Complete description of a system to simulate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Default for SystemConfig {
    /// The built-in solar system.
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
            solver: SolverConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("body `{body}` has invalid orbit: {source}")]
    InvalidElements {
        body: String,
        #[source]
        source: ElementsError,
    },

    #[error("body #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate body name `{0}`")]
    DuplicateBody(String),

    #[error("body `{body}` references unknown parent `{parent}`")]
    UnknownParent { body: String, parent: String },

    #[error("body `{body}` is declared before its parent `{parent}`")]
    ParentAfterChild { body: String, parent: String },

    #[error("solver tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("clock scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f64),

    #[error("clock start must be finite, got {0}")]
    InvalidStartTime(f64),
}

impl SystemConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!(
            "Loaded {} bodies from {}",
            config.bodies.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constraint the registry and solver rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.solver.tolerance));
        }
        if !(self.clock.scale.is_finite() && self.clock.scale >= 0.0) {
            return Err(ConfigError::InvalidTimeScale(self.clock.scale));
        }
        if !self.clock.start.is_finite() {
            return Err(ConfigError::InvalidStartTime(self.clock.start));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.bodies.len());
        for (index, body) in self.bodies.iter().enumerate() {
            if body.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if seen.contains(body.name.as_str()) {
                return Err(ConfigError::DuplicateBody(body.name.clone()));
            }

            if let Some(parent) = &body.parent
                && !seen.contains(parent.as_str())
            {
                let declared_later = self.bodies[index..].iter().any(|b| &b.name == parent);
                return Err(if declared_later {
                    ConfigError::ParentAfterChild {
                        body: body.name.clone(),
                        parent: parent.clone(),
                    }
                } else {
                    ConfigError::UnknownParent {
                        body: body.name.clone(),
                        parent: parent.clone(),
                    }
                });
            }

            if let Some(orbit) = &body.orbit {
                orbit
                    .validate()
                    .map_err(|source| ConfigError::InvalidElements {
                        body: body.name.clone(),
                        source,
                    })?;
            }

            seen.insert(body.name.as_str());
        }

        Ok(())
    }
}
