//! Registry of orbiting bodies.
//!
//! Holds one record per body (name, parent, orbital elements) and resolves
//! world positions by walking parent chains. The registry is the only owner
//! of per-body state; the solver itself is stateless and is handed the
//! elements on every call.

pub mod data;

use std::collections::HashMap;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::{ConfigError, SystemConfig};
use crate::orbit::{OrbitalElements, SolverConfig};

/// Index of a body in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    /// Position of this body in registry order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Static data for one registered body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyRecord {
    pub name: String,
    /// Always a smaller id than this body's own
    pub parent: Option<BodyId>,
    pub orbit: Option<OrbitalElements>,
}

/// Resource holding every body in the system.
#[derive(Resource, Debug)]
pub struct OrbitRegistry {
    bodies: Vec<BodyRecord>,
    by_name: HashMap<String, BodyId>,
    /// Mapping from scene entity to body
    entity_to_id: HashMap<Entity, BodyId>,
    /// Mapping from body to scene entity
    id_to_entity: HashMap<BodyId, Entity>,
    solver: SolverConfig,
}

impl Default for OrbitRegistry {
    /// Registry for the built-in solar system.
    fn default() -> Self {
        Self::build(&SystemConfig::default())
    }
}

impl OrbitRegistry {
    /// Validate `config` and build a registry from it.
    pub fn from_config(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build without validating. Parent names that don't resolve to an
    /// earlier body are dropped.
    fn build(config: &SystemConfig) -> Self {
        let mut bodies = Vec::with_capacity(config.bodies.len());
        let mut by_name: HashMap<String, BodyId> = HashMap::with_capacity(config.bodies.len());

        for (index, body) in config.bodies.iter().enumerate() {
            let parent = body
                .parent
                .as_ref()
                .and_then(|name| by_name.get(name).copied());
            bodies.push(BodyRecord {
                name: body.name.clone(),
                parent,
                orbit: body.orbit,
            });
            by_name.insert(body.name.clone(), BodyId(index));
        }

        Self {
            bodies,
            by_name,
            entity_to_id: HashMap::new(),
            id_to_entity: HashMap::new(),
            solver: config.solver,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies in registry order (parents before children).
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyRecord)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, record)| (BodyId(index), record))
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyRecord> {
        self.bodies.get(id.0)
    }

    /// Look up a body by name.
    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    /// Solver policy used for every body.
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Register an entity as the scene node for a body.
    pub fn register(&mut self, entity: Entity, id: BodyId) {
        self.entity_to_id.insert(entity, id);
        self.id_to_entity.insert(id, entity);
    }

    /// Get the entity for a body.
    pub fn get_entity(&self, id: BodyId) -> Option<Entity> {
        self.id_to_entity.get(&id).copied()
    }

    /// Get the body for an entity.
    pub fn get_id(&self, entity: Entity) -> Option<BodyId> {
        self.entity_to_id.get(&entity).copied()
    }

    /// Position relative to the parent at `time`. Bodies without an orbit sit
    /// on their parent.
    pub fn local_position(&self, id: BodyId, time: f64) -> Option<DVec3> {
        let record = self.get(id)?;
        Some(
            record
                .orbit
                .map_or(DVec3::ZERO, |orbit| orbit.position_with(time, &self.solver)),
        )
    }

    /// Position relative to the origin at `time`.
    pub fn world_position(&self, id: BodyId, time: f64) -> Option<DVec3> {
        let mut pos = self.local_position(id, time)?;
        let mut parent = self.bodies[id.0].parent;
        while let Some(parent_id) = parent {
            pos += self.local_position(parent_id, time)?;
            parent = self.bodies[parent_id.0].parent;
        }
        Some(pos)
    }

    /// World positions of every body at `time`, indexed by [`BodyId::index`].
    ///
    /// Single pass: each parent's world position is already known when its
    /// children are reached.
    pub fn world_positions(&self, time: f64) -> Vec<DVec3> {
        let mut positions: Vec<DVec3> = Vec::with_capacity(self.bodies.len());
        for record in &self.bodies {
            let local = record
                .orbit
                .map_or(DVec3::ZERO, |orbit| orbit.position_with(time, &self.solver));
            let origin = record
                .parent
                .and_then(|parent| positions.get(parent.0).copied())
                .unwrap_or(DVec3::ZERO);
            positions.push(origin + local);
        }
        positions
    }
}
