//! Scene-graph driver.
//!
//! Spawns one node per registered body and, every frame, writes the solved
//! world position into its `Transform`. Nothing here draws anything; a
//! renderer (if any) reads the transforms.

use bevy::{math::DVec3, prelude::*};

use crate::bodies::{BodyId, OrbitRegistry};
use crate::time::{AdvanceTimeSet, SimulationClockPlugin};
use crate::types::SimulationTime;

/// Marks an entity as the scene node for a registered body.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitingBody {
    pub id: BodyId,
}

/// Scene units per orbit unit.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SceneScale(pub f64);

impl Default for SceneScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl SceneScale {
    /// Convert an f64 orbit position to an f32 scene translation.
    pub fn to_translation(self, pos: DVec3) -> Vec3 {
        (pos * self.0).as_vec3()
    }
}

/// System set label for position sync (runs after the clock advances).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncPositionsSet;

/// Plugin wiring the clock, body spawning and per-frame position sync.
///
/// Uses the `OrbitRegistry`, `SimulationTime` and `SceneScale` resources
/// already in the app, falling back to the built-in solar system and a
/// clock at zero.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRegistry>()
            .init_resource::<SceneScale>()
            .add_plugins(SimulationClockPlugin)
            .configure_sets(Update, SyncPositionsSet.after(AdvanceTimeSet))
            .add_systems(Startup, spawn_bodies)
            .add_systems(Update, sync_orbit_positions.in_set(SyncPositionsSet));
    }
}

/// Spawn a named scene node for every body at its current position.
pub fn spawn_bodies(
    mut commands: Commands,
    mut registry: ResMut<OrbitRegistry>,
    time: Res<SimulationTime>,
    scale: Res<SceneScale>,
) {
    let positions = registry.world_positions(time.current);

    let spawned: Vec<(Entity, BodyId)> = registry
        .iter()
        .zip(&positions)
        .map(|((id, record), pos)| {
            let entity = commands
                .spawn((
                    Name::new(record.name.clone()),
                    OrbitingBody { id },
                    Transform::from_translation(scale.to_translation(*pos)),
                ))
                .id();
            (entity, id)
        })
        .collect();

    for (entity, id) in spawned {
        registry.register(entity, id);
    }

    info!("Spawned {} orbiting bodies", registry.len());
}

/// Sync body transforms from the solver.
///
/// Runs once per frame after the clock advances; positions are recomputed
/// from scratch every time.
pub fn sync_orbit_positions(
    mut query: Query<(&mut Transform, &OrbitingBody)>,
    registry: Res<OrbitRegistry>,
    time: Res<SimulationTime>,
    scale: Res<SceneScale>,
) {
    let positions = registry.world_positions(time.current);

    for (mut transform, body) in query.iter_mut() {
        match positions.get(body.id.index()) {
            Some(pos) => transform.translation = scale.to_translation(*pos),
            None => warn!("Scene node references unknown body {:?}", body.id),
        }
    }
}
