//! Body entities: the fixed star and the pointer-spawned planets.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::config::SimConfig;
use crate::types::BodyState;

/// Visual radius of the star.
pub const STAR_RADIUS: f64 = 20.0;

/// Marker component for the single central star.
///
/// The star is never integrated, never hit-tested, and never despawned;
/// its position and velocity are fixed for the whole run. It is the sole
/// attractor in the simulation.
#[derive(Component, Default)]
pub struct Star;

/// Marker component for simulated planets.
#[derive(Component, Default)]
pub struct Planet;

/// Display name for a body.
#[derive(Component, Clone, Debug)]
pub struct BodyName(pub String);

/// Visual properties of a body.
///
/// The radius is used for pointer hit-testing and display only; it plays
/// no role in the physics.
#[derive(Component, Clone, Debug)]
pub struct BodyVisual {
    pub radius: f64,
    pub color: Color,
}

/// Resource numbering spawned planets for display names.
#[derive(Resource, Default)]
pub struct PlanetCounter(pub u32);

/// Live planet entities in spawn order.
///
/// Query iteration order is unspecified, but hit-testing priority and the
/// render snapshot both need insertion order, so this roster is the
/// ordering source of truth. The lifecycle module keeps it in lockstep
/// with spawns and despawns.
#[derive(Resource, Default, Debug)]
pub struct PlanetRoster {
    entities: Vec<Entity>,
}

impl PlanetRoster {
    /// Append a freshly spawned planet.
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Drop a planet, preserving the order of the rest.
    pub fn remove(&mut self, entity: Entity) {
        self.entities.retain(|&e| e != entity);
    }

    /// Planets in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Startup system spawning the star at the viewport center.
pub fn spawn_star(mut commands: Commands, config: Res<SimConfig>) {
    commands.spawn((
        Star,
        BodyName("Star".to_string()),
        BodyState::new(config.viewport * 0.5, DVec2::ZERO, config.star_mass),
        BodyVisual {
            radius: STAR_RADIUS,
            color: Color::srgb(1.0, 1.0, 0.0),
        },
    ));
}
