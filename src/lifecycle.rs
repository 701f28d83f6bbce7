//! Planet spawn/despawn policy and boundary pruning.

use bevy::math::DVec2;
use bevy::prelude::*;
use rand::Rng;

use crate::body::{BodyName, BodyVisual, Planet, PlanetCounter, PlanetRoster};
use crate::config::SimConfig;
use crate::interaction::GrabState;
use crate::trail::TrailBuffer;
use crate::types::BodyState;

/// Visual/hit radius of every spawned planet.
pub const PLANET_RADIUS: f64 = 10.0;

/// Mass range sampled uniformly for new planets.
pub const PLANET_MASS_RANGE: std::ops::RangeInclusive<f64> = 50.0..=200.0;

/// Spawn a planet at `position`.
///
/// The planet gets the configured launch velocity (template times scale),
/// a mass drawn uniformly from [`PLANET_MASS_RANGE`], a random color, an
/// empty trail, and a numbered display name. It is appended to the roster
/// so it hit-tests after every existing planet.
pub fn spawn_planet_at(
    commands: &mut Commands,
    roster: &mut PlanetRoster,
    counter: &mut PlanetCounter,
    config: &SimConfig,
    position: DVec2,
) -> Entity {
    let mut rng = rand::thread_rng();
    let mass = rng.gen_range(PLANET_MASS_RANGE);
    let color = Color::srgb_u8(
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
    );

    counter.0 += 1;
    let name = format!("Planet {}", counter.0);
    info!("Spawning {} at ({:.1}, {:.1})", name, position.x, position.y);

    let entity = commands
        .spawn((
            Planet,
            BodyName(name),
            BodyState::new(position, config.launch_velocity(), mass),
            BodyVisual {
                radius: PLANET_RADIUS,
                color,
            },
            TrailBuffer::with_capacity(config.max_trail_points),
        ))
        .id();
    roster.push(entity);
    entity
}

/// Remove a planet; its trail is dropped with the entity.
pub fn despawn_planet(commands: &mut Commands, roster: &mut PlanetRoster, entity: Entity) {
    roster.remove(entity);
    commands.entity(entity).despawn();
}

/// Despawn planets whose updated position left the viewport.
///
/// Runs after integration so the decision sees this tick's position. The
/// grab target is exempt even when the pointer parks it outside the
/// bounds. Removals are collected during the query pass and applied after
/// it.
pub fn prune_out_of_bounds(
    mut commands: Commands,
    config: Res<SimConfig>,
    grab: Res<GrabState>,
    mut roster: ResMut<PlanetRoster>,
    planets: Query<(Entity, &BodyState, &BodyName), With<Planet>>,
) {
    let mut doomed = Vec::new();
    for (entity, body, name) in planets.iter() {
        if grab.is_dragging(entity) {
            continue;
        }
        if !config.contains(body.pos) {
            doomed.push((entity, name.0.clone()));
        }
    }

    for (entity, name) in doomed {
        info!("{} left the viewport, despawning", name);
        despawn_planet(&mut commands, &mut roster, entity);
    }
}
