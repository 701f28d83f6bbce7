//! Per-tick scene snapshot for the render and HUD adapters.

use bevy::math::{DVec2, IVec2};
use bevy::prelude::*;

use crate::body::{BodyVisual, Planet, PlanetRoster, Star};
use crate::trail::TrailBuffer;
use crate::types::BodyState;

/// Descriptor of one body as of the latest tick.
#[derive(Clone, Debug)]
pub struct BodySnapshot {
    pub id: Entity,
    pub position: DVec2,
    /// Carried for optional display; the renderer does not integrate.
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Color,
}

/// A planet descriptor plus its fading trail.
#[derive(Clone, Debug)]
pub struct PlanetSnapshot {
    pub body: BodySnapshot,
    /// Trail points oldest first, each with its fade alpha (255 = opaque).
    pub trail: Vec<(IVec2, u8)>,
}

/// Immutable scene description rebuilt at the end of every tick.
///
/// Adapters read this resource and nothing else; no component reference
/// leaves the simulation, so nothing external can hold a body across
/// frames except by its id.
#[derive(Resource, Clone, Debug, Default)]
pub struct FrameSnapshot {
    pub star: Option<BodySnapshot>,
    /// Planets in spawn order.
    pub planets: Vec<PlanetSnapshot>,
}

impl FrameSnapshot {
    /// Number of live planets.
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

/// Rebuild the snapshot from the live body set.
pub fn publish_snapshot(
    mut snapshot: ResMut<FrameSnapshot>,
    star: Query<(Entity, &BodyState, &BodyVisual), With<Star>>,
    roster: Res<PlanetRoster>,
    planets: Query<(&BodyState, &BodyVisual, &TrailBuffer), With<Planet>>,
) {
    snapshot.star = star
        .get_single()
        .ok()
        .map(|(id, body, visual)| BodySnapshot {
            id,
            position: body.pos,
            velocity: body.vel,
            radius: visual.radius,
            color: visual.color,
        });

    snapshot.planets.clear();
    for entity in roster.iter() {
        let Ok((body, visual, trail)) = planets.get(entity) else {
            continue;
        };
        snapshot.planets.push(PlanetSnapshot {
            body: BodySnapshot {
                id: entity,
                position: body.pos,
                velocity: body.vel,
                radius: visual.radius,
                color: visual.color,
            },
            trail: trail.fade().collect(),
        });
    }
}
