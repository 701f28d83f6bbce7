//! Physics integration for planets.
//!
//! Runs once per simulation tick, after interaction events have been
//! applied and before trails and pruning.

pub mod gravity;
pub mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

use crate::body::{Planet, Star};
use crate::config::SimConfig;
use crate::interaction::GrabState;
use crate::types::BodyState;

/// Advance every planet by one fixed timestep of star gravity.
///
/// The star is the sole attractor; planets never attract each other. The
/// grab target's position is held for the interaction controller to
/// overwrite, but its velocity still integrates, so a released planet
/// keeps the momentum it accumulated while dragged.
pub fn integrate_planets(
    config: Res<SimConfig>,
    grab: Res<GrabState>,
    star: Query<&BodyState, (With<Star>, Without<Planet>)>,
    mut planets: Query<(Entity, &mut BodyState), With<Planet>>,
) {
    let Ok(star_state) = star.single() else {
        return;
    };
    let gm = config.gravitational_constant * star_state.mass;

    for (entity, mut body) in planets.iter_mut() {
        let acc = gravity::acceleration_toward(body.pos, star_state.pos, gm);
        integrator::step(&mut body, acc, config.dt, grab.is_dragging(entity));
    }
}
