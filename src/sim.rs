//! Simulation assembly: resources, event wiring, and the tick pipeline.

use bevy::prelude::*;

use crate::body::{spawn_star, PlanetCounter, PlanetRoster};
use crate::config::{ConfigError, SimConfig};
use crate::interaction::{apply_grab, drain_input_events, GrabState, InputEvent, PointerState};
use crate::lifecycle::prune_out_of_bounds;
use crate::physics::integrate_planets;
use crate::snapshot::{publish_snapshot, FrameSnapshot};
use crate::trail::record_trails;
use crate::types::SimSet;

/// Simulation ticks per second. Each tick advances physics by the fixed
/// `SimConfig::dt` regardless of wall-clock frame time.
pub const TICK_HZ: f64 = 60.0;

/// Plugin running the whole simulation core in `FixedUpdate`.
///
/// One tick: drain input events and apply the grab override, integrate
/// every planet against the star, record trails, prune out-of-bounds
/// planets, publish the snapshot.
pub struct SimulationPlugin {
    config: SimConfig,
}

impl SimulationPlugin {
    /// Build the plugin, rejecting configurations the simulation cannot
    /// run with.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<GrabState>()
            .init_resource::<PointerState>()
            .init_resource::<PlanetRoster>()
            .init_resource::<PlanetCounter>()
            .init_resource::<FrameSnapshot>()
            .add_message::<InputEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Interaction,
                    SimSet::Integrate,
                    SimSet::Trails,
                    SimSet::Prune,
                    SimSet::Snapshot,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_star)
            .add_systems(
                FixedUpdate,
                (
                    (drain_input_events, apply_grab)
                        .chain()
                        .in_set(SimSet::Interaction),
                    integrate_planets.in_set(SimSet::Integrate),
                    record_trails.in_set(SimSet::Trails),
                    prune_out_of_bounds.in_set(SimSet::Prune),
                    publish_snapshot.in_set(SimSet::Snapshot),
                ),
            );
    }
}
