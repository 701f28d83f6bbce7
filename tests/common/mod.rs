//! Shared helpers for integration tests.
//!
//! Builds a headless app running the real simulation pipeline and drives
//! ticks explicitly, so tests never depend on wall-clock fixed-timestep
//! accumulation.

#![allow(dead_code)]

use bevy::math::DVec2;
use bevy::prelude::*;

use starbox::body::{PlanetCounter, PlanetRoster};
use starbox::config::SimConfig;
use starbox::interaction::InputEvent;
use starbox::lifecycle;
use starbox::sim::SimulationPlugin;

/// Viewport used by the test configuration.
pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;

/// Test configuration: defaults over an 800x600 viewport.
pub fn test_config() -> SimConfig {
    SimConfig::for_viewport(WIDTH, HEIGHT)
}

/// Build a headless app with the full simulation pipeline. Startup runs
/// immediately so the star exists before the first tick.
pub fn sim_app() -> App {
    sim_app_with(test_config())
}

pub fn sim_app_with(config: SimConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SimulationPlugin::new(config).expect("test config must be valid"));
    app.world_mut().run_schedule(Startup);
    app
}

/// Run exactly one simulation tick.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

/// Queue an input event for the next tick.
pub fn send(app: &mut App, event: InputEvent) {
    app.world_mut().send_event(event);
}

/// Live planet entities in spawn order.
pub fn planets(app: &App) -> Vec<Entity> {
    app.world().resource::<PlanetRoster>().iter().collect()
}

/// Spawn a planet directly through the lifecycle policy, bypassing the
/// pointer. Useful for arranging scenes (e.g. overlapping planets).
pub fn spawn_planet(app: &mut App, position: DVec2) -> Entity {
    let world = app.world_mut();
    world.resource_scope(|world, mut roster: Mut<PlanetRoster>| {
        world.resource_scope(|world, mut counter: Mut<PlanetCounter>| {
            let config = world.resource::<SimConfig>().clone();
            let entity = {
                let mut commands = world.commands();
                lifecycle::spawn_planet_at(&mut commands, &mut roster, &mut counter, &config, position)
            };
            world.flush();
            entity
        })
    })
}
