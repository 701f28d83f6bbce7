//! Starbox - interactive star and planet gravity sandbox.
//!
//! A desktop toy: one fixed star, click to fling planets into orbit, drag
//! them around, right-click to delete them.

use bevy::prelude::*;

use starbox::config::{ConfigError, SimConfig};
use starbox::input::InputPlugin;
use starbox::render::RenderPlugin;
use starbox::sim::SimulationPlugin;
use starbox::ui::HudPlugin;

/// Window and simulation viewport size, fixed for the run.
const VIEWPORT_WIDTH: f32 = 1280.0;
const VIEWPORT_HEIGHT: f32 = 720.0;

fn main() -> Result<(), ConfigError> {
    // Reject bad configuration before any window opens.
    let config = SimConfig::for_viewport(VIEWPORT_WIDTH as f64, VIEWPORT_HEIGHT as f64);
    let simulation = SimulationPlugin::new(config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starbox".to_string(),
                resolution: (VIEWPORT_WIDTH, VIEWPORT_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((simulation, InputPlugin, RenderPlugin, HudPlugin))
        .run();

    Ok(())
}
