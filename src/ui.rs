//! HUD: live planet count and usage help.
//!
//! Reads the scene snapshot only; never touches simulation state.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::snapshot::FrameSnapshot;

/// Plugin showing a small status window.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, hud_window);
    }
}

/// Render the status window in the top-left corner.
fn hud_window(mut contexts: EguiContexts, snapshot: Res<FrameSnapshot>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Window::new("Starbox")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!("Planets: {}", snapshot.planet_count()));
            ui.separator();
            ui.label("Click empty space: spawn a planet (and drag it)");
            ui.label("Drag a planet to reposition it");
            ui.label("Right-click a planet: delete it");
            ui.label("Esc: quit");
        });
}
