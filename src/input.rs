//! Input adapter: translates window mouse/keyboard state into the
//! discrete events the interaction controller consumes.
//!
//! This is the only module that reads the windowing layer's input types;
//! the controller itself never sees them. Pointer coordinates are window
//! coordinates (origin top-left, y down), which is also the simulation
//! space, so no conversion is needed here.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::interaction::{GrabState, InputEvent, PointerButton};

/// Plugin emitting [`InputEvent`]s from window input.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (pointer_events, keyboard_shortcuts));
    }
}

/// Forward mouse activity as pointer events, in source order.
fn pointer_events(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut cursor_moved: MessageReader<CursorMoved>,
    grab: Res<GrabState>,
    mut contexts: EguiContexts,
    mut events: MessageWriter<InputEvent>,
) {
    // Only defer to egui when NOT dragging: if a drag passes over an egui
    // window we still need the moves and the release.
    let mut egui_owns_pointer = false;
    if grab.target().is_none()
        && let Ok(ctx) = contexts.ctx_mut()
    {
        egui_owns_pointer = ctx.wants_pointer_input();
    }

    for moved in cursor_moved.read() {
        events.write(InputEvent::PointerMove {
            position: moved.position.as_dvec2(),
        });
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    if !egui_owns_pointer
        && let Some(cursor) = window.cursor_position()
    {
        let position = cursor.as_dvec2();
        if mouse.just_pressed(MouseButton::Left) {
            events.write(InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            });
        }
        if mouse.just_pressed(MouseButton::Right) {
            events.write(InputEvent::PointerDown {
                button: PointerButton::Secondary,
                position,
            });
        }
    }

    if mouse.just_released(MouseButton::Left) {
        events.write(InputEvent::PointerUp {
            button: PointerButton::Primary,
        });
    }
    if mouse.just_released(MouseButton::Right) {
        events.write(InputEvent::PointerUp {
            button: PointerButton::Secondary,
        });
    }
}

/// Escape requests exit, same as the window close button.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut events: MessageWriter<InputEvent>) {
    if keys.just_pressed(KeyCode::Escape) {
        events.write(InputEvent::ExitRequested);
    }
}
