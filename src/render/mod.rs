//! Render adapter: draws the scene snapshot with gizmos.
//!
//! Consumes only the [`FrameSnapshot`] resource; the simulation never
//! learns how (or whether) it is drawn.

use bevy::math::{DVec2, IVec2};
use bevy::prelude::*;

use crate::config::SimConfig;
use crate::snapshot::FrameSnapshot;

/// Plugin drawing the scene every frame.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, draw_scene);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Map a simulation position (origin top-left, y down) to Bevy's centered,
/// y-up world frame.
fn to_world(pos: DVec2, viewport: DVec2) -> Vec2 {
    Vec2::new(
        (pos.x - viewport.x * 0.5) as f32,
        (viewport.y * 0.5 - pos.y) as f32,
    )
}

fn trail_point_to_world(point: IVec2, viewport: DVec2) -> Vec2 {
    to_world(point.as_dvec2(), viewport)
}

/// Trail segment color: white dimmed by the point's fade alpha.
fn trail_color(alpha: u8) -> Color {
    Color::srgba(1.0, 1.0, 1.0, alpha as f32 / 255.0)
}

/// Draw the star, planets, and fading trails from the latest snapshot.
fn draw_scene(mut gizmos: Gizmos, snapshot: Res<FrameSnapshot>, config: Res<SimConfig>) {
    let viewport = config.viewport;

    for planet in &snapshot.planets {
        // Trail first so the planet disc draws on top of it.
        let mut prev: Option<Vec2> = None;
        for &(point, alpha) in &planet.trail {
            let current = trail_point_to_world(point, viewport);
            if let Some(prev_point) = prev {
                gizmos.line_2d(prev_point, current, trail_color(alpha));
            }
            prev = Some(current);
        }

        gizmos.circle_2d(
            to_world(planet.body.position, viewport),
            planet.body.radius as f32,
            planet.body.color,
        );
    }

    if let Some(star) = &snapshot.star {
        gizmos.circle_2d(
            to_world(star.position, viewport),
            star.radius as f32,
            star.color,
        );
    }
}
