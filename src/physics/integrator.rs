//! Fixed-step Euler integration.
//!
//! The timestep is a constant simulation increment, never scaled by the
//! measured frame delta; identical input always reproduces identical
//! trajectories. Velocity magnitude is not clamped, so bodies are free to
//! accelerate without bound near the attractor.

use bevy::math::DVec2;

use crate::types::BodyState;

/// Advance one body by one fixed timestep.
///
/// Velocity always accumulates the gravitational acceleration. The
/// position update uses the freshly updated velocity (semi-implicit Euler)
/// and is skipped while the body is held by the pointer; the interaction
/// controller overwrites the held body's position instead.
pub fn step(body: &mut BodyState, acceleration: DVec2, dt: f64, hold_position: bool) {
    body.vel += acceleration * dt;
    if !hold_position {
        body.pos += body.vel * dt;
    }
}
