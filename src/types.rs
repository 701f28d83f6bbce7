//! Core simulation types shared across modules.

use bevy::math::DVec2;
use bevy::prelude::*;

/// System sets ordering one simulation tick.
///
/// Interaction events are drained before integration so a grab started this
/// tick already holds its planet in place; pruning sees post-integration
/// positions; the snapshot is rebuilt last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Input event drain and grab override.
    Interaction,
    /// Gravity and Euler step for every planet.
    Integrate,
    /// Trail recording.
    Trails,
    /// Boundary pruning.
    Prune,
    /// Snapshot publication for the render adapter.
    Snapshot,
}

/// Physical state of a body in the simulation.
///
/// Positions and velocities are in viewport units (window coordinates,
/// origin top-left, y down). Uses f64 so trajectories stay reproducible
/// over long runs.
#[derive(Component, Clone, Debug, Default)]
pub struct BodyState {
    /// Position in viewport units.
    pub pos: DVec2,
    /// Velocity in viewport units per simulation time unit.
    pub vel: DVec2,
    /// Mass in abstract units.
    pub mass: f64,
}

impl BodyState {
    /// Create a new body state.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Speed magnitude, for display.
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}
