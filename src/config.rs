//! Simulation configuration and startup validation.
//!
//! All tunables live on a single resource with code-level defaults. The
//! simulation refuses to be constructed with values it cannot run with;
//! there is no runtime recovery path for bad configuration.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Configuration values the simulation rejects at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("gravitational constant must be positive, got {0}")]
    NonPositiveGravity(f64),
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),
    #[error("star mass must be positive, got {0}")]
    NonPositiveStarMass(f64),
    #[error("viewport dimensions must be positive, got {0}x{1}")]
    InvalidViewport(f64, f64),
    #[error("trail capacity must be at least 1")]
    ZeroTrailCapacity,
}

/// Tunable simulation parameters.
///
/// `dt` is a fixed integration timestep: every tick advances physics by
/// exactly `dt` no matter how much wall-clock time passed, so the same
/// input sequence always replays the same trajectories.
#[derive(Resource, Clone, Debug)]
pub struct SimConfig {
    /// Gravitational constant G.
    pub gravitational_constant: f64,
    /// Fixed integration timestep.
    pub dt: f64,
    /// Maximum number of recorded trail points per planet.
    pub max_trail_points: usize,
    /// Viewport bounds; positions outside `[0, x] x [0, y]` are pruned.
    pub viewport: DVec2,
    /// Reference launch velocity for newly spawned planets.
    pub template_velocity: DVec2,
    /// Multiplier applied to the template velocity at spawn.
    pub launch_scale: f64,
    /// Mass of the central star.
    pub star_mass: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            dt: 0.1,
            max_trail_points: 500,
            viewport: DVec2::new(1280.0, 720.0),
            template_velocity: DVec2::new(0.0, -2.0),
            launch_scale: 2.0,
            star_mass: 10_000.0,
        }
    }
}

impl SimConfig {
    /// Default configuration over a given viewport size.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            viewport: DVec2::new(width, height),
            ..Default::default()
        }
    }

    /// Check every parameter the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravitational_constant <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravitational_constant));
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.dt));
        }
        if self.star_mass <= 0.0 {
            return Err(ConfigError::NonPositiveStarMass(self.star_mass));
        }
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Err(ConfigError::InvalidViewport(self.viewport.x, self.viewport.y));
        }
        if self.max_trail_points == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        Ok(())
    }

    /// Whether a position lies inside the viewport bounds (inclusive).
    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..=self.viewport.x).contains(&pos.x) && (0.0..=self.viewport.y).contains(&pos.y)
    }

    /// Velocity given to a freshly spawned planet.
    pub fn launch_velocity(&self) -> DVec2 {
        self.template_velocity * self.launch_scale
    }
}
