//! Test fixtures and invariant helpers for simulation tests.

use bevy::math::DVec2;

use crate::types::BodyState;

/// Fixtures for constructing orbital states around the star.
pub mod fixtures {
    use super::*;

    /// A planet in a circular orbit at `distance` from a star with
    /// gravitational parameter `gm`, placed on the +x side with tangential
    /// velocity.
    pub fn circular_orbit(star_pos: DVec2, gm: f64, distance: f64) -> BodyState {
        let v = (gm / distance).sqrt();
        BodyState::new(
            star_pos + DVec2::new(distance, 0.0),
            DVec2::new(0.0, v),
            100.0,
        )
    }
}

/// Invariant helpers.
pub mod assertions {
    use super::*;

    /// Specific orbital energy about a star with parameter `gm`.
    ///
    /// Negative for bound orbits.
    pub fn orbital_energy(star_pos: DVec2, gm: f64, body: &BodyState) -> f64 {
        let r = (body.pos - star_pos).length();
        0.5 * body.vel.length_squared() - gm / r
    }

    /// Specific angular momentum about the star (2D scalar).
    pub fn angular_momentum(star_pos: DVec2, body: &BodyState) -> f64 {
        let r = body.pos - star_pos;
        r.x * body.vel.y - r.y * body.vel.x
    }
}
