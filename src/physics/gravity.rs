//! Gravitational acceleration from the star.

use bevy::math::DVec2;

/// Distance clamp preventing a singular acceleration when a body sits on
/// top of the attractor. One viewport unit; nothing meaningful orbits
/// closer than that.
pub const MIN_ATTRACTOR_DISTANCE: f64 = 1.0;

/// Acceleration at `pos` toward an attractor with gravitational parameter
/// `gm` (G times attractor mass) located at `attractor_pos`.
///
/// Magnitude is `gm / d²` along the unit vector toward the attractor. The
/// distance is clamped to [`MIN_ATTRACTOR_DISTANCE`], so the result is
/// finite even for a body exactly coincident with the attractor.
#[inline]
pub fn acceleration_toward(pos: DVec2, attractor_pos: DVec2, gm: f64) -> DVec2 {
    let delta = attractor_pos - pos;
    let r = delta.length().max(MIN_ATTRACTOR_DISTANCE);
    // delta / r is the unit direction; dividing twice more by r gives gm/d²
    delta * (gm / (r * r * r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_square_magnitude() {
        let acc = acceleration_toward(DVec2::new(150.0, 0.0), DVec2::ZERO, 10_000.0);
        assert_relative_eq!(acc.length(), 10_000.0 / (150.0 * 150.0), epsilon = 1e-12);
    }

    #[test]
    fn test_points_toward_attractor() {
        let attractor = DVec2::new(400.0, 300.0);
        let acc = acceleration_toward(DVec2::new(700.0, 100.0), attractor, 10_000.0);
        let toward = (attractor - DVec2::new(700.0, 100.0)).normalize();
        assert_relative_eq!(acc.normalize().dot(toward), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_body_gets_zero_acceleration() {
        let pos = DVec2::new(640.0, 360.0);
        let acc = acceleration_toward(pos, pos, 10_000.0);
        assert!(acc.x.is_finite() && acc.y.is_finite());
        assert_eq!(acc, DVec2::ZERO);
    }

    #[test]
    fn test_finite_inside_clamp_radius() {
        let attractor = DVec2::new(100.0, 100.0);
        let acc = acceleration_toward(attractor + DVec2::new(0.25, 0.0), attractor, 10_000.0);
        assert!(acc.x.is_finite() && acc.y.is_finite());
        // Clamped distance bounds the magnitude at gm / MIN².
        assert!(acc.length() <= 10_000.0 / (MIN_ATTRACTOR_DISTANCE * MIN_ATTRACTOR_DISTANCE));
    }
}
