//! Property-based tests for the gravity step.
//!
//! These verify the integration contract across a wide range of geometry
//! rather than at hand-picked points.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::gravity::{acceleration_toward, MIN_ATTRACTOR_DISTANCE};
use super::integrator;
use crate::test_utils::{assertions, fixtures};
use crate::types::BodyState;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// One step changes velocity by G*M/d² * dt along the unit vector
    /// toward the attractor.
    #[test]
    fn prop_velocity_delta_matches_inverse_square(
        distance in 10.0f64..2000.0,
        angle in 0.0f64..std::f64::consts::TAU,
        gm in 100.0f64..1e6,
        dt in 0.01f64..1.0,
    ) {
        let attractor = DVec2::new(640.0, 360.0);
        let outward = DVec2::new(angle.cos(), angle.sin());
        let mut body = BodyState::new(attractor + outward * distance, DVec2::ZERO, 100.0);

        let acc = acceleration_toward(body.pos, attractor, gm);
        integrator::step(&mut body, acc, dt, true);

        let expected = gm / (distance * distance) * dt;
        prop_assert!((body.vel.length() - expected).abs() <= expected * 1e-9);
        prop_assert!(body.vel.normalize().dot(-outward) > 0.999_999);
    }

    /// Acceleration stays finite arbitrarily close to the attractor, and
    /// the clamp bounds its magnitude.
    #[test]
    fn prop_acceleration_finite_near_singularity(
        offset in -2.0f64..2.0,
        gm in 1.0f64..1e6,
    ) {
        let attractor = DVec2::new(100.0, 100.0);
        let acc = acceleration_toward(attractor + DVec2::new(offset, 0.0), attractor, gm);
        prop_assert!(acc.x.is_finite() && acc.y.is_finite());
        prop_assert!(
            acc.length() <= gm / (MIN_ATTRACTOR_DISTANCE * MIN_ATTRACTOR_DISTANCE) + 1e-9
        );
    }

    /// A held body accumulates velocity but never moves.
    #[test]
    fn prop_held_body_position_fixed(
        px in 0.0f64..1280.0,
        py in 0.0f64..720.0,
        vx in -50.0f64..50.0,
        vy in -50.0f64..50.0,
    ) {
        let attractor = DVec2::new(640.0, 360.0);
        let mut body = BodyState::new(DVec2::new(px, py), DVec2::new(vx, vy), 100.0);
        let before = body.pos;
        let acc = acceleration_toward(body.pos, attractor, 10_000.0);
        integrator::step(&mut body, acc, 0.1, true);
        prop_assert_eq!(body.pos, before);
    }

    /// Angular momentum about the star is conserved by the step for a
    /// central force; energy drift stays bounded over a full orbit.
    #[test]
    fn prop_orbit_invariants_over_one_period(
        distance in 80.0f64..200.0,
    ) {
        let star = DVec2::new(640.0, 360.0);
        let gm = 10_000.0;
        let dt = 0.1;
        let mut body = fixtures::circular_orbit(star, gm, distance);

        let initial_energy = assertions::orbital_energy(star, gm, &body);
        let initial_l = assertions::angular_momentum(star, &body);

        let period = std::f64::consts::TAU * (distance.powi(3) / gm).sqrt();
        let steps = (period / dt).ceil() as usize;
        for _ in 0..steps {
            let acc = acceleration_toward(body.pos, star, gm);
            integrator::step(&mut body, acc, dt, false);
        }

        let final_l = assertions::angular_momentum(star, &body);
        prop_assert!(((final_l - initial_l) / initial_l).abs() < 1e-9);

        let final_energy = assertions::orbital_energy(star, gm, &body);
        prop_assert!(((final_energy - initial_energy) / initial_energy).abs() < 0.05);
    }
}
