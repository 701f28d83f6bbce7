//! Bounded trailing-path history for planets.

use std::collections::VecDeque;

use bevy::math::{DVec2, IVec2};
use bevy::prelude::*;

use crate::body::Planet;
use crate::interaction::GrabState;
use crate::types::BodyState;

/// Capacity-bounded history of a planet's recent positions.
///
/// Positions are stored integer-rounded; once the capacity is reached the
/// oldest point is evicted first. The buffer is created empty with its
/// planet, cleared when a drag begins, and dropped with the entity, so the
/// set of trails always matches the set of planets.
#[derive(Component, Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<IVec2>,
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty buffer holding at most `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a position, evicting the oldest points past capacity.
    pub fn push(&mut self, position: DVec2) {
        self.points.push_back(position.round().as_ivec2());
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Drop all recorded points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recorded points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.points.iter().copied()
    }

    /// `(point, alpha)` pairs for fading rendering, oldest first.
    ///
    /// The newest point is fully opaque (255); older points fade toward
    /// transparent. Recomputed from the live buffer on every call; the
    /// alpha is a rendering hint, nothing in the simulation reads it back.
    pub fn fade(&self) -> impl Iterator<Item = (IVec2, u8)> + '_ {
        let len = self.points.len();
        self.points.iter().enumerate().map(move |(i, &point)| {
            // Fade by distance from the newest point.
            let age = len - 1 - i;
            let alpha = (255.0 * (1.0 - age as f64 / len as f64)).round() as u8;
            (point, alpha)
        })
    }
}

/// Append each planet's position to its trail, once per tick.
///
/// The grab target's trail is cleared right after the append, so a dragged
/// planet carries no trail until it is released.
pub fn record_trails(
    grab: Res<GrabState>,
    mut planets: Query<(Entity, &BodyState, &mut TrailBuffer), With<Planet>>,
) {
    for (entity, body, mut trail) in planets.iter_mut() {
        trail.push(body.pos);
        if grab.is_dragging(entity) {
            trail.clear();
        }
    }
}
