//! Pointer interaction: the grab state machine and input event handling.
//!
//! The controller consumes discrete input events, never the windowing
//! layer's own types, so it can be driven headlessly in tests. Events are
//! drained in delivery order once per simulation tick, before integration
//! runs for that tick.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{BodyVisual, Planet, PlanetCounter, PlanetRoster};
use crate::config::SimConfig;
use crate::lifecycle;
use crate::trail::TrailBuffer;
use crate::types::BodyState;

/// Pointer button identity, decoupled from any window backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Discrete input event consumed by the interaction controller.
#[derive(Message, Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown { button: PointerButton, position: DVec2 },
    PointerUp { button: PointerButton },
    PointerMove { position: DVec2 },
    ExitRequested,
}

/// Grab state machine: at most one planet follows the pointer.
///
/// The star can never become the target since it is excluded from
/// hit-testing.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub enum GrabState {
    #[default]
    Idle,
    Dragging {
        /// The grabbed planet.
        target: Entity,
        /// Grip offset from the pointer to the planet center at grab time;
        /// the planet is held at `pointer + offset`.
        offset: DVec2,
    },
}

impl GrabState {
    /// The grabbed planet, if any.
    pub fn target(&self) -> Option<Entity> {
        match *self {
            GrabState::Idle => None,
            GrabState::Dragging { target, .. } => Some(target),
        }
    }

    /// Whether `entity` is the current grab target.
    pub fn is_dragging(&self, entity: Entity) -> bool {
        self.target() == Some(entity)
    }
}

/// Last observed pointer position, in viewport coordinates.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub position: DVec2,
}

/// First planet, in insertion order, whose circular bounds contain `point`.
///
/// `planets` must be supplied in insertion order as `(entity, center,
/// radius)` triples; the earlier-inserted planet wins when bounds overlap.
pub fn hit_test(
    point: DVec2,
    planets: impl IntoIterator<Item = (Entity, DVec2, f64)>,
) -> Option<Entity> {
    planets
        .into_iter()
        .find(|&(_, center, radius)| (point - center).length() <= radius)
        .map(|(entity, _, _)| entity)
}

/// Planet bounds in roster order, overlaying planets whose spawn commands
/// have not been applied yet.
fn bounds_in_order(
    roster: &PlanetRoster,
    planets: &Query<(&BodyState, &BodyVisual, &mut TrailBuffer), With<Planet>>,
    pending: &[(Entity, DVec2, f64)],
) -> Vec<(Entity, DVec2, f64)> {
    roster
        .iter()
        .filter_map(|entity| {
            planets
                .get(entity)
                .ok()
                .map(|(body, visual, _)| (entity, body.pos, visual.radius))
                .or_else(|| pending.iter().find(|&&(e, ..)| e == entity).copied())
        })
        .collect()
}

/// Drain pending input events, updating grab state and the planet set.
///
/// Primary press grabs the planet under the pointer (clearing its trail),
/// or spawns one there when the click lands on empty space; a spawned
/// planet is immediately grabbed at zero offset since it appears under the
/// pointer. Secondary press deletes the planet under the pointer. Primary
/// release always returns to Idle.
pub fn drain_input_events(
    mut commands: Commands,
    mut events: MessageReader<InputEvent>,
    mut grab: ResMut<GrabState>,
    mut pointer: ResMut<PointerState>,
    mut roster: ResMut<PlanetRoster>,
    mut counter: ResMut<PlanetCounter>,
    config: Res<SimConfig>,
    mut planets: Query<(&BodyState, &BodyVisual, &mut TrailBuffer), With<Planet>>,
    mut exit: MessageWriter<AppExit>,
) {
    // Planets spawned by an earlier event of this drain are not yet visible
    // to the query (commands apply at the end of the system), so they are
    // tracked here for hit-testing by later events.
    let mut pending: Vec<(Entity, DVec2, f64)> = Vec::new();

    for event in events.read() {
        match *event {
            InputEvent::PointerMove { position } => {
                pointer.position = position;
            }
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } => {
                pointer.position = position;
                match hit_test(position, bounds_in_order(&roster, &planets, &pending)) {
                    Some(entity) => {
                        let offset = match planets.get_mut(entity) {
                            Ok((body, _, mut trail)) => {
                                trail.clear();
                                body.pos - position
                            }
                            // Pending planet: its trail is already empty.
                            Err(_) => pending
                                .iter()
                                .find(|&&(e, ..)| e == entity)
                                .map(|&(_, pos, _)| pos - position)
                                .unwrap_or(DVec2::ZERO),
                        };
                        *grab = GrabState::Dragging { target: entity, offset };
                    }
                    None => {
                        let entity = lifecycle::spawn_planet_at(
                            &mut commands,
                            &mut roster,
                            &mut counter,
                            &config,
                            position,
                        );
                        pending.push((entity, position, lifecycle::PLANET_RADIUS));
                        *grab = GrabState::Dragging {
                            target: entity,
                            offset: DVec2::ZERO,
                        };
                    }
                }
            }
            InputEvent::PointerDown {
                button: PointerButton::Secondary,
                position,
            } => {
                pointer.position = position;
                if let Some(entity) = hit_test(position, bounds_in_order(&roster, &planets, &pending))
                {
                    lifecycle::despawn_planet(&mut commands, &mut roster, entity);
                    pending.retain(|&(e, ..)| e != entity);
                }
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
            } => {
                *grab = GrabState::Idle;
            }
            InputEvent::PointerUp {
                button: PointerButton::Secondary,
            } => {}
            InputEvent::ExitRequested => {
                exit.write(AppExit::Success);
            }
        }
    }
}

/// Hold the grabbed planet at the pointer, once per tick.
///
/// If the target no longer exists (deleted out from under the drag), the
/// state drops back to Idle instead of failing the lookup.
pub fn apply_grab(
    mut grab: ResMut<GrabState>,
    pointer: Res<PointerState>,
    mut planets: Query<&mut BodyState, With<Planet>>,
) {
    let GrabState::Dragging { target, offset } = *grab else {
        return;
    };
    match planets.get_mut(target) {
        Ok(mut body) => {
            body.pos = pointer.position + offset;
        }
        Err(_) => {
            debug!("grab target no longer exists, releasing");
            *grab = GrabState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_first_inserted_wins_on_overlap() {
        let ids = entities(2);
        let planets = vec![
            (ids[0], DVec2::new(300.0, 300.0), 10.0),
            (ids[1], DVec2::new(305.0, 300.0), 10.0),
        ];
        // Inside both circles.
        assert_eq!(hit_test(DVec2::new(303.0, 300.0), planets), Some(ids[0]));
    }

    #[test]
    fn test_hit_boundary_is_inclusive() {
        let ids = entities(1);
        let planets = vec![(ids[0], DVec2::new(100.0, 100.0), 10.0)];
        assert_eq!(hit_test(DVec2::new(110.0, 100.0), planets.clone()), Some(ids[0]));
        assert_eq!(hit_test(DVec2::new(110.001, 100.0), planets), None);
    }

    #[test]
    fn test_miss_returns_none() {
        let ids = entities(1);
        let planets = vec![(ids[0], DVec2::new(100.0, 100.0), 10.0)];
        assert_eq!(hit_test(DVec2::new(500.0, 500.0), planets), None);
    }

    #[test]
    fn test_grab_state_accessors() {
        let ids = entities(1);
        assert_eq!(GrabState::Idle.target(), None);
        let dragging = GrabState::Dragging {
            target: ids[0],
            offset: DVec2::ZERO,
        };
        assert!(dragging.is_dragging(ids[0]));
        assert_eq!(dragging.target(), Some(ids[0]));
    }
}
