//! Per-tick orbital update system
//!
//! Advances orbit and spin phases from the elapsed simulated time and
//! composes parent-relative positions root-to-leaf, so a child always reads
//! the position its parent received in the same tick.

use crate::core::entity::{Anchor, Parent, Transform, World};
use crate::orbital::components::{Orbit, Spin, TidalLock};
use glam::DVec3;
use hecs::Entity;
use std::collections::HashSet;
use std::f64::consts::{PI, TAU};
use tracing::{error, trace};

/// Advance every body by `elapsed_minutes` of simulated time.
///
/// `elapsed_minutes` must be non-negative and finite; zero is a valid call
/// used to place bodies at time zero. The traversal is breadth-first from the
/// root bodies, so spawn order does not matter for correctness. Bodies on a
/// cyclic or dangling parent chain are unreachable from any root; they are
/// logged and left untouched.
pub fn update_orbital_system(world: &mut World, elapsed_minutes: f64) {
    let inner = world.inner_mut();

    let mut visited = HashSet::new();

    // Root bodies (no Parent) anchor the traversal and update first.
    let roots: Vec<Entity> = inner
        .query::<(&Transform,)>()
        .without::<&Parent>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut queue = Vec::with_capacity(roots.len());
    for entity in roots {
        integrate_body(inner, entity, None, elapsed_minutes);
        visited.insert(entity);
        queue.push(entity);
    }
    trace!(
        root_count = queue.len(),
        elapsed_minutes,
        "Starting orbital update"
    );

    let mut next_level = Vec::new();
    while !queue.is_empty() {
        // Collect this level's children together with their parent's
        // already-updated position, then integrate them.
        let mut level = Vec::new();
        for parent_entity in queue.drain(..) {
            let parent_position = match inner.get::<&Transform>(parent_entity) {
                Ok(transform) => transform.position,
                Err(_) => continue,
            };
            for (child, parent) in inner.query::<&Parent>().iter() {
                if parent.0 == parent_entity {
                    level.push((child, parent_position));
                }
            }
        }

        for (child, parent_position) in level {
            if !visited.insert(child) {
                error!(child = ?child, "Cyclic parent link detected in orbital hierarchy");
                continue;
            }
            integrate_body(inner, child, Some(parent_position), elapsed_minutes);
            next_level.push(child);
        }

        std::mem::swap(&mut queue, &mut next_level);
    }

    // Anything left over sits on a parent chain that never reaches a root.
    let stranded = inner
        .query::<&Parent>()
        .iter()
        .filter(|(entity, _)| !visited.contains(entity))
        .count();
    if stranded > 0 {
        error!(
            count = stranded,
            "Bodies unreachable from any root were not updated"
        );
    }

    trace!(updated = visited.len(), "Orbital update completed");
}

/// Integrate a single body against its orbit center.
///
/// `parent_position` carries the parent's position for this tick; `None`
/// means the body is a root and orbits (or rests at) its own anchor.
fn integrate_body(
    world: &mut hecs::World,
    entity: Entity,
    parent_position: Option<DVec3>,
    elapsed_minutes: f64,
) {
    let anchor = world
        .get::<&Anchor>(entity)
        .map(|anchor| anchor.0)
        .unwrap_or(DVec3::ZERO);
    let center = parent_position.unwrap_or(anchor);

    // Advance the orbit phase and note where the body belongs on its circle.
    let placement = match world.query_one_mut::<&mut Orbit>(entity) {
        Ok(orbit) => match orbit.period {
            Some(period) if orbit.is_active() => {
                orbit.angle = (orbit.angle + TAU * elapsed_minutes / period).rem_euclid(TAU);
                Some((orbit.radius, orbit.angle))
            }
            _ => None,
        },
        Err(_) => None,
    };

    match placement {
        Some((radius, angle)) => {
            // Orbits are planar: only the horizontal components move.
            if let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) {
                transform.position.x = center.x + radius * angle.cos();
                transform.position.z = center.z + radius * angle.sin();
            }
        }
        // A root that is not orbiting rests at its anchor; a parented body
        // stays wherever the last update left it.
        None if parent_position.is_none() => {
            if let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) {
                transform.position = anchor;
            }
        }
        None => {}
    }

    let lock = world
        .get::<&TidalLock>(entity)
        .map(|lock| lock.facing_offset)
        .ok();
    match (lock, parent_position) {
        (Some(facing_offset), Some(parent)) => {
            // Tidal locking: half a turn so the face points at the parent
            // rather than away from it.
            if let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) {
                let dx = parent.x - transform.position.x;
                let dz = parent.z - transform.position.z;
                transform.yaw = dz.atan2(dx) + PI + facing_offset;
            }
        }
        _ => {
            let spin_angle = match world.query_one_mut::<&mut Spin>(entity) {
                Ok(spin) => match spin.period {
                    Some(period) if period != 0.0 => {
                        spin.angle = (spin.angle + TAU * elapsed_minutes / period).rem_euclid(TAU);
                        Some(spin.angle)
                    }
                    _ => None,
                },
                Err(_) => None,
            };
            if let Some(angle) = spin_angle {
                if let Ok(transform) = world.query_one_mut::<&mut Transform>(entity) {
                    transform.yaw = angle;
                }
            }
        }
    }
}
