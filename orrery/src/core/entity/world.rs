//! World wrapper providing helper methods for body management

use super::components::{Anchor, Name, Parent, Transform};
use crate::io::BodyDefinition;
use crate::orbital::components::{Orbit, Spin, TidalLock};
use hecs::Entity;
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// Wrapper around hecs::World providing additional helper methods
pub struct World {
    inner: hecs::World,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
        }
    }

    /// Spawn a new entity with the given components
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        self.inner.spawn(components)
    }

    /// Get a reference to a component on an entity
    pub fn get<T: hecs::Component>(
        &self,
        entity: Entity,
    ) -> Result<hecs::Ref<T>, hecs::ComponentError> {
        self.inner.get::<&T>(entity)
    }

    /// Query a single entity for a mutable component reference
    pub fn query_one_mut<Q: hecs::Query>(
        &mut self,
        entity: Entity,
    ) -> Result<Q::Item<'_>, hecs::QueryOneError> {
        self.inner.query_one_mut::<Q>(entity)
    }

    /// Insert a component into an entity
    pub fn insert_one(
        &mut self,
        entity: Entity,
        component: impl hecs::Component,
    ) -> Result<(), hecs::NoSuchEntity> {
        self.inner.insert_one(entity, component)
    }

    /// Query entities with specific components
    pub fn query<Q: hecs::Query>(&self) -> hecs::QueryBorrow<Q> {
        self.inner.query()
    }

    /// Query entities with specific components (mutable)
    pub fn query_mut<Q: hecs::Query>(&mut self) -> hecs::QueryMut<Q> {
        self.inner.query_mut()
    }

    /// Check if an entity exists
    pub fn contains(&self, entity: Entity) -> bool {
        self.inner.contains(entity)
    }

    /// Spawn one orbital body from its definition
    ///
    /// Every body carries `Name`, `Anchor`, `Transform`, `Orbit` and `Spin`;
    /// `TidalLock` and `Parent` are added when the definition asks for them.
    /// Initial phases are wrapped into `[0, 2π)`. A parentless body starts at
    /// its anchor; a parented body is placed by the first update call.
    pub fn spawn_body(&mut self, def: &BodyDefinition, parent: Option<Entity>) -> Entity {
        let mut builder = hecs::EntityBuilder::new();
        builder.add(Name::new(def.name.clone()));
        builder.add(Anchor(def.base_position));
        builder.add(Transform::from_position(def.base_position));
        builder.add(Orbit {
            radius: def.orbit_radius,
            period: def.orbit_period,
            angle: def.initial_orbit_angle.rem_euclid(TAU),
        });
        builder.add(Spin {
            period: def.rotation_period,
            angle: def.initial_rotation.rem_euclid(TAU),
        });
        if def.locked_to_parent {
            builder.add(TidalLock {
                facing_offset: def.locked_facing_offset,
            });
        }
        if let Some(parent) = parent {
            builder.add(Parent(parent));
        }

        let entity = self.inner.spawn(builder.build());
        debug!(entity = ?entity, name = %def.name, "Spawned orbital body");
        entity
    }

    /// Replace a body's orbit period
    ///
    /// The stored phase is untouched; only the angular rate of subsequent
    /// updates changes, so the body never jumps in position.
    pub fn set_orbit_period(&mut self, entity: Entity, period: Option<f64>) {
        match self.inner.query_one_mut::<&mut Orbit>(entity) {
            Ok(orbit) => orbit.period = period,
            Err(_) => warn!(entity = ?entity, "set_orbit_period on entity without an Orbit"),
        }
    }

    /// Replace a body's self-rotation period
    ///
    /// Phase-preserving, like [`World::set_orbit_period`].
    pub fn set_rotation_period(&mut self, entity: Entity, period: Option<f64>) {
        match self.inner.query_one_mut::<&mut Spin>(entity) {
            Ok(spin) => spin.period = period,
            Err(_) => warn!(entity = ?entity, "set_rotation_period on entity without a Spin"),
        }
    }

    /// Get access to the inner hecs::World for advanced operations
    pub fn inner(&self) -> &hecs::World {
        &self.inner
    }

    /// Get mutable access to the inner hecs::World for advanced operations
    pub fn inner_mut(&mut self) -> &mut hecs::World {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn anchored(name: &str, position: DVec3) -> BodyDefinition {
        BodyDefinition {
            base_position: position,
            ..BodyDefinition::new(name)
        }
    }

    #[test]
    fn test_world_spawn() {
        let mut world = World::new();
        let entity = world.spawn((Transform::default(),));
        assert!(world.contains(entity));
    }

    #[test]
    fn test_spawn_body_components() {
        let mut world = World::new();
        let sun = world.spawn_body(&anchored("Sun", DVec3::new(1.0, 0.0, 2.0)), None);

        assert_eq!(world.get::<Name>(sun).unwrap().0, "Sun");
        assert_eq!(world.get::<Anchor>(sun).unwrap().0, DVec3::new(1.0, 0.0, 2.0));
        // Parentless bodies start at their anchor
        assert_eq!(
            world.get::<Transform>(sun).unwrap().position,
            DVec3::new(1.0, 0.0, 2.0)
        );
        assert!(world.get::<Parent>(sun).is_err());
        assert!(world.get::<TidalLock>(sun).is_err());
    }

    #[test]
    fn test_spawn_body_parent_link() {
        let mut world = World::new();
        let sun = world.spawn_body(&anchored("Sun", DVec3::ZERO), None);
        let earth = world.spawn_body(
            &BodyDefinition {
                orbit_radius: 1.2,
                orbit_period: Some(1.0),
                ..BodyDefinition::new("Earth")
            },
            Some(sun),
        );

        assert_eq!(world.get::<Parent>(earth).unwrap().0, sun);
    }

    #[test]
    fn test_spawn_body_wraps_initial_phase() {
        let mut world = World::new();
        let body = world.spawn_body(
            &BodyDefinition {
                orbit_radius: 1.0,
                orbit_period: Some(4.0),
                initial_orbit_angle: TAU + 1.0,
                initial_rotation: -1.0,
                rotation_period: Some(4.0),
                ..BodyDefinition::new("Wrapped")
            },
            None,
        );

        let orbit = world.get::<Orbit>(body).unwrap();
        assert!((orbit.angle - 1.0).abs() < 1e-12);
        let spin = world.get::<Spin>(body).unwrap();
        assert!((spin.angle - (TAU - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_set_orbit_period_preserves_phase() {
        let mut world = World::new();
        let body = world.spawn_body(
            &BodyDefinition {
                orbit_radius: 1.0,
                orbit_period: Some(4.0),
                initial_orbit_angle: 1.5,
                ..BodyDefinition::new("Body")
            },
            None,
        );

        world.set_orbit_period(body, Some(8.0));

        let orbit = world.get::<Orbit>(body).unwrap();
        assert_eq!(orbit.period, Some(8.0));
        assert!((orbit.angle - 1.5).abs() < 1e-12);
    }
}
