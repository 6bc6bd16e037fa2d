//! System definitions: serializable body parameters and world instantiation

use crate::core::entity::{Entity, World};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Errors that can occur while loading or instantiating a definition
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    #[error("body `{body}` names unknown parent `{parent}`")]
    UnknownParent { body: String, parent: String },
}

/// Startup parameters for one orbital body
///
/// `parent` names another body in the same definition; it must appear before
/// this one, which keeps every definition free of parent cycles. Periods are
/// simulated minutes and usually placeholders: hosts overwrite them with a
/// derived [`TemporalConfig`](crate::config::TemporalConfig) before the
/// first tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDefinition {
    pub name: String,
    pub parent: Option<String>,
    pub base_position: DVec3,
    pub orbit_radius: f64,
    pub orbit_period: Option<f64>,
    pub rotation_period: Option<f64>,
    pub initial_orbit_angle: f64,
    pub initial_rotation: f64,
    pub locked_to_parent: bool,
    pub locked_facing_offset: f64,
}

impl BodyDefinition {
    /// Create a definition with the given name and everything else disabled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            base_position: DVec3::ZERO,
            orbit_radius: 0.0,
            orbit_period: None,
            rotation_period: None,
            initial_orbit_angle: 0.0,
            initial_rotation: 0.0,
            locked_to_parent: false,
            locked_facing_offset: 0.0,
        }
    }
}

/// An ordered collection of body definitions, parents before children
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDefinition {
    pub bodies: Vec<BodyDefinition>,
}

impl SystemDefinition {
    /// The built-in star system: a sun, the Earth with a tidally locked moon,
    /// a satellite circling that moon three times per month, and Mars.
    pub fn solar_system() -> Self {
        Self {
            bodies: vec![
                BodyDefinition::new("Sun"),
                BodyDefinition {
                    parent: Some("Sun".into()),
                    orbit_radius: 1.2,
                    orbit_period: Some(1.0),
                    rotation_period: Some(1.0 / 365.24),
                    ..BodyDefinition::new("Earth")
                },
                BodyDefinition {
                    parent: Some("Earth".into()),
                    orbit_radius: 0.4,
                    orbit_period: Some(1.0),
                    rotation_period: Some(1.0),
                    initial_orbit_angle: PI,
                    locked_to_parent: true,
                    ..BodyDefinition::new("Moon")
                },
                BodyDefinition {
                    parent: Some("Moon".into()),
                    orbit_radius: 0.18,
                    orbit_period: Some(0.333),
                    rotation_period: Some(0.333),
                    initial_orbit_angle: FRAC_PI_2,
                    locked_to_parent: true,
                    ..BodyDefinition::new("Satellite")
                },
                BodyDefinition {
                    parent: Some("Sun".into()),
                    orbit_radius: 1.9,
                    orbit_period: Some(1.5),
                    rotation_period: Some(0.01),
                    initial_orbit_angle: PI / 3.0,
                    ..BodyDefinition::new("Mars")
                },
            ],
        }
    }

    /// Load a definition from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let json = fs::read_to_string(path.as_ref())?;
        let definition = serde_json::from_str(&json)?;
        debug!(path = ?path.as_ref(), "Loaded system definition");
        Ok(definition)
    }

    /// Save this definition to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DefinitionError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        debug!(path = ?path.as_ref(), "Saved system definition");
        Ok(())
    }

    /// Spawn every defined body into the world, in definition order.
    ///
    /// Parent names are resolved against the bodies defined so far, so a
    /// valid definition is parent-before-child by construction. Returns the
    /// name-to-entity map for host-side bindings.
    pub fn instantiate(&self, world: &mut World) -> Result<HashMap<String, Entity>, DefinitionError> {
        let mut spawned = HashMap::new();

        for def in &self.bodies {
            if spawned.contains_key(&def.name) {
                return Err(DefinitionError::DuplicateName(def.name.clone()));
            }

            let parent = match &def.parent {
                Some(parent_name) => Some(*spawned.get(parent_name).ok_or_else(|| {
                    DefinitionError::UnknownParent {
                        body: def.name.clone(),
                        parent: parent_name.clone(),
                    }
                })?),
                None => None,
            };

            let entity = world.spawn_body(def, parent);
            spawned.insert(def.name.clone(), entity);
        }

        info!(body_count = spawned.len(), "Instantiated system definition");
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{Name, Parent, Transform};
    use crate::orbital::components::TidalLock;

    #[test]
    fn test_solar_system_instantiates() {
        let mut world = World::new();
        let bodies = SystemDefinition::solar_system()
            .instantiate(&mut world)
            .unwrap();

        assert_eq!(bodies.len(), 5);
        assert_eq!(world.query::<&Name>().iter().count(), 5);

        // Parent links follow the definition's hierarchy.
        assert_eq!(world.get::<Parent>(bodies["Earth"]).unwrap().0, bodies["Sun"]);
        assert_eq!(world.get::<Parent>(bodies["Moon"]).unwrap().0, bodies["Earth"]);
        assert_eq!(
            world.get::<Parent>(bodies["Satellite"]).unwrap().0,
            bodies["Moon"]
        );
        assert_eq!(world.get::<Parent>(bodies["Mars"]).unwrap().0, bodies["Sun"]);
        assert!(world.get::<Parent>(bodies["Sun"]).is_err());

        // The moon and the satellite are tidally locked, the planets spin.
        assert!(world.get::<TidalLock>(bodies["Moon"]).is_ok());
        assert!(world.get::<TidalLock>(bodies["Satellite"]).is_ok());
        assert!(world.get::<TidalLock>(bodies["Earth"]).is_err());
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let definition = SystemDefinition {
            bodies: vec![BodyDefinition {
                parent: Some("Sun".into()),
                ..BodyDefinition::new("Earth")
            }],
        };

        let mut world = World::new();
        let err = definition.instantiate(&mut world).unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownParent { .. }));
    }

    #[test]
    fn test_forward_parent_reference_is_rejected() {
        // A body may only name an earlier body as its parent; this also
        // keeps self-references and cycles unrepresentable.
        let definition = SystemDefinition {
            bodies: vec![
                BodyDefinition {
                    parent: Some("Moon".into()),
                    ..BodyDefinition::new("Earth")
                },
                BodyDefinition {
                    parent: Some("Earth".into()),
                    ..BodyDefinition::new("Moon")
                },
            ],
        };

        let mut world = World::new();
        assert!(definition.instantiate(&mut world).is_err());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let definition = SystemDefinition {
            bodies: vec![BodyDefinition::new("Sun"), BodyDefinition::new("Sun")],
        };

        let mut world = World::new();
        let err = definition.instantiate(&mut world).unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateName(name) if name == "Sun"));
    }

    #[test]
    fn test_definition_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solar_system.json");

        let definition = SystemDefinition::solar_system();
        definition.save_to_file(&path).unwrap();
        let loaded = SystemDefinition::load_from_file(&path).unwrap();

        assert_eq!(loaded.bodies.len(), definition.bodies.len());
        let mut world = World::new();
        let bodies = loaded.instantiate(&mut world).unwrap();
        assert!(bodies.contains_key("Satellite"));

        // Loaded bodies place exactly like built-in ones.
        crate::orbital::update_orbital_system(&mut world, 0.0);
        let earth = world.get::<Transform>(bodies["Earth"]).unwrap();
        assert!((earth.position.x - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SystemDefinition::load_from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, DefinitionError::Io(_)));
    }
}
