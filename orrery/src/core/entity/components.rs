//! Core components for orbital bodies

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Derived world-space state of a body, read by the external rendering layer
/// after each update
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: DVec3,
    /// Heading about the local vertical axis, in radians
    pub yaw: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Fixed anchor point, used as the orbit center and resting position of a
/// body that has no parent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Anchor(pub DVec3);

/// Parent component establishing a parent-relative orbit
///
/// The handle is non-owning; the body it names must be spawned in the same
/// world and stay alive for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub hecs::Entity);

/// Name component for user-friendly body identification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    /// Create a new name component
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let transform = Transform::default();
        assert_eq!(transform.position, DVec3::ZERO);
        assert_eq!(transform.yaw, 0.0);
    }

    #[test]
    fn test_transform_from_position() {
        let transform = Transform::from_position(DVec3::new(2.0, 0.0, -1.0));
        assert_eq!(transform.position, DVec3::new(2.0, 0.0, -1.0));
        assert_eq!(transform.yaw, 0.0);
    }

    #[test]
    fn test_name_component() {
        let name = Name::new("Earth");
        assert_eq!(name.0, "Earth");

        // Test serialization
        let json = serde_json::to_string(&name).unwrap();
        let deserialized: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(name.0, deserialized.0);
    }
}
