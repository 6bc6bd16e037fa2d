//! Orbital kinematics
//!
//! This module provides the behavior components for circular orbits,
//! self-rotation and tidal locking, and the per-tick update system that
//! advances them parent-before-child.

pub mod components;
pub mod systems;

// Re-export commonly used types
pub use components::{Orbit, Spin, TidalLock};
pub use systems::update_orbital_system;
