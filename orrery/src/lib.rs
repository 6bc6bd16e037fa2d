//! Kinematics engine for a small hierarchy of orbiting, rotating bodies
//!
//! This crate simulates a star, planets, moons and a satellite on circular,
//! uniform-angular-velocity orbits, all driven by one user-adjustable
//! reference duration. Each tick it updates a position and a yaw orientation
//! per body for an external rendering layer to consume.

pub mod config;
pub mod core;
pub mod io;
pub mod orbital;
pub mod time;

// Re-export commonly used types
pub mod prelude {
    // Entity system types
    pub use crate::core::entity::{Anchor, Entity, Name, Parent, Transform, World};

    // Orbital types
    pub use crate::orbital::{update_orbital_system, Orbit, Spin, TidalLock};

    // Temporal configuration types
    pub use crate::config::{apply_temporal_config, TemporalBindings, TemporalConfig};

    // IO types
    pub use crate::io::{BodyDefinition, DefinitionError, SystemDefinition};

    // Clock types
    pub use crate::time::SimClock;

    // Math types
    pub use glam::DVec3;
}

/// Initialize logging for the engine
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
