//! Input/Output module for system definitions

pub mod scene;

pub use scene::{BodyDefinition, DefinitionError, SystemDefinition};
