//! Entity storage for orbital bodies
//!
//! Bodies are entities in a `hecs` world; behavior is expressed through
//! components and the parent link is a non-owning entity handle resolved
//! through the world's storage.

pub mod components;
pub mod world;

// Re-export commonly used types
pub use components::{Anchor, Name, Parent, Transform};
pub use world::World;

// Re-export hecs types that users will need
pub use hecs::Entity;
