//! Generic actor framework for owning a single stateful entity.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait the owned state implements
//! - [`ResourceActor`] - Generic actor that owns the entity and serializes access to it
//! - [`ResourceClient`] - Typed handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
