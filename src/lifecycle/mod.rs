//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`CoffeeSystem`] - Starts the machine actor and shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod coffee_system;
pub mod tracing;

pub use self::coffee_system::*;
pub use self::tracing::*;
