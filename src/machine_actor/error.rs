//! Error types for the machine actor.

use crate::model::Supply;
use thiserror::Error;

/// Errors that can occur during machine operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// A supply cannot cover one more serving of the chosen drink.
    #[error("not enough {supply}, I can make only {servings} cups of coffee")]
    NotEnoughIngredients { supply: Supply, servings: u32 },

    /// A quantity would exceed what the machine can count.
    #[error("quantity out of range")]
    Overflow,

    /// The action reached the actor but came back with an unexpected result.
    #[error("unexpected reply from machine: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
