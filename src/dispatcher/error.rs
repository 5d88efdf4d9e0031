//! Error types for the command dispatcher.

use crate::machine_actor::MachineError;
use thiserror::Error;

/// Errors surfaced to the operator while running a command.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A prompt's answer was not a single token of the expected shape.
    #[error("invalid input")]
    InvalidInput,

    /// The command keyword is not in the command table. Carries the keyword for logs.
    #[error("unknown command")]
    UnknownCommand(String),

    /// The buy selector is outside the menu. Carries the answer as typed, for logs.
    #[error("invalid coffee type chosen")]
    InvalidCoffeeType(String),

    /// The machine rejected the operation.
    #[error(transparent)]
    Machine(#[from] MachineError),

    /// Standard input reached end of stream.
    #[error("input closed, now exiting")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Whether the loop may report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DispatchError::InvalidInput
            | DispatchError::UnknownCommand(_)
            | DispatchError::InvalidCoffeeType(_) => true,
            DispatchError::Machine(MachineError::ActorCommunicationError(_)) => false,
            DispatchError::Machine(_) => true,
            DispatchError::InputClosed | DispatchError::Io(_) => false,
        }
    }
}
