//! Start-up settings for the machine.
//!
//! Recipes are compiled in; only the opening stock and the actor's mailbox
//! depth are configurable. Log verbosity comes from `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use crate::model::Inventory;

/// Mailbox depth of the machine actor.
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Stock the machine starts with.
    pub initial: Inventory,
    /// Capacity of the actor's request channel. Must be non-zero.
    pub mailbox_size: usize,
}

impl MachineConfig {
    pub fn with_initial(initial: Inventory) -> Self {
        Self {
            initial,
            ..Self::default()
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial: Inventory::default(),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}
