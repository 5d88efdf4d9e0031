//! Machine-specific logic: the actions the [`Inventory`] actor accepts.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MachineClient;
use crate::config::MachineConfig;
use crate::framework::ResourceActor;
use crate::model::Inventory;

/// Creates a new machine actor and its client.
pub fn new(config: &MachineConfig) -> (ResourceActor<Inventory>, MachineClient) {
    let (actor, generic_client) = ResourceActor::new(config.mailbox_size, config.initial);
    let client = MachineClient::new(generic_client);

    (actor, client)
}
