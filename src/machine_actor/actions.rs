//! Actions for the machine actor.
//!
//! This module defines the operations that can be performed on the
//! [`Inventory`](crate::model::Inventory) owned by the machine actor.
//! They are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).
//!
//! See [`impl ActorEntity for Inventory`](crate::model::Inventory#impl-ActorEntity-for-Inventory)
//! for the implementation details.

use crate::model::{CoffeeType, Inventory, Supplies};

/// Operations that change the machine's stock or takings.
///
/// Reading the stock goes through the actor's `Get` request instead
/// (see [`MachineClient::snapshot`](crate::clients::MachineClient::snapshot)).
#[derive(Debug, Clone)]
pub enum MachineAction {
    /// Brews one drink.
    ///
    /// # Errors
    /// Fails with `NotEnoughIngredients` if any ingredient or the cups run short.
    Buy(CoffeeType),
    /// Restocks water, milk, beans and cups in one step.
    Fill(Supplies),
    /// Withdraws all takings.
    Take,
}

/// Results from MachineActions - variants match 1:1 with MachineAction
#[derive(Debug, Clone)]
pub enum MachineActionResult {
    /// State after the purchase
    Buy(Inventory),
    /// State after the restock
    Fill(Inventory),
    /// Amount handed out
    Take(u32),
}
