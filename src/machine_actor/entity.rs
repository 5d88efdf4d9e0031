//! ActorEntity trait implementation for the [`Inventory`] record.
//!
//! See the trait implementation on [`Inventory`] for method documentation.

use super::{MachineAction, MachineActionResult, MachineError};
use crate::framework::ActorEntity;
use crate::model::Inventory;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Inventory {
    type Action = MachineAction;
    type ActionResult = MachineActionResult;
    type Context = ();
    type Error = MachineError;

    /// Handles machine actions.
    ///
    /// # Actions
    /// - `Buy`: Brews the drink if stock allows, returns the new state
    /// - `Fill`: Adds supplies, returns the new state
    /// - `Take`: Empties the till, returns the amount withdrawn
    async fn handle_action(
        &mut self,
        action: MachineAction,
        _ctx: &Self::Context,
    ) -> Result<MachineActionResult, MachineError> {
        match action {
            MachineAction::Buy(coffee) => {
                self.apply_purchase(&coffee.recipe())?;
                debug!(%coffee, cups_left = self.cups, "Brewed");
                Ok(MachineActionResult::Buy(*self))
            }
            MachineAction::Fill(supplies) => {
                self.apply_fill(&supplies)?;
                Ok(MachineActionResult::Fill(*self))
            }
            MachineAction::Take => {
                let money = self.take_all();
                debug!(money, "Till emptied");
                Ok(MachineActionResult::Take(money))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoffeeType, Supplies, Supply};

    #[tokio::test]
    async fn test_buy_returns_new_state() {
        let mut inventory = Inventory::default();
        let result = inventory
            .handle_action(MachineAction::Buy(CoffeeType::Espresso), &())
            .await
            .unwrap();
        assert!(matches!(
            result,
            MachineActionResult::Buy(state) if state == Inventory::new(150, 540, 104, 8, 554)
        ));
    }

    #[tokio::test]
    async fn test_failed_buy_keeps_state() {
        let mut inventory = Inventory::new(400, 540, 10, 9, 550);
        let err = inventory
            .handle_action(MachineAction::Buy(CoffeeType::Latte), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MachineError::NotEnoughIngredients { supply: Supply::Beans, servings: 0 }
        );
        assert_eq!(inventory, Inventory::new(400, 540, 10, 9, 550));
    }

    #[tokio::test]
    async fn test_fill_then_take() {
        let mut inventory = Inventory::default();
        inventory
            .handle_action(MachineAction::Fill(Supplies { water: 0, milk: 0, beans: 0, cups: 1 }), &())
            .await
            .unwrap();
        assert_eq!(inventory.cups, 10);

        let result = inventory.handle_action(MachineAction::Take, &()).await.unwrap();
        assert!(matches!(result, MachineActionResult::Take(550)));
        assert_eq!(inventory.money, 0);
    }
}
