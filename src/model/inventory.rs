use serde::{Deserialize, Serialize};
use std::fmt;

use super::Recipe;
use crate::machine_actor::MachineError;

/// The machine's stock and takings.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Inventory`](#impl-ActorEntity-for-Inventory) for the
/// actions it accepts ([`MachineAction`](crate::machine_actor::MachineAction)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
    pub money: u32,
}

/// Amounts added by a restock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplies {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
}

/// A consumable the machine can run out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Supply {
    Water,
    Milk,
    Beans,
    Cups,
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Supply::Water => "water",
            Supply::Milk => "milk",
            Supply::Beans => "coffee beans",
            Supply::Cups => "disposable cups",
        })
    }
}

impl Inventory {
    /// Creates a new Inventory.
    ///
    /// # Arguments
    /// * `water` - ml of water
    /// * `milk` - ml of milk
    /// * `beans` - grams of coffee beans
    /// * `cups` - disposable cups
    /// * `money` - takings not yet withdrawn
    pub const fn new(water: u32, milk: u32, beans: u32, cups: u32, money: u32) -> Self {
        Self { water, milk, beans, cups, money }
    }

    /// The first supply that cannot cover one serving of `recipe`, if any.
    pub fn shortage(&self, recipe: &Recipe) -> Option<Supply> {
        if self.water < recipe.water {
            Some(Supply::Water)
        } else if self.milk < recipe.milk {
            Some(Supply::Milk)
        } else if self.beans < recipe.beans {
            Some(Supply::Beans)
        } else if self.cups == 0 {
            Some(Supply::Cups)
        } else {
            None
        }
    }

    pub fn can_afford(&self, recipe: &Recipe) -> bool {
        self.shortage(recipe).is_none()
    }

    /// How many servings of `recipe` the current stock covers.
    ///
    /// Ingredients the recipe does not use are skipped.
    pub fn servings(&self, recipe: &Recipe) -> u32 {
        [
            (self.water, recipe.water),
            (self.milk, recipe.milk),
            (self.beans, recipe.beans),
        ]
        .into_iter()
        .filter_map(|(stock, per_cup)| stock.checked_div(per_cup))
        .fold(self.cups, u32::min)
    }

    /// Brews one serving: consumes ingredients and a cup, collects the price.
    ///
    /// Leaves the record untouched on any error.
    pub fn apply_purchase(&mut self, recipe: &Recipe) -> Result<(), MachineError> {
        if let Some(supply) = self.shortage(recipe) {
            return Err(MachineError::NotEnoughIngredients {
                supply,
                servings: self.servings(recipe),
            });
        }
        let money = self.money.checked_add(recipe.cost).ok_or(MachineError::Overflow)?;

        self.water -= recipe.water;
        self.milk -= recipe.milk;
        self.beans -= recipe.beans;
        self.cups -= 1;
        self.money = money;
        Ok(())
    }

    /// Adds a restock. Rejected as a whole if any field would overflow.
    pub fn apply_fill(&mut self, supplies: &Supplies) -> Result<(), MachineError> {
        let filled = Self {
            water: self.water.checked_add(supplies.water).ok_or(MachineError::Overflow)?,
            milk: self.milk.checked_add(supplies.milk).ok_or(MachineError::Overflow)?,
            beans: self.beans.checked_add(supplies.beans).ok_or(MachineError::Overflow)?,
            cups: self.cups.checked_add(supplies.cups).ok_or(MachineError::Overflow)?,
            money: self.money,
        };
        *self = filled;
        Ok(())
    }

    /// Withdraws all takings.
    pub fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.money)
    }
}

impl Default for Inventory {
    /// The stock a freshly installed machine ships with.
    fn default() -> Self {
        Self::new(400, 540, 120, 9, 550)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} ml of water", self.water)?;
        writeln!(f, "{} ml of milk", self.milk)?;
        writeln!(f, "{} g of coffee beans", self.beans)?;
        writeln!(f, "{} disposable cups", self.cups)?;
        writeln!(f, "${} of money", self.money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CoffeeType;

    #[test]
    fn test_purchase_consumes_recipe() {
        let mut inventory = Inventory::default();
        inventory.apply_purchase(&CoffeeType::Espresso.recipe()).unwrap();
        assert_eq!(inventory, Inventory::new(150, 540, 104, 8, 554));
    }

    #[test]
    fn test_every_affordable_purchase_moves_exact_amounts() {
        for coffee in CoffeeType::ALL {
            let recipe = coffee.recipe();
            let before = Inventory::default();
            assert!(before.can_afford(&recipe), "{coffee} should be affordable");

            let mut after = before;
            after.apply_purchase(&recipe).unwrap();
            assert_eq!(after.water, before.water - recipe.water);
            assert_eq!(after.milk, before.milk - recipe.milk);
            assert_eq!(after.beans, before.beans - recipe.beans);
            assert_eq!(after.cups, before.cups - 1);
            assert_eq!(after.money, before.money + recipe.cost);
        }
    }

    #[test]
    fn test_short_supply_leaves_record_unchanged() {
        let mut inventory = Inventory::new(100, 540, 120, 9, 550);
        let err = inventory.apply_purchase(&CoffeeType::Latte.recipe()).unwrap_err();
        assert_eq!(
            err,
            MachineError::NotEnoughIngredients { supply: Supply::Water, servings: 0 }
        );
        assert_eq!(inventory, Inventory::new(100, 540, 120, 9, 550));
    }

    #[test]
    fn test_no_cups_means_no_coffee() {
        let mut inventory = Inventory::new(400, 540, 120, 0, 550);
        assert!(!inventory.can_afford(&CoffeeType::Espresso.recipe()));
        let err = inventory.apply_purchase(&CoffeeType::Espresso.recipe()).unwrap_err();
        assert_eq!(
            err,
            MachineError::NotEnoughIngredients { supply: Supply::Cups, servings: 0 }
        );
    }

    #[test]
    fn test_servings_skip_unused_ingredients() {
        let inventory = Inventory::new(1000, 0, 160, 9, 0);
        // espresso needs no milk, so an empty milk tank does not limit it
        assert_eq!(inventory.servings(&CoffeeType::Espresso.recipe()), 4);
        assert_eq!(inventory.servings(&CoffeeType::Latte.recipe()), 0);
    }

    #[test]
    fn test_servings_limited_by_cups() {
        let inventory = Inventory::new(10_000, 10_000, 10_000, 2, 0);
        assert_eq!(inventory.servings(&CoffeeType::Cappuccino.recipe()), 2);
    }

    #[test]
    fn test_fill_adds_each_field() {
        let mut inventory = Inventory::new(150, 540, 104, 8, 554);
        inventory
            .apply_fill(&Supplies { water: 100, milk: 0, beans: 0, cups: 0 })
            .unwrap();
        assert_eq!(inventory, Inventory::new(250, 540, 104, 8, 554));

        inventory
            .apply_fill(&Supplies { water: 1, milk: 2, beans: 3, cups: 4 })
            .unwrap();
        assert_eq!(inventory, Inventory::new(251, 542, 107, 12, 554));
    }

    #[test]
    fn test_fill_overflow_is_all_or_nothing() {
        let mut inventory = Inventory::new(1, 1, 1, u32::MAX, 0);
        let err = inventory
            .apply_fill(&Supplies { water: 5, milk: 5, beans: 5, cups: 1 })
            .unwrap_err();
        assert_eq!(err, MachineError::Overflow);
        assert_eq!(inventory, Inventory::new(1, 1, 1, u32::MAX, 0));
    }

    #[test]
    fn test_take_all_twice() {
        let mut inventory = Inventory::new(150, 540, 104, 8, 554);
        assert_eq!(inventory.take_all(), 554);
        assert_eq!(inventory.take_all(), 0);
        assert_eq!(inventory.money, 0);
    }

    #[test]
    fn test_display_report() {
        assert_eq!(
            Inventory::default().to_string(),
            "The coffee machine has:\n\
             400 ml of water\n\
             540 ml of milk\n\
             120 g of coffee beans\n\
             9 disposable cups\n\
             $550 of money\n"
        );
    }
}
