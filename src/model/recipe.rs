//! The compiled-in drink catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ingredient quantities and price for one drink.
///
/// Water and milk are in ml, beans in grams, cost in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cost: u32,
}

/// The drinks the machine can brew, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoffeeType {
    Espresso,
    Latte,
    Cappuccino,
    Marocchino,
}

impl CoffeeType {
    /// Every drink, in the order the buy menu numbers them.
    pub const ALL: [CoffeeType; 4] = [
        CoffeeType::Espresso,
        CoffeeType::Latte,
        CoffeeType::Cappuccino,
        CoffeeType::Marocchino,
    ];

    /// Resolves a 1-based menu selector. Anything outside `1..=4` is `None`.
    pub fn from_selector(selector: i64) -> Option<Self> {
        let index = usize::try_from(selector).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The 1-based position of this drink on the menu.
    pub fn selector(self) -> usize {
        self as usize + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            CoffeeType::Espresso => "espresso",
            CoffeeType::Latte => "latte",
            CoffeeType::Cappuccino => "cappuccino",
            CoffeeType::Marocchino => "marocchino",
        }
    }

    pub fn recipe(self) -> Recipe {
        match self {
            CoffeeType::Espresso => Recipe { water: 250, milk: 0, beans: 16, cost: 4 },
            CoffeeType::Latte => Recipe { water: 350, milk: 75, beans: 20, cost: 7 },
            CoffeeType::Cappuccino => Recipe { water: 200, milk: 100, beans: 12, cost: 6 },
            CoffeeType::Marocchino => Recipe { water: 250, milk: 25, beans: 16, cost: 8 },
        }
    }

    /// The buy prompt, e.g. `1 - espresso, 2 - latte, ...`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|coffee| format!("{} - {}", coffee.selector(), coffee))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_is_one_based() {
        assert_eq!(CoffeeType::from_selector(1), Some(CoffeeType::Espresso));
        assert_eq!(CoffeeType::from_selector(4), Some(CoffeeType::Marocchino));
        assert_eq!(CoffeeType::from_selector(0), None);
        assert_eq!(CoffeeType::from_selector(5), None);
        assert_eq!(CoffeeType::from_selector(-1), None);
    }

    #[test]
    fn test_selector_matches_menu_position() {
        for (index, coffee) in CoffeeType::ALL.iter().enumerate() {
            assert_eq!(coffee.selector(), index + 1);
            assert_eq!(CoffeeType::from_selector(index as i64 + 1), Some(*coffee));
        }
    }

    #[test]
    fn test_menu_lists_every_drink() {
        assert_eq!(
            CoffeeType::menu(),
            "1 - espresso, 2 - latte, 3 - cappuccino, 4 - marocchino"
        );
    }

    #[test]
    fn test_espresso_uses_no_milk() {
        let espresso = CoffeeType::Espresso.recipe();
        assert_eq!(espresso.milk, 0);
        assert_eq!(espresso.water, 250);
    }
}
