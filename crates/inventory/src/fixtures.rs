//! Canonical starting stock for demonstrations and regression runs.

use crate::category::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};
use crate::item::Item;
use crate::shop::Inventory;

/// The nine items the shop opens with.
pub fn standard_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

pub fn standard_inventory() -> Inventory {
    Inventory::new(standard_items())
}
