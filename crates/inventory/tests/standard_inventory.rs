//! Runs the canonical starting stock forward and checks every item.

use gilded_rose_inventory::fixtures::standard_inventory;
use gilded_rose_inventory::{Inventory, Item};

fn snapshot(inventory: &Inventory) -> Vec<(i64, i64)> {
    inventory
        .items()
        .iter()
        .map(|i| (i.sell_in(), i.quality()))
        .collect()
}

fn advance(inventory: &mut Inventory, days: u64) {
    for _ in 0..days {
        inventory.advance_day();
    }
}

#[test]
fn standard_inventory_starts_valid() {
    let inventory = standard_inventory();
    assert_eq!(inventory.items().len(), 9);
    assert_eq!(inventory.day(), 0);
    assert!(inventory.validate().is_ok());
}

#[test]
fn standard_inventory_after_one_day() {
    let mut inventory = standard_inventory();
    inventory.advance_day();

    let rendered: Vec<String> = inventory.items().iter().map(Item::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "+5 Dexterity Vest, 9, 19",
            "Aged Brie, 1, 1",
            "Elixir of the Mongoose, 4, 6",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Sulfuras, Hand of Ragnaros, -1, 80",
            "Backstage passes to a TAFKAL80ETC concert, 14, 21",
            "Backstage passes to a TAFKAL80ETC concert, 9, 50",
            "Backstage passes to a TAFKAL80ETC concert, 4, 50",
            "Conjured Mana Cake, 2, 4",
        ]
    );
}

#[test]
fn standard_inventory_after_three_days() {
    let mut inventory = standard_inventory();
    advance(&mut inventory, 3);

    assert_eq!(
        snapshot(&inventory),
        vec![
            (7, 17),
            (-1, 4),
            (2, 4),
            (0, 80),
            (-1, 80),
            (12, 23),
            (7, 50),
            (2, 50),
            (0, 0),
        ]
    );
}

#[test]
fn standard_inventory_after_six_days() {
    let mut inventory = standard_inventory();
    advance(&mut inventory, 6);

    assert_eq!(inventory.day(), 6);
    assert_eq!(
        snapshot(&inventory),
        vec![
            (4, 14),
            (-4, 10),
            (-1, 0),
            (0, 80),
            (-1, 80),
            (9, 27),
            (4, 50),
            (-1, 0),
            (-3, 0),
        ]
    );
    assert!(inventory.validate().is_ok());
}

#[test]
fn long_run_settles() {
    let mut inventory = standard_inventory();
    advance(&mut inventory, 60);

    let items = inventory.into_items();
    // Brie saturates, everything perishable bottoms out, Sulfuras holds.
    assert_eq!(items[1].quality(), 50);
    for idx in [0, 2, 5, 6, 7, 8] {
        assert_eq!(items[idx].quality(), 0, "{}", items[idx]);
    }
    assert_eq!(items[3], Item::new("Sulfuras, Hand of Ragnaros", 0, 80));
}
