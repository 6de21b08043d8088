//! Day-advance over an ordered collection of items.

use serde::{Deserialize, Serialize};
use tracing::debug;

use gilded_rose_core::DomainResult;

use crate::item::Item;

/// Age every item by one simulated day, in order, in place.
///
/// Never fails: quality is clamped by each category's rule. Items are assumed
/// to start within their category's quality range (see [`Item::validate`]).
pub fn advance_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = item.category();
        item.apply(category);
        debug!(
            item = item.name(),
            category = category.as_str(),
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item aged"
        );
    }
    debug!(items = items.len(), "day advanced");
}

/// A shop's stock plus the number of days simulated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    day: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Days advanced since construction.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn advance_day(&mut self) {
        advance_day(&mut self.items);
        self.day += 1;
        debug!(day = self.day, "inventory day counter advanced");
    }

    /// Fails on the first item whose quality is outside its category's range.
    pub fn validate(&self) -> DomainResult<()> {
        self.items.iter().try_for_each(Item::validate)
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
