use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainResult, ValueObject};

use crate::category::Category;
use crate::rules::ItemState;

/// A shop item: a name plus the two attributes that age every day.
///
/// The name is fixed at construction and decides the item's [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left before the sell-by date. Negative once the date has passed.
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn category(&self) -> Category {
        Category::of(self)
    }

    pub fn state(&self) -> ItemState {
        ItemState {
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }

    /// Age this item by one day using its category's rule.
    pub fn advance_day(&mut self) -> Category {
        let category = self.category();
        self.apply(category);
        category
    }

    pub(crate) fn apply(&mut self, category: Category) {
        let next = category.rule()(self.state());
        self.sell_in = next.sell_in;
        self.quality = next.quality;
    }

    /// Check that quality sits within the category's range.
    ///
    /// The rule engine assumes this already holds and never calls it.
    pub fn validate(&self) -> DomainResult<()> {
        self.category()
            .quality_range()
            .check(&format!("quality of '{}'", self.name), self.quality)
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
