//! Behaviour categories, assigned from an item's name.

use serde::{Deserialize, Serialize};

use gilded_rose_core::{QualityRange, ValueObject};

use crate::item::Item;
use crate::rules::{self, Rule};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED_PREFIX: &str = "Conjured";

/// How an item ages from one day to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    AgedBrie,
    BackstagePass,
    Legendary,
    Conjured,
}

impl Category {
    /// Classify a name. First match wins: the three exact names, then the
    /// `Conjured` prefix, then [`Category::Normal`].
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASS => Category::BackstagePass,
            SULFURAS => Category::Legendary,
            n if n.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn of(item: &Item) -> Self {
        Self::classify(item.name())
    }

    pub fn rule(self) -> Rule {
        match self {
            Category::Normal => rules::normal,
            Category::AgedBrie => rules::aged_brie,
            Category::BackstagePass => rules::backstage_pass,
            Category::Legendary => rules::legendary,
            Category::Conjured => rules::conjured,
        }
    }

    pub fn quality_range(self) -> QualityRange {
        match self {
            Category::Legendary => QualityRange::LEGENDARY,
            _ => QualityRange::STANDARD,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
