//! Per-category day-advance rules.
//!
//! Each rule is a pure function from today's state to tomorrow's:
//! 1. adjust quality using today's `sell_in`;
//! 2. decrement `sell_in` (legendary items skip this);
//! 3. if the new `sell_in` is negative, apply the post-sell-date adjustment.
//!
//! Quality is clamped to [`QualityRange::STANDARD`] after every adjustment.

use serde::{Deserialize, Serialize};

use gilded_rose_core::QualityRange;

/// The two attributes that change from day to day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemState {
    pub sell_in: i64,
    pub quality: i64,
}

impl ItemState {
    pub const fn new(sell_in: i64, quality: i64) -> Self {
        Self { sell_in, quality }
    }

    pub const fn past_sell_date(&self) -> bool {
        self.sell_in < 0
    }

    fn adjust_quality(self, delta: i64) -> Self {
        Self {
            quality: QualityRange::STANDARD.adjust(self.quality, delta),
            ..self
        }
    }

    fn next_day(self) -> Self {
        Self {
            sell_in: self.sell_in.saturating_sub(1),
            ..self
        }
    }
}

/// Strategy signature shared by every category.
pub type Rule = fn(ItemState) -> ItemState;

/// Apply `delta` once, move to the next day, then apply it again if the sell
/// date has passed.
fn age_by(state: ItemState, delta: i64) -> ItemState {
    let next = state.adjust_quality(delta).next_day();
    if next.past_sell_date() {
        next.adjust_quality(delta)
    } else {
        next
    }
}

/// Loses 1 per day, 2 per day after the sell date.
pub fn normal(state: ItemState) -> ItemState {
    age_by(state, -1)
}

/// Degrades twice as fast as a normal item.
pub fn conjured(state: ItemState) -> ItemState {
    age_by(state, -2)
}

/// Gains 1 per day, 2 per day after the sell date.
pub fn aged_brie(state: ItemState) -> ItemState {
    age_by(state, 1)
}

/// Gains 1, 2 or 3 depending on days left, then drops to 0 after the concert.
pub fn backstage_pass(state: ItemState) -> ItemState {
    let increment = match state.sell_in {
        s if s < 6 => 3,
        s if s < 11 => 2,
        _ => 1,
    };
    let next = state.adjust_quality(increment).next_day();
    if next.past_sell_date() {
        ItemState { quality: 0, ..next }
    } else {
        next
    }
}

/// Never sold, never degrades.
pub fn legendary(state: ItemState) -> ItemState {
    state
}
