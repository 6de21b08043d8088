//! Quality bounds shared by every item category.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Quality pinned on legendary items. It is never clamped or validated against
/// the standard range.
pub const LEGENDARY_QUALITY: i64 = 80;

/// Closed integer range `[min, max]` a quality value must stay within.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualityRange {
    min: i64,
    max: i64,
}

impl QualityRange {
    /// `[0, 50]`, the range for every non-legendary item.
    pub const STANDARD: QualityRange = QualityRange { min: 0, max: 50 };

    /// Single-value range for legendary items.
    pub const LEGENDARY: QualityRange = QualityRange {
        min: LEGENDARY_QUALITY,
        max: LEGENDARY_QUALITY,
    };

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn contains(&self, quality: i64) -> bool {
        quality >= self.min && quality <= self.max
    }

    /// Saturate `quality` into the range.
    pub fn clamp(&self, quality: i64) -> i64 {
        quality.clamp(self.min, self.max)
    }

    /// Add `delta` (either sign) and saturate. Never overflows.
    pub fn adjust(&self, quality: i64, delta: i64) -> i64 {
        self.clamp(quality.saturating_add(delta))
    }

    pub fn check(&self, field: &str, quality: i64) -> DomainResult<()> {
        if self.contains(quality) {
            Ok(())
        } else {
            Err(DomainError::out_of_range(field, quality, self.min, self.max))
        }
    }
}

impl ValueObject for QualityRange {}
