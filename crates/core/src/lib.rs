//! `gilded-rose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod quality;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use quality::{LEGENDARY_QUALITY, QualityRange};
pub use value_object::ValueObject;
