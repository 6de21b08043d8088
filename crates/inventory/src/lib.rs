//! Shop inventory with per-day quality aging.
//!
//! This crate contains the day-advance rule engine, implemented purely as
//! deterministic domain logic (no IO, no storage). Callers own the item
//! collection and invoke [`advance_day`] once per simulated day.

pub mod category;
pub mod fixtures;
pub mod item;
pub mod rules;
pub mod shop;

pub use category::Category;
pub use item::Item;
pub use rules::{ItemState, Rule};
pub use shop::{Inventory, advance_day};
