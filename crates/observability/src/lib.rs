//! Log output for the `gilded-rose` binary.
//!
//! The inventory crates only emit `tracing` events (one per aged item, one per
//! simulated day). Nothing is printed until a binary installs a subscriber
//! through [`init`]; library code and tests never call it.

pub mod tracing;

pub use self::tracing::DEFAULT_FILTER;

/// Install the JSON stderr subscriber, filtered by `RUST_LOG`.
///
/// Repeated calls are no-ops.
pub fn init() {
    self::tracing::init();
}
