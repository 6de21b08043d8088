//! Value object trait: equality by value, not identity.
//!
//! Shop items carry no identifier. Two items with the same name, sell-in and
//! quality are interchangeable, so they are modelled as value objects.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values. Mutation happens only
/// through the day-advance rules, which replace the numeric attributes wholesale.
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, test failures)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item {
///     name: String,
///     sell_in: i64,
///     quality: i64,
/// }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
