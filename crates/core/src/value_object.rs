//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two instances holding the same values are
//! interchangeable. In this workspace the product expiration date is one.

/// Marker trait for value objects.
///
/// Value objects are immutable. To "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Expiration(NaiveDate);
///
/// impl ValueObject for Expiration {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
