//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts with the same cents are the same amount, while two products with
/// the same fields are still distinct entities. To "modify" a value object,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy,
/// - **PartialEq**: values compare by their attributes,
/// - **Debug**: values show up in logs and test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
