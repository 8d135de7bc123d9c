//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Books are identified by their ISBN, loans by a generated [`crate::LoanId`].
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
