//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new one.
///
/// - **Value Object**: `Isbn("12421")` equals any other `Isbn("12421")`
/// - **Entity**: a `Loan` is the same loan as long as its `LoanId` matches
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Borrower(String);
///
/// impl ValueObject for Borrower {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
