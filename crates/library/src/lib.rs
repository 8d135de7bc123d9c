//! Library loans domain module.
//!
//! Books, loan records and the librarian's business rules (is a book out, is an
//! ISBN a palindrome, when is a loan due). Deterministic domain logic only; the
//! repositories are traits so storage stays in the infrastructure layer.

pub mod book;
pub mod isbn;
pub mod librarian;
pub mod loan;
pub mod policy;
pub mod repository;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use book::Book;
pub use isbn::Isbn;
pub use librarian::LibrarianService;
pub use loan::Loan;
pub use policy::LoanPolicy;
pub use repository::{BookRepository, LoanRepository};
