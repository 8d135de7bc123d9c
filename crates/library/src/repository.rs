//! Repository ports for the librarian's collaborators.
//!
//! "Nothing found" is `None`, never an error. Only writes can fail.

use std::sync::Arc;

use biblioteca_core::DomainResult;

use crate::book::Book;
use crate::isbn::Isbn;
use crate::loan::Loan;

/// Lookup of catalogued books.
pub trait BookRepository {
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<Book>;

    /// Catalogue a book. Fails with `Conflict` when the ISBN is already present.
    fn add(&self, book: Book) -> DomainResult<()>;
}

/// Lookup of loans that are currently active.
pub trait LoanRepository {
    fn find_active_loan_by_isbn(&self, isbn: &Isbn) -> Option<Loan>;

    /// Record a new active loan. Fails with `Conflict` when the book is already out.
    fn add(&self, loan: Loan) -> DomainResult<()>;
}

impl<S> BookRepository for Arc<S>
where
    S: BookRepository + ?Sized,
{
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<Book> {
        (**self).find_by_isbn(isbn)
    }

    fn add(&self, book: Book) -> DomainResult<()> {
        (**self).add(book)
    }
}

impl<S> BookRepository for &S
where
    S: BookRepository + ?Sized,
{
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<Book> {
        (**self).find_by_isbn(isbn)
    }

    fn add(&self, book: Book) -> DomainResult<()> {
        (**self).add(book)
    }
}

impl<S> LoanRepository for Arc<S>
where
    S: LoanRepository + ?Sized,
{
    fn find_active_loan_by_isbn(&self, isbn: &Isbn) -> Option<Loan> {
        (**self).find_active_loan_by_isbn(isbn)
    }

    fn add(&self, loan: Loan) -> DomainResult<()> {
        (**self).add(loan)
    }
}

impl<S> LoanRepository for &S
where
    S: LoanRepository + ?Sized,
{
    fn find_active_loan_by_isbn(&self, isbn: &Isbn) -> Option<Loan> {
        (**self).find_active_loan_by_isbn(isbn)
    }

    fn add(&self, loan: Loan) -> DomainResult<()> {
        (**self).add(loan)
    }
}
