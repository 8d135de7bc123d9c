//! Test data builders (enabled with the `test-support` feature).

use chrono::NaiveDate;

use biblioteca_core::{DomainResult, LoanId};

use crate::book::Book;
use crate::isbn::Isbn;
use crate::loan::Loan;

/// Builds a [`Book`] with sensible defaults; override only what a test cares about.
#[derive(Debug, Clone)]
pub struct BookTestDataBuilder {
    isbn: Isbn,
    title: String,
    authors: Vec<String>,
    publication_date: NaiveDate,
}

impl BookTestDataBuilder {
    pub const DEFAULT_ISBN: &'static str = "1234";

    pub fn new() -> Self {
        Self {
            isbn: Isbn::from(Self::DEFAULT_ISBN),
            title: "Cien años de soledad".to_string(),
            authors: vec!["Gabriel García Márquez".to_string()],
            publication_date: NaiveDate::from_ymd_opt(1967, 5, 30).unwrap_or_default(),
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<Isbn>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_publication_date(mut self, publication_date: NaiveDate) -> Self {
        self.publication_date = publication_date;
        self
    }

    pub fn build(self) -> Book {
        Book::new(self.isbn, self.title, self.authors, self.publication_date)
    }
}

impl Default for BookTestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Loan`] of a default book to a default borrower.
#[derive(Debug, Clone)]
pub struct LoanTestDataBuilder {
    id: LoanId,
    book: Book,
    borrower: String,
    loan_date: NaiveDate,
    due_date: Option<NaiveDate>,
}

impl LoanTestDataBuilder {
    pub fn new() -> Self {
        Self {
            id: LoanId::new(),
            book: BookTestDataBuilder::new().build(),
            borrower: "Ana".to_string(),
            loan_date: NaiveDate::from_ymd_opt(2020, 4, 3).unwrap_or_default(),
            due_date: None,
        }
    }

    pub fn with_book(mut self, book: Book) -> Self {
        self.book = book;
        self
    }

    pub fn with_borrower(mut self, borrower: impl Into<String>) -> Self {
        self.borrower = borrower.into();
        self
    }

    pub fn with_loan_date(mut self, loan_date: NaiveDate) -> Self {
        self.loan_date = loan_date;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn build(self) -> DomainResult<Loan> {
        Loan::new(
            self.id,
            self.book,
            self.borrower,
            self.loan_date,
            self.due_date,
        )
    }
}

impl Default for LoanTestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}
