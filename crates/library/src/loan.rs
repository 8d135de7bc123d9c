use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use biblioteca_core::{DomainError, DomainResult, Entity, LoanId};

use crate::book::Book;
use crate::isbn::Isbn;

/// An active loan: the book is out with `borrower` since `loan_date`.
///
/// `due_date` is `None` when the book does not qualify for the standard loan
/// term (see [`crate::LibrarianService::compute_due_date`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    book: Book,
    borrower: String,
    loan_date: NaiveDate,
    due_date: Option<NaiveDate>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        book: Book,
        borrower: impl Into<String>,
        loan_date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let borrower = borrower.into();
        if borrower.trim().is_empty() {
            return Err(DomainError::validation("borrower cannot be empty"));
        }

        if let Some(due) = due_date {
            if due < loan_date {
                return Err(DomainError::invariant(format!(
                    "due date {due} precedes loan date {loan_date}"
                )));
            }
        }

        Ok(Self {
            id,
            book,
            borrower,
            loan_date,
            due_date,
        })
    }

    pub fn id_typed(&self) -> LoanId {
        self.id
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn isbn(&self) -> &Isbn {
        self.book.isbn()
    }

    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    pub fn loan_date(&self) -> NaiveDate {
        self.loan_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

impl Entity for Loan {
    type Id = LoanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
