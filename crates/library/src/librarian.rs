//! The librarian service: the only component with loan decision logic.

use chrono::NaiveDate;

use biblioteca_core::{DomainError, DomainResult, LoanId};

use crate::book::Book;
use crate::isbn::Isbn;
use crate::loan::Loan;
use crate::policy::LoanPolicy;
use crate::repository::{BookRepository, LoanRepository};

/// Answers loan questions over a book catalogue and the active loans.
///
/// Both collaborators are injected, so tests can hand in stubs and production
/// code can share repositories through `Arc` or `&`.
#[derive(Debug, Clone)]
pub struct LibrarianService<B, L> {
    books: B,
    loans: L,
    policy: LoanPolicy,
}

impl<B, L> LibrarianService<B, L>
where
    B: BookRepository,
    L: LoanRepository,
{
    pub fn new(books: B, loans: L) -> Self {
        Self::with_policy(books, loans, LoanPolicy::default())
    }

    pub fn with_policy(books: B, loans: L, policy: LoanPolicy) -> Self {
        Self {
            books,
            loans,
            policy,
        }
    }

    pub fn policy(&self) -> LoanPolicy {
        self.policy
    }

    /// Whether the book currently has an active loan.
    pub fn is_loaned(&self, isbn: &Isbn) -> bool {
        let loaned = self.loans.find_active_loan_by_isbn(isbn).is_some();
        tracing::debug!(isbn = %isbn, loaned, "checked loan status");
        loaned
    }

    pub fn is_palindrome(&self, isbn: &Isbn) -> bool {
        isbn.is_palindrome()
    }

    /// Due date for a loan of `isbn` requested on `request_date`.
    ///
    /// Only palindrome ISBNs get the standard term; any other ISBN yields
    /// `None`.
    pub fn compute_due_date(&self, request_date: NaiveDate, isbn: &Isbn) -> Option<NaiveDate> {
        if !self.is_palindrome(isbn) {
            tracing::debug!(isbn = %isbn, "not eligible for the standard loan term");
            return None;
        }

        let due = self.policy.due_date(request_date);
        if due.is_none() {
            tracing::warn!(isbn = %isbn, %request_date, "due date out of calendar range");
        }
        due
    }

    pub fn find_book(&self, isbn: &Isbn) -> Option<Book> {
        self.books.find_by_isbn(isbn)
    }

    /// Lend a catalogued book to `borrower`.
    ///
    /// Fails with `NotFound` for an unknown ISBN, `Conflict` when the book is
    /// already out, `Validation` for a blank borrower and `InvariantViolation`
    /// when an eligible book's due date falls outside the calendar.
    pub fn lend(
        &self,
        isbn: &Isbn,
        borrower: &str,
        request_date: NaiveDate,
    ) -> DomainResult<Loan> {
        let book = self
            .books
            .find_by_isbn(isbn)
            .ok_or_else(|| DomainError::not_found(format!("book {isbn}")))?;

        if self.is_loaned(isbn) {
            return Err(DomainError::conflict(format!("book {isbn} is already on loan")));
        }

        let due_date = self.compute_due_date(request_date, isbn);
        if due_date.is_none() && self.is_palindrome(isbn) {
            return Err(DomainError::invariant(format!(
                "no due date representable for book {isbn} requested on {request_date}"
            )));
        }
        let loan = Loan::new(LoanId::new(), book, borrower, request_date, due_date)?;
        self.loans.add(loan.clone())?;

        tracing::info!(
            isbn = %isbn,
            loan_id = %loan.id_typed(),
            due_date = ?loan.due_date(),
            "book lent"
        );
        Ok(loan)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::testing::{BookTestDataBuilder, LoanTestDataBuilder};

    const ISBN_12421: &str = "12421";
    const ISBN_PD9999: &str = "PD9999";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Default)]
    struct StubBooks {
        books: RefCell<HashMap<Isbn, Book>>,
    }

    impl StubBooks {
        fn with(books: impl IntoIterator<Item = Book>) -> Self {
            let stub = Self::default();
            for book in books {
                stub.books.borrow_mut().insert(book.isbn().clone(), book);
            }
            stub
        }
    }

    impl BookRepository for StubBooks {
        fn find_by_isbn(&self, isbn: &Isbn) -> Option<Book> {
            self.books.borrow().get(isbn).cloned()
        }

        fn add(&self, book: Book) -> DomainResult<()> {
            self.books.borrow_mut().insert(book.isbn().clone(), book);
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubLoans {
        loans: RefCell<HashMap<Isbn, Loan>>,
    }

    impl StubLoans {
        fn with(loan: Loan) -> Self {
            let stub = Self::default();
            stub.loans.borrow_mut().insert(loan.isbn().clone(), loan);
            stub
        }
    }

    impl LoanRepository for StubLoans {
        fn find_active_loan_by_isbn(&self, isbn: &Isbn) -> Option<Loan> {
            self.loans.borrow().get(isbn).cloned()
        }

        fn add(&self, loan: Loan) -> DomainResult<()> {
            self.loans.borrow_mut().insert(loan.isbn().clone(), loan);
            Ok(())
        }
    }

    fn service() -> LibrarianService<StubBooks, StubLoans> {
        LibrarianService::new(StubBooks::default(), StubLoans::default())
    }

    #[test]
    fn book_with_active_loan_is_loaned() {
        let book = BookTestDataBuilder::new().build();
        let loan = LoanTestDataBuilder::new().with_book(book.clone()).build().unwrap();
        let service = LibrarianService::new(StubBooks::default(), StubLoans::with(loan));

        assert!(service.is_loaned(book.isbn()));
    }

    #[test]
    fn book_without_loan_is_not_loaned() {
        let book = BookTestDataBuilder::new().build();
        assert!(!service().is_loaned(book.isbn()));
    }

    #[test]
    fn palindrome_isbn_is_recognised() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_12421).build();
        assert!(service().is_palindrome(book.isbn()));
    }

    #[test]
    fn non_palindrome_isbn_is_rejected() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_PD9999).build();
        assert!(!service().is_palindrome(book.isbn()));
    }

    #[test]
    fn due_date_is_computed_for_palindrome() {
        let isbn = Isbn::from(ISBN_12421);
        let today = chrono::Local::now().date_naive();
        assert!(service().compute_due_date(today, &isbn).is_some());
    }

    #[test]
    fn no_due_date_for_non_palindrome() {
        let isbn = Isbn::from(ISBN_PD9999);
        let today = chrono::Local::now().date_naive();
        assert_eq!(service().compute_due_date(today, &isbn), None);
    }

    #[test]
    fn request_on_day_three_is_due_on_day_twenty() {
        let isbn = Isbn::from(ISBN_12421);
        let due = service().compute_due_date(date(2020, 4, 3), &isbn);
        assert_eq!(due, Some(date(2020, 4, 20)));
    }

    #[test]
    fn request_on_day_five_is_due_on_day_twenty_two() {
        let isbn = Isbn::from(ISBN_12421);
        let due = service().compute_due_date(date(2020, 4, 5), &isbn);
        assert_eq!(due, Some(date(2020, 4, 22)));
    }

    #[test]
    fn due_date_landing_on_sunday_moves_forward() {
        let isbn = Isbn::from(ISBN_12421);
        let due = service().compute_due_date(date(2020, 4, 2), &isbn);
        assert_eq!(due, Some(date(2020, 4, 20)));
    }

    #[test]
    fn custom_policy_changes_the_term() {
        let policy = LoanPolicy::new(15, chrono::Weekday::Sun).unwrap();
        let service = LibrarianService::with_policy(StubBooks::default(), StubLoans::default(), policy);

        // 2020-04-03 + 15 days = Saturday 2020-04-18.
        let due = service.compute_due_date(date(2020, 4, 3), &Isbn::from(ISBN_12421));
        assert_eq!(due, Some(date(2020, 4, 18)));
    }

    #[test]
    fn lend_records_loan_with_due_date() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_12421).build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        let loan = service.lend(book.isbn(), "Ana", date(2020, 4, 3)).unwrap();

        assert_eq!(loan.book(), &book);
        assert_eq!(loan.borrower(), "Ana");
        assert_eq!(loan.loan_date(), date(2020, 4, 3));
        assert_eq!(loan.due_date(), Some(date(2020, 4, 20)));
        assert!(service.is_loaned(book.isbn()));
    }

    #[test]
    fn lend_non_palindrome_has_no_due_date() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_PD9999).build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        let loan = service.lend(book.isbn(), "Ana", date(2020, 4, 3)).unwrap();
        assert_eq!(loan.due_date(), None);
    }

    #[test]
    fn lend_rejects_unknown_book() {
        let err = service()
            .lend(&Isbn::from(ISBN_12421), "Ana", date(2020, 4, 3))
            .unwrap_err();
        match err {
            DomainError::NotFound(_) => {}
            _ => panic!("Expected NotFound error for unknown book"),
        }
    }

    #[test]
    fn lend_rejects_book_already_on_loan() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_12421).build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        service.lend(book.isbn(), "Ana", date(2020, 4, 3)).unwrap();
        let err = service.lend(book.isbn(), "Luis", date(2020, 4, 4)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for book already on loan"),
        }
    }

    #[test]
    fn lend_rejects_blank_borrower() {
        let book = BookTestDataBuilder::new().build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        let err = service.lend(book.isbn(), " ", date(2020, 4, 3)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank borrower"),
        }
        assert!(!service.is_loaned(book.isbn()));
    }

    #[test]
    fn lend_rejects_due_date_out_of_calendar_range() {
        let book = BookTestDataBuilder::new().with_isbn(ISBN_12421).build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        let err = service.lend(book.isbn(), "Ana", NaiveDate::MAX).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for out-of-range due date"),
        }
        assert!(!service.is_loaned(book.isbn()));
    }

    #[test]
    fn find_book_delegates_to_repository() {
        let book = BookTestDataBuilder::new().build();
        let service = LibrarianService::new(StubBooks::with([book.clone()]), StubLoans::default());

        assert_eq!(service.find_book(book.isbn()), Some(book));
        assert_eq!(service.find_book(&Isbn::from("0000")), None);
    }

    #[test]
    fn repositories_can_be_borrowed() {
        let books = StubBooks::default();
        let loans = StubLoans::default();
        let service = LibrarianService::new(&books, &loans);

        assert!(!service.is_loaned(&Isbn::from(ISBN_12421)));
    }
}
