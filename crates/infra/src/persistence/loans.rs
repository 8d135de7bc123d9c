use std::collections::HashMap;
use std::sync::RwLock;

use biblioteca_core::{DomainError, DomainResult};
use biblioteca_library::{Isbn, Loan, LoanRepository};

/// In-memory active loans, at most one per ISBN.
#[derive(Debug)]
pub struct InMemoryLoanRepository {
    inner: RwLock<HashMap<Isbn, Loan>>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Close the active loan of `isbn`, making the book available again.
    pub fn return_book(&self, isbn: &Isbn) -> Option<Loan> {
        let mut map = self.inner.write().ok()?;
        let loan = map.remove(isbn);
        if loan.is_some() {
            tracing::info!(isbn = %isbn, "book returned");
        }
        loan
    }

    pub fn list(&self) -> Vec<Loan> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

impl Default for InMemoryLoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn find_active_loan_by_isbn(&self, isbn: &Isbn) -> Option<Loan> {
        let map = self.inner.read().ok()?;
        map.get(isbn).cloned()
    }

    fn add(&self, loan: Loan) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("loan repository lock poisoned"))?;

        if map.contains_key(loan.isbn()) {
            return Err(DomainError::conflict(format!(
                "book {} is already on loan",
                loan.isbn()
            )));
        }
        map.insert(loan.isbn().clone(), loan);
        Ok(())
    }
}
