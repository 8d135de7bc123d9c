//! Loan term calendar rules.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use biblioteca_core::{DomainError, DomainResult, ValueObject};

/// How long a standard loan lasts and which weekday the library is closed.
///
/// The due date is `term_days` calendar days after the request; when that day
/// is the closed weekday the book is due the following day instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanPolicy")]
pub struct LoanPolicy {
    term_days: u32,
    closed_weekday: Weekday,
}

/// Unchecked wire form; deserialization goes through [`LoanPolicy::new`].
#[derive(Deserialize)]
struct RawLoanPolicy {
    term_days: u32,
    closed_weekday: Weekday,
}

impl TryFrom<RawLoanPolicy> for LoanPolicy {
    type Error = DomainError;

    fn try_from(raw: RawLoanPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.term_days, raw.closed_weekday)
    }
}

impl LoanPolicy {
    pub const DEFAULT_TERM_DAYS: u32 = 17;
    pub const DEFAULT_CLOSED_WEEKDAY: Weekday = Weekday::Sun;

    pub fn new(term_days: u32, closed_weekday: Weekday) -> DomainResult<Self> {
        if term_days == 0 {
            return Err(DomainError::validation("loan term must be at least one day"));
        }
        Ok(Self {
            term_days,
            closed_weekday,
        })
    }

    pub fn term_days(&self) -> u32 {
        self.term_days
    }

    pub fn closed_weekday(&self) -> Weekday {
        self.closed_weekday
    }

    /// Due date for a loan requested on `request_date`.
    ///
    /// `None` only when the result would fall outside the representable
    /// calendar range.
    pub fn due_date(&self, request_date: NaiveDate) -> Option<NaiveDate> {
        let raw = request_date.checked_add_days(Days::new(u64::from(self.term_days)))?;
        if raw.weekday() == self.closed_weekday {
            raw.succ_opt()
        } else {
            Some(raw)
        }
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            term_days: Self::DEFAULT_TERM_DAYS,
            closed_weekday: Self::DEFAULT_CLOSED_WEEKDAY,
        }
    }
}

impl ValueObject for LoanPolicy {}
