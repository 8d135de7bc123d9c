//! Configuration loading and representation.
//!
//! Settings come from environment variables with defaults for everything:
//!
//! - `BIBLIOTECA_LOAN_TERM_DAYS`: standard loan term in days (default 17)
//! - `BIBLIOTECA_CLOSED_WEEKDAY`: weekday a due date may not fall on (default `sunday`)
//! - `BIBLIOTECA_CATALOG_PATH`: optional JSON catalog loaded on start

use std::path::PathBuf;

use chrono::Weekday;

use biblioteca_library::LoanPolicy;

use crate::error::{InfraError, InfraResult};

pub const LOAN_TERM_DAYS_VAR: &str = "BIBLIOTECA_LOAN_TERM_DAYS";
pub const CLOSED_WEEKDAY_VAR: &str = "BIBLIOTECA_CLOSED_WEEKDAY";
pub const CATALOG_PATH_VAR: &str = "BIBLIOTECA_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub loan_term_days: u32,
    pub closed_weekday: Weekday,
    pub catalog_path: Option<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            loan_term_days: LoanPolicy::DEFAULT_TERM_DAYS,
            closed_weekday: LoanPolicy::DEFAULT_CLOSED_WEEKDAY,
            catalog_path: None,
        }
    }
}

impl LibraryConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> InfraResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> InfraResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = get(LOAN_TERM_DAYS_VAR) {
            let days: u32 = raw
                .parse()
                .map_err(|e| InfraError::config(LOAN_TERM_DAYS_VAR, format!("{raw:?}: {e}")))?;
            if days == 0 {
                return Err(InfraError::config(LOAN_TERM_DAYS_VAR, "must be at least 1"));
            }
            config.loan_term_days = days;
        }

        if let Some(raw) = get(CLOSED_WEEKDAY_VAR) {
            config.closed_weekday = raw
                .parse()
                .map_err(|_| InfraError::config(CLOSED_WEEKDAY_VAR, format!("unknown weekday {raw:?}")))?;
        }

        config.catalog_path = get(CATALOG_PATH_VAR).map(PathBuf::from);

        Ok(config)
    }

    pub fn loan_policy(&self) -> InfraResult<LoanPolicy> {
        Ok(LoanPolicy::new(self.loan_term_days, self.closed_weekday)?)
    }
}
