//! Persistence lifecycle: owns the repositories and hands out shared handles.

use std::sync::Arc;

use biblioteca_library::LibrarianService;

use crate::catalog;
use crate::config::LibraryConfig;
use crate::error::{InfraError, InfraResult};

use super::{InMemoryBookRepository, InMemoryLoanRepository};

/// Librarian service wired to the in-memory repositories.
pub type InMemoryLibrarian =
    LibrarianService<Arc<InMemoryBookRepository>, Arc<InMemoryLoanRepository>>;

/// Owns the book and loan repositories for the lifetime of the process.
///
/// Repository handles are only available between [`start`](Self::start) and
/// [`stop`](Self::stop); stopping drops all stored books and loans.
#[derive(Debug)]
pub struct PersistenceSystem {
    config: LibraryConfig,
    books: Arc<InMemoryBookRepository>,
    loans: Arc<InMemoryLoanRepository>,
    started: bool,
}

impl PersistenceSystem {
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            books: Arc::new(InMemoryBookRepository::new()),
            loans: Arc::new(InMemoryLoanRepository::new()),
            started: false,
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Open the repositories, seeding the catalog when one is configured.
    ///
    /// Starting an already started system is a no-op.
    pub fn start(&mut self) -> InfraResult<()> {
        if self.started {
            tracing::debug!("persistence system already started");
            return Ok(());
        }

        // Reject a bad loan policy before any state is touched.
        self.config.loan_policy()?;

        // Every run gets its own repositories; handles from a previous run stay detached.
        let books = Arc::new(InMemoryBookRepository::new());
        if let Some(path) = &self.config.catalog_path {
            catalog::seed(books.as_ref(), catalog::load_catalog(path)?)?;
        }

        self.books = books;
        self.loans = Arc::new(InMemoryLoanRepository::new());
        self.started = true;
        tracing::info!(books = self.books.len(), "persistence system started");
        Ok(())
    }

    /// Drop all stored books and loans and detach every handed-out handle.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.books.clear();
        self.loans.clear();
        self.books = Arc::new(InMemoryBookRepository::new());
        self.loans = Arc::new(InMemoryLoanRepository::new());
        self.started = false;
        tracing::info!("persistence system stopped");
    }

    pub fn book_repository(&self) -> InfraResult<Arc<InMemoryBookRepository>> {
        self.ensure_started()?;
        Ok(Arc::clone(&self.books))
    }

    pub fn loan_repository(&self) -> InfraResult<Arc<InMemoryLoanRepository>> {
        self.ensure_started()?;
        Ok(Arc::clone(&self.loans))
    }

    /// A librarian over the shared repositories using the configured loan policy.
    pub fn librarian(&self) -> InfraResult<InMemoryLibrarian> {
        self.ensure_started()?;
        Ok(LibrarianService::with_policy(
            Arc::clone(&self.books),
            Arc::clone(&self.loans),
            self.config.loan_policy()?,
        ))
    }

    /// Seed books from a JSON catalog document into the running system.
    pub fn seed_catalog_from_str(&self, json: &str) -> InfraResult<usize> {
        self.ensure_started()?;
        catalog::seed(self.books.as_ref(), catalog::parse_catalog(json)?)
    }

    fn ensure_started(&self) -> InfraResult<()> {
        if self.started {
            Ok(())
        } else {
            Err(InfraError::NotStarted)
        }
    }
}

impl Default for PersistenceSystem {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}

impl Drop for PersistenceSystem {
    fn drop(&mut self) {
        self.stop();
    }
}
