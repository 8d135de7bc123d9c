//! Infrastructure layer: in-memory persistence, configuration, catalog loading.

pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;

pub use config::LibraryConfig;
pub use error::{InfraError, InfraResult};
pub use persistence::{InMemoryBookRepository, InMemoryLoanRepository, PersistenceSystem};
