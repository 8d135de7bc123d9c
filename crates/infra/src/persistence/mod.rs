//! In-memory persistence for books and active loans.

pub mod books;
pub mod loans;
pub mod system;

pub use books::InMemoryBookRepository;
pub use loans::InMemoryLoanRepository;
pub use system::PersistenceSystem;
