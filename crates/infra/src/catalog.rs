//! JSON catalog seeding.
//!
//! A catalog is a JSON array of books:
//!
//! ```json
//! [{ "isbn": "12421", "title": "...", "authors": ["..."], "publication_date": "1967-05-30" }]
//! ```

use std::path::Path;

use biblioteca_library::{Book, BookRepository};

use crate::error::{InfraError, InfraResult};

pub fn parse_catalog(json: &str) -> InfraResult<Vec<Book>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_catalog(path: &Path) -> InfraResult<Vec<Book>> {
    let json = std::fs::read_to_string(path).map_err(|source| InfraError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

/// Add every book of `books` to `repository`; stops at the first rejected book.
///
/// Returns how many books were added.
pub fn seed<R>(repository: &R, books: Vec<Book>) -> InfraResult<usize>
where
    R: BookRepository + ?Sized,
{
    let mut added = 0;
    for book in books {
        let isbn = book.isbn().clone();
        repository.add(book).inspect_err(|err| {
            tracing::warn!(isbn = %isbn, error = %err, "catalog entry rejected");
        })?;
        added += 1;
    }
    tracing::info!(books = added, "catalog seeded");
    Ok(added)
}
