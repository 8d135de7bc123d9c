use std::collections::HashMap;
use std::sync::RwLock;

use biblioteca_core::{DomainError, DomainResult};
use biblioteca_library::{Book, BookRepository, Isbn};

/// In-memory book catalogue keyed by ISBN.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    inner: RwLock<HashMap<Isbn, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<Book> {
        let map = self.inner.read().ok()?;
        map.get(isbn).cloned()
    }

    fn add(&self, book: Book) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("book repository lock poisoned"))?;

        if map.contains_key(book.isbn()) {
            return Err(DomainError::conflict(format!(
                "book {} already catalogued",
                book.isbn()
            )));
        }
        map.insert(book.isbn().clone(), book);
        Ok(())
    }
}
