use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use biblioteca_core::Entity;

use crate::isbn::Isbn;

/// A catalogued book. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    authors: Vec<String>,
    publication_date: NaiveDate,
}

impl Book {
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        authors: Vec<String>,
        publication_date: NaiveDate,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            authors,
            publication_date,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}
