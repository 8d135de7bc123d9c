use serde::{Deserialize, Serialize};

use biblioteca_core::ValueObject;

/// Book identifier, kept exactly as supplied.
///
/// No checksum or format validation happens here; callers hand in ISBNs that
/// were already validated upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ISBN without ASCII whitespace and `-` group separators.
    ///
    /// Letters keep their case: `"pd-9"` normalizes to `"pd9"`, not `"PD9"`.
    pub fn normalized(&self) -> String {
        self.0
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && *c != '-')
            .collect()
    }

    /// Whether the normalized ISBN reads the same forwards and backwards.
    ///
    /// Comparison is case-sensitive. An ISBN that normalizes to nothing is
    /// trivially a palindrome.
    pub fn is_palindrome(&self) -> bool {
        let normalized = self.normalized();
        normalized.chars().eq(normalized.chars().rev())
    }
}

impl ValueObject for Isbn {}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
