use std::fmt;

use serde::{Deserialize, Serialize};

/// A book record as persisted by a storage backend.
///
/// The wire form is a JSON object with `id`, `title` and `author` fields.
/// Fields missing from the payload decode to empty strings and unknown
/// fields are ignored, so older or richer payloads still decode. Keys are
/// matched exactly; besides the lowercase names only the capitalized
/// spellings written by Go-style encoders (`ID`, `Id`, `Title`, `Author`)
/// are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Storage lookup key.
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Author")]
    pub author: String,
}

impl Book {
    /// Create a book from its three fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.title.is_empty() && self.author.is_empty()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) by {}", self.title, self.id, self.author)
    }
}
