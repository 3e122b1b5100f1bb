use serde::de::DeserializeOwned;
use tome_types::Book;

use crate::code::ErrorCode;

/// A record a [`Repository`](crate::Repository) can produce.
///
/// The payload stored for an entity is its JSON encoding. `KIND` names the
/// entity in error messages and `NOT_FOUND` is the sentinel attached when
/// storage reports a missing identifier.
pub trait Entity: DeserializeOwned {
    const KIND: &'static str;
    const NOT_FOUND: ErrorCode;
}

impl Entity for Book {
    const KIND: &'static str = "book";
    const NOT_FOUND: ErrorCode = ErrorCode::BOOK_NOT_FOUND;
}
