use std::fmt;

/// Domain-level sentinel for repository failures.
///
/// Codes are plain values: two errors produced by different repositories
/// match the same sentinel when they carry the same code. Only the codes
/// defined as associated constants are known; any other value renders as
/// `"unknown error"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// The requested book does not exist.
    pub const BOOK_NOT_FOUND: ErrorCode = ErrorCode(1);

    /// Build a code from its raw value. Unknown values are allowed.
    pub const fn from_u16(value: u16) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is one of the defined codes.
    pub fn is_known(self) -> bool {
        self.known_message().is_some()
    }

    /// Fixed human-readable message for this code.
    pub fn message(self) -> &'static str {
        self.known_message().unwrap_or("unknown error")
    }

    fn known_message(self) -> Option<&'static str> {
        match self {
            Self::BOOK_NOT_FOUND => Some("book not found"),
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCode({}: {})", self.0, self.message())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}
