//! Foundation types for Tome.
//!
//! This crate holds the entity records produced by the repository layer and
//! the helpers used to inspect error source chains. Every other Tome crate
//! depends on `tome-types`.
//!
//! # Key Types
//!
//! - [`Book`] — The reference entity, decoded from a JSON object
//! - [`chain`] — Walk and match `std::error::Error` source chains

pub mod book;
pub mod chain;

pub use book::Book;
pub use chain::{chain_contains, find_cause};
