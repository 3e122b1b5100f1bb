//! Byte-oriented storage for Tome.
//!
//! This crate defines the storage capability the repository layer is built
//! on: fetch raw bytes by identifier, failing with a distinguishable
//! [`StoreError::NotFound`] sentinel when the identifier is unknown. Every
//! other failure is opaque to callers beyond its message and source chain.
//!
//! # Storage Backends
//!
//! All backends implement the [`Fetcher`] trait:
//!
//! - [`InMemoryStore`] -- `HashMap`-based store for tests and embedding
//! - [`FsStore`] -- one file per identifier under a root directory
//!
//! # Design Rules
//!
//! 1. The store never interprets payload bytes -- it is a pure key-value store.
//! 2. "No such identifier" is always reported as `NotFound`, never as I/O.
//! 3. Key validation belongs to the backend that needs it.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{ConfigError, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use fs::FsStore;
pub use memory::InMemoryStore;
pub use traits::Fetcher;
