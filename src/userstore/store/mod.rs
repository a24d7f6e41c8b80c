//! # Storage Layer
//!
//! The [`BackingStore`] trait is the only thing the command layer knows about
//! persistence. A backing store holds one opaque byte blob (the JSON-encoded
//! record set) and can hand it back, replace it, and be closed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Opens (creating if needed) a single file for read+write
//!   - Holds an advisory exclusive lock for as long as the handle lives
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts reads and writes so tests can assert a command never touched it
//!
//! ## Contract
//!
//! `overwrite` replaces the entire content; nothing from the previous content
//! may survive it. `read_all` always returns the complete current content, no
//! matter how many times it has been called on the same handle.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A byte container holding the encoded record set.
pub trait BackingStore {
    /// Return the full current content.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Truncate and write `content` as one logical step.
    fn overwrite(&mut self, content: &[u8]) -> Result<()>;

    /// Flush and release the handle.
    ///
    /// Dropping a store also releases it; `close` exists so callers can observe
    /// errors from the final flush.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
