//! # Storage Layer
//!
//! The [`BookStore`] trait hides where the book list lives. Commands never see
//! it: the API loads a [`BookCollection`] once, hands it to a command, and
//! writes the whole collection back when the command could have changed it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding the array of books
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Concurrency
//!
//! There is no locking. Two invocations against the same file race, and the
//! last one to save wins with a full overwrite.

use crate::error::Result;
use crate::model::BookCollection;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Read the full collection.
    fn load(&self) -> Result<BookCollection>;

    /// Replace the stored collection with `books`.
    fn save(&mut self, books: &BookCollection) -> Result<()>;
}
