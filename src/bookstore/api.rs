//! # API Facade
//!
//! [`BookstoreApi`] is the single entry point for every bookstore operation.
//! It loads the collection from its [`BookStore`] once, turns raw argument
//! strings into typed ids and quantities, dispatches to `commands/*`, and
//! writes the collection back after the commands that can change it.
//!
//! `list`, `search` and `get` never write. `delete` and `buy` always write,
//! even when the outcome was "already deleted" or "insufficient stock".
//!
//! Like the command layer, the API does no terminal I/O.

use crate::commands::{self, CmdResult};
use crate::error::{BookstoreError, Result};
use crate::model::BookCollection;
use crate::store::BookStore;

pub struct BookstoreApi<S: BookStore> {
    store: S,
    books: BookCollection,
}

impl<S: BookStore> BookstoreApi<S> {
    /// Load the collection from `store`. Fails if the store cannot be read,
    /// so a broken file is never overwritten.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        Ok(Self { store, books })
    }

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.books)
    }

    /// Search by the words given on the command line, joined by single spaces.
    pub fn search<W: AsRef<str>>(&self, words: &[W]) -> CmdResult {
        let phrase = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        commands::search::run(&self.books, &phrase)
    }

    pub fn get(&self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        Ok(commands::get::run(&self.books, id))
    }

    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let result = commands::delete::run(&mut self.books, id);
        self.persist()?;
        Ok(result)
    }

    pub fn buy(&mut self, id: &str, quantity: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let quantity = parse_quantity(quantity)?;
        let result = commands::buy::run(&mut self.books, id, quantity);
        self.persist()?;
        Ok(result)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.books)?;
        tracing::info!(count = self.books.len(), "store updated");
        Ok(())
    }
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| BookstoreError::InvalidNumber {
            field: "book ID",
            value: raw.to_string(),
        })
}

fn parse_quantity(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| BookstoreError::InvalidNumber {
            field: "order quantity",
            value: raw.to_string(),
        })
}

pub use crate::commands::{BookView, CmdMessage, MessageLevel, ViewKind};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> BookstoreApi<InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_book(1, "Crime and Punishment", 30)
            .with_book(2, "Anna Karenina", 5);
        BookstoreApi::open(fixture.store).unwrap()
    }

    #[test]
    fn search_joins_words_with_single_spaces() {
        let api = api();
        let result = api.search(&["and", "PUNISHMENT"]);
        assert_eq!(result.listed_names(), vec!["Crime and Punishment"]);
    }

    #[test]
    fn reads_do_not_persist() {
        let api = api();
        api.list();
        api.search(&["anna"]);
        api.get("1").unwrap();
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn mutations_persist_the_whole_collection() {
        let mut api = api();
        api.buy("1", "29").unwrap();
        api.delete("2").unwrap();

        assert_eq!(api.store().save_count(), 2);
        let saved = api.store().books();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.find(1).unwrap().stock_count, 1);
        assert!(saved.find(2).unwrap().is_deleted);
    }

    #[test]
    fn domain_outcomes_still_persist() {
        let mut api = api();
        let result = api.buy("1", "30").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().books(), api.books());
    }

    #[test]
    fn bad_numbers_fail_before_mutation() {
        let mut api = api();

        let err = api.get("one").unwrap_err();
        assert!(matches!(
            err,
            BookstoreError::InvalidNumber { field: "book ID", .. }
        ));

        assert!(api.delete("1x").is_err());
        assert!(api.buy("1", "many").is_err());
        assert!(api.buy("1", "-3").is_err());

        assert_eq!(api.store().save_count(), 0);
        assert_eq!(api.books().find(1).unwrap().stock_count, 30);
        assert!(!api.books().find(1).unwrap().is_deleted);
    }

    #[test]
    fn open_propagates_load_errors() {
        struct Broken;
        impl BookStore for Broken {
            fn load(&self) -> Result<BookCollection> {
                Err(BookstoreError::load(
                    "Books.json",
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                ))
            }
            fn save(&mut self, _books: &BookCollection) -> Result<()> {
                panic!("must not save");
            }
        }

        assert!(BookstoreApi::open(Broken).is_err());
    }
}
