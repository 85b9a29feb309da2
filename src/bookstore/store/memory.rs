use super::BookStore;
use crate::error::Result;
use crate::model::BookCollection;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: BookCollection,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<BookCollection> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &BookCollection) -> Result<()> {
        self.books = books.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Author, Book};

    /// A book with plausible defaults for everything but id, name and stock.
    pub fn book(id: i64, name: &str, stock_count: u32) -> Book {
        Book {
            id,
            name: name.to_string(),
            page_count: 300,
            stock_count,
            price: 45,
            stock_code: format!("SC-{}", id),
            isbn: format!("978000000{:04}", id),
            author: Author {
                id: 100 + id,
                name: format!("Author {}", id),
            },
            is_deleted: false,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, id: i64, name: &str, stock_count: u32) -> Self {
            let mut books = self.store.books.clone().into_inner();
            books.push(book(id, name, stock_count));
            self.store.books = books.into();
            self
        }

        pub fn with_deleted_book(mut self, id: i64, name: &str) -> Self {
            let mut deleted = book(id, name, 5);
            deleted.mark_deleted();
            let mut books = self.store.books.clone().into_inner();
            books.push(deleted);
            self.store.books = books.into();
            self
        }

        pub fn collection(&self) -> BookCollection {
            self.store.books.clone()
        }
    }
}
