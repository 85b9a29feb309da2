use serde::{Deserialize, Serialize};

/// Suffix appended to a book's name when it is soft-deleted.
pub const REMOVAL_MARKER: &str = " (It has been removed from the list)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "WriterID", alias = "id")]
    pub id: i64,
    #[serde(rename = "WriterName", alias = "name")]
    pub name: String,
}

/// One record of the store.
///
/// Field names on disk follow the historical `Books.json` layout; the
/// descriptive camelCase names are accepted as aliases when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "bookName", alias = "name")]
    pub name: String,
    #[serde(rename = "numOfPages", alias = "pageCount")]
    pub page_count: u32,
    #[serde(rename = "numOfBooksinStock", alias = "stockCount")]
    pub stock_count: u32,
    pub price: i64,
    #[serde(rename = "stockCode")]
    pub stock_code: String,
    #[serde(rename = "ISBN", alias = "isbn")]
    pub isbn: String,
    #[serde(rename = "Writer", alias = "author")]
    pub author: Author,
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
}

impl Book {
    /// Soft-deletes the record: the marker is appended to the name and the
    /// stock is zeroed. Returns false if the book was already deleted.
    pub fn mark_deleted(&mut self) -> bool {
        if self.is_deleted {
            return false;
        }
        self.name.push_str(REMOVAL_MARKER);
        self.stock_count = 0;
        self.is_deleted = true;
        true
    }
}

/// The full, ordered list of books held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Books that have not been soft-deleted, in store order.
    pub fn active(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|b| !b.is_deleted)
    }

    /// First book carrying `id`. Ids are unique, so the first match is the only one.
    pub fn find(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Ids that appear more than once, each reported once.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for book in &self.books {
            if !seen.insert(book.id) && !dupes.contains(&book.id) {
                dupes.push(book.id);
            }
        }
        dupes
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn into_inner(self) -> Vec<Book> {
        self.books
    }
}

impl From<Vec<Book>> for BookCollection {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}
