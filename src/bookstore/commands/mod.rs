//! # Command Layer
//!
//! One module per command. Each `run` takes the loaded `BookCollection`
//! (shared for reads, exclusive for `delete` and `buy`) and returns a
//! [`CmdResult`] describing what to show. Nothing here touches the store or
//! the terminal.
//!
//! Outcomes such as "not found" or "insufficient stock" are not errors: they
//! come back as [`CmdMessage`]s and the command still succeeds.

use crate::model::Book;

pub mod buy;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// How much of a book to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Title,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub book: Book,
    pub kind: ViewKind,
}

impl BookView {
    pub fn title(book: &Book) -> Self {
        Self {
            book: book.clone(),
            kind: ViewKind::Title,
        }
    }

    pub fn detail(book: &Book) -> Self {
        Self {
            book: book.clone(),
            kind: ViewKind::Detail,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<BookView>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_books(mut self, books: Vec<BookView>) -> Self {
        self.listed_books = books;
        self
    }

    /// Names of the listed books, in order.
    pub fn listed_names(&self) -> Vec<&str> {
        self.listed_books
            .iter()
            .map(|v| v.book.name.as_str())
            .collect()
    }
}

pub(crate) fn not_found(id: i64) -> CmdMessage {
    CmdMessage::warning(format!("No book found with ID {}.", id))
}

