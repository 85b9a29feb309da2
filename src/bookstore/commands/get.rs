use crate::commands::{not_found, BookView, CmdResult};
use crate::model::BookCollection;

/// Detail view of the book with `id`; a deleted book shows its name only.
pub fn run(books: &BookCollection, id: i64) -> CmdResult {
    match books.find(id) {
        Some(book) if book.is_deleted => {
            CmdResult::default().with_listed_books(vec![BookView::title(book)])
        }
        Some(book) => CmdResult::default().with_listed_books(vec![BookView::detail(book)]),
        None => CmdResult::default().with_message(not_found(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MessageLevel, ViewKind};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_detail_for_active_book() {
        let books = StoreFixture::new()
            .with_book(1, "Crime and Punishment", 30)
            .collection();

        let result = run(&books, 1);
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].kind, ViewKind::Detail);
        assert_eq!(result.listed_books[0].book.stock_count, 30);
    }

    #[test]
    fn shows_only_name_for_deleted_book() {
        let books = StoreFixture::new()
            .with_deleted_book(4, "The Idiot")
            .collection();

        let result = run(&books, 4);
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].kind, ViewKind::Title);
        assert_eq!(
            result.listed_names(),
            vec!["The Idiot (It has been removed from the list)"]
        );
    }

    #[test]
    fn reports_unknown_id() {
        let books = StoreFixture::new().with_book(1, "A", 1).collection();

        let result = run(&books, 2);
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "No book found with ID 2.");
    }
}
