use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::model::BookCollection;

/// Soft-deletes the book with `id`. The record stays in the collection.
pub fn run(books: &mut BookCollection, id: i64) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(book) = books.find_mut(id) else {
        result.add_message(not_found(id));
        return result;
    };

    let original_name = book.name.clone();
    if !book.mark_deleted() {
        result.add_message(CmdMessage::warning("It has been already deleted."));
        return result;
    }

    tracing::debug!(id, name = %original_name, "book soft-deleted");
    result.add_message(CmdMessage::success(format!("{} is deleted.", original_name)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, list, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn marks_book_as_deleted() {
        let mut books = StoreFixture::new()
            .with_book(1, "Crime and Punishment", 30)
            .collection();

        let result = run(&mut books, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Crime and Punishment is deleted."
        );

        let book = books.find(1).unwrap();
        assert!(book.is_deleted);
        assert_eq!(book.stock_count, 0);
        assert_eq!(
            book.name,
            "Crime and Punishment (It has been removed from the list)"
        );
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn deleted_book_disappears_from_list() {
        let mut books = StoreFixture::new()
            .with_book(1, "A", 1)
            .with_book(2, "B", 1)
            .collection();

        run(&mut books, 1);
        assert_eq!(list::run(&books).listed_names(), vec!["B"]);
    }

    #[test]
    fn second_delete_changes_nothing() {
        let mut books = StoreFixture::new().with_book(1, "A", 9).collection();
        run(&mut books, 1);
        let after_first = books.clone();

        let result = run(&mut books, 1);
        assert_eq!(books, after_first);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "It has been already deleted.");
        assert_eq!(
            get::run(&books, 1).listed_names(),
            vec!["A (It has been removed from the list)"]
        );
    }

    #[test]
    fn reports_unknown_id() {
        let mut books = StoreFixture::new().with_book(1, "A", 1).collection();
        let before = books.clone();

        let result = run(&mut books, 42);
        assert_eq!(books, before);
        assert_eq!(result.messages[0].content, "No book found with ID 42.");
    }
}
