use crate::commands::{BookView, CmdResult};
use crate::model::BookCollection;

pub fn run(books: &BookCollection) -> CmdResult {
    let listed = books.active().map(BookView::title).collect();
    CmdResult::default().with_listed_books(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ViewKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_active_books_in_order() {
        let books = StoreFixture::new()
            .with_book(1, "Crime and Punishment", 30)
            .with_deleted_book(2, "The Idiot")
            .with_book(3, "Anna Karenina", 4)
            .collection();

        let result = run(&books);
        assert_eq!(
            result.listed_names(),
            vec!["Crime and Punishment", "Anna Karenina"]
        );
        assert!(result
            .listed_books
            .iter()
            .all(|v| v.kind == ViewKind::Title));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn line_count_matches_active_count() {
        let books = StoreFixture::new()
            .with_deleted_book(1, "A")
            .with_deleted_book(2, "B")
            .with_book(3, "C", 1)
            .collection();

        let result = run(&books);
        assert_eq!(result.listed_books.len(), books.active().count());
        assert_eq!(result.listed_books.len(), 1);
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let result = run(&BookCollection::default());
        assert!(result.listed_books.is_empty());
    }
}
