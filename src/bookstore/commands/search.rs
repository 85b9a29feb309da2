use crate::commands::{BookView, CmdMessage, CmdResult};
use crate::model::BookCollection;

/// Case-insensitive substring match of `phrase` against active book names.
pub fn run(books: &BookCollection, phrase: &str) -> CmdResult {
    let phrase_lower = phrase.to_lowercase();

    let listed: Vec<BookView> = books
        .active()
        .filter(|b| b.name.to_lowercase().contains(&phrase_lower))
        .map(BookView::title)
        .collect();

    tracing::debug!(phrase, matches = listed.len(), "search");

    if listed.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::warning("There is no such a book in the booklist."));
    }
    CmdResult::default().with_listed_books(listed)
}
