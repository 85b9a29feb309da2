use crate::commands::{BookView, CmdMessage, CmdResult};
use crate::model::BookCollection;

/// Sells `quantity` copies of the book with `id`.
///
/// The order must be strictly smaller than the stock: buying the last copies
/// is refused, so a book never sells out through this path. Whether or not
/// the sale goes through, the detail view of the book is returned.
pub fn run(books: &mut BookCollection, id: i64, quantity: u32) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(book) = books.find_mut(id) else {
        result.add_message(CmdMessage::error("The book ID is wrong."));
        return result;
    };

    if book.is_deleted {
        result.add_message(CmdMessage::warning(
            "The book has been deleted from the list.",
        ));
        return result;
    }

    if quantity < book.stock_count {
        book.stock_count -= quantity;
        tracing::debug!(id, quantity, remaining = book.stock_count, "sale recorded");
        result.add_message(CmdMessage::success(format!(
            "Sold {} copies of {}.",
            quantity, book.name
        )));
    } else {
        tracing::debug!(id, quantity, stock = book.stock_count, "sale refused");
        result.add_message(CmdMessage::warning(
            "There is no sufficient amount of book!!!",
        ));
    }

    result.listed_books.push(BookView::detail(book));
    result
}
