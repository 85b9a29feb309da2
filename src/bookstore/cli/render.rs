use bookstore::api::{BookView, CmdMessage, MessageLevel, ViewKind};
use bookstore::model::Book;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_books(views: &[BookView], currency: &str) {
    if !views.is_empty() {
        println!("{}", render_books(views, currency));
    }
}

/// Plain-text rendering of the listed books, one title per line or a
/// detail block per book.
pub(super) fn render_books(views: &[BookView], currency: &str) -> String {
    views
        .iter()
        .map(|view| match view.kind {
            ViewKind::Title => view.book.name.clone(),
            ViewKind::Detail => render_detail(&view.book, currency),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detail(book: &Book, currency: &str) -> String {
    [
        format!("Book ID: {}", book.id),
        format!("Name: {}", book.name),
        format!("Pages: {}", book.page_count),
        format!("Number of books in stock: {}", book.stock_count),
        format!("Price: {} {}", book.price, currency),
        format!("Stock Code: {}", book.stock_code),
        format!("ISBN: {}", book.isbn),
        format!("Author ID: {}", book.author.id),
        format!("Author Name: {}", book.author.name),
    ]
    .join("\n")
}
