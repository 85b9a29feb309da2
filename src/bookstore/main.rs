//! `bookstore` binary. All of the CLI lives in `cli/`; this file only runs it
//! and turns an error into a message on stderr and exit code 1.

mod cli;

use bookstore::error::BookstoreError;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if matches!(e, BookstoreError::Usage(_)) {
            eprintln!("\n{}", cli::USAGE);
        }
        std::process::exit(1);
    }
}
