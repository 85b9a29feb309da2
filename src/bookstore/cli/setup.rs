use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Printed to stderr after an invalid invocation.
pub const USAGE: &str = r#"Usage: 5 commands are valid, which are "list", "search", "get", "delete" and "buy".
Options:
	- "list" is used without any arguments.
	- "search" is used with one or more words to check if a book is available.
	- "get" is used with an argument specifying the book ID.
	- "delete" is used with an argument specifying the book ID.
	- "buy" is used with two arguments specifying the book ID and the number of books ordered."#;

#[derive(Parser, Debug)]
#[command(
    name = "bookstore",
    bin_name = "bookstore",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inventory tool for a bookstore's book list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Book list file (defaults to the configured file, then ./Books.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List every book that has not been deleted
    List,

    /// Search book names, case-insensitively
    Search {
        /// Words of the name to look for (put a word starting with `-` after `--`)
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        words: Vec<String>,
    },

    /// Show the details of a book
    Get {
        /// Book ID
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Remove a book from the list (it stays in the file, marked as deleted)
    Delete {
        /// Book ID
        #[arg(allow_negative_numbers = true)]
        id: String,
    },

    /// Buy copies of a book, reducing its stock
    Buy {
        /// Book ID
        #[arg(allow_negative_numbers = true)]
        id: String,

        /// Number of books ordered
        #[arg(allow_negative_numbers = true)]
        count: String,
    },
}
