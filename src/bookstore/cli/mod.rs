//! # CLI Layer
//!
//! The only place that knows about stdout, stderr, and exit codes.
//!
//! - `setup.rs`: clap definitions and the usage text
//! - `render.rs`: turns a `CmdResult` into terminal output
//!
//! `run()` parses the arguments, resolves the config and store path, opens the
//! API, dispatches the one requested command, and prints the result. Messages
//! are printed before the books they refer to.
//!
//! Argument-shape errors come back as `BookstoreError::Usage`; `main` prints
//! them with the usage text and exits 1. Domain outcomes ("insufficient
//! stock", "already deleted") are ordinary output and exit 0.

mod render;
mod setup;

pub use setup::USAGE;

use bookstore::api::BookstoreApi;
use bookstore::commands::CmdResult;
use bookstore::config::{default_config_path, BookstoreConfig};
use bookstore::error::{BookstoreError, Result};
use bookstore::store::fs::FileStore;
use clap::error::ErrorKind;
use clap::Parser;
use render::{print_books, print_messages};
use setup::{Cli, Commands};
use std::io::IsTerminal;
use std::path::Path;

const NO_ARGUMENTS: &str = "You did not write any arguments to check the list of books.";

pub fn run() -> Result<()> {
    let cli = parse_cli()?;
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        print_messages(&[bookstore::api::CmdMessage::info(NO_ARGUMENTS)]);
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let store_path = config.resolve_store_path(cli.store.as_deref());
    tracing::debug!(store = %store_path.display(), ?command, "dispatching");

    let mut api = BookstoreApi::open(FileStore::new(store_path))?;
    let result = match command {
        Commands::List => api.list(),
        Commands::Search { words } => api.search(&words),
        Commands::Get { id } => api.get(&id)?,
        Commands::Delete { id } => api.delete(&id)?,
        Commands::Buy { id, count } => api.buy(&id, &count)?,
    };

    print_result(&result, &config);
    Ok(())
}

fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(BookstoreError::Usage(usage_message(&e))),
    }
}

fn usage_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let detail = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    format!("It is not used properly: {}", detail)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<BookstoreConfig> {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => BookstoreConfig::load(path),
        None => Ok(BookstoreConfig::default()),
    }
}

fn print_result(result: &CmdResult, config: &BookstoreConfig) {
    print_messages(&result.messages);
    print_books(&result.listed_books, &config.currency);
}
