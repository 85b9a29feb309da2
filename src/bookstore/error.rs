use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookstoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("The data cannot be read from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<BookstoreError>,
    },

    #[error("{field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookstoreError {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<BookstoreError>) -> Self {
        Self::Load {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookstoreError>;
