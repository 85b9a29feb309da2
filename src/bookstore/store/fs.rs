use super::BookStore;
use crate::error::{BookstoreError, Result};
use crate::model::BookCollection;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "Books.json";

/// JSON file store: the file holds one array of book objects.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<BookCollection> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| BookstoreError::load(&self.path, e))?;
        let books: BookCollection =
            serde_json::from_str(&content).map_err(|e| BookstoreError::load(&self.path, e))?;

        tracing::info!(path = %self.path.display(), count = books.len(), "loaded books");
        for id in books.duplicate_ids() {
            tracing::warn!(id, "book id appears more than once; only the first is addressable");
        }
        Ok(books)
    }

    fn save(&mut self, books: &BookCollection) -> Result<()> {
        let mut content = serde_json::to_string_pretty(books).map_err(BookstoreError::Serialization)?;
        content.push('\n');

        // Write next to the target and rename, so a failed write leaves the old file intact.
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(BookstoreError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(BookstoreError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_file_is_a_hidden_sibling() {
        let store = FileStore::new("/data/shop/Books.json");
        let tmp = store.tmp_path();
        assert_eq!(tmp.parent(), Some(Path::new("/data/shop")));
        let name = tmp.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(".Books.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let store = FileStore::new("/definitely/not/here/Books.json");
        let err = store.load().unwrap_err();
        assert!(matches!(err, BookstoreError::Load { .. }));
        assert!(err.to_string().contains("/definitely/not/here/Books.json"));
    }
}
