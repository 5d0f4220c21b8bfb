//! JSON-file-backed book repository.
//!
//! The collection lives in a single pretty-printed JSON array. A missing
//! file is an empty collection; a malformed file is a load failure. Ids are
//! assigned on create as `max(existing) + 1`.

use anyhow::{bail, Context};
use std::fs;
use std::path::PathBuf;

use bookshelf_core::traits::BookRepository;
use bookshelf_core::types::{Book, BookDraft, BookId};

pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> anyhow::Result<Vec<Book>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed collection file {}", self.path.display()))
    }

    fn write_all(&self, books: &[Book]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pretty = serde_json::to_string_pretty(books)?;
        fs::write(&self.path, pretty)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl BookRepository for JsonBookRepository {
    fn list(&self) -> anyhow::Result<Vec<Book>> {
        self.read_all()
    }

    fn create(&self, draft: &BookDraft) -> anyhow::Result<BookId> {
        let mut books = self.read_all()?;
        let id = books.iter().filter_map(|b| b.id).max().unwrap_or(0) + 1;
        let mut book = draft.apply_to(&Book::default());
        book.id = Some(id);
        books.push(book);
        self.write_all(&books)?;
        Ok(id)
    }

    fn update(&self, id: BookId, draft: &BookDraft) -> anyhow::Result<()> {
        let mut books = self.read_all()?;
        let Some(existing) = books.iter_mut().find(|b| b.id == Some(id)) else {
            bail!("no book with id {}", id);
        };
        *existing = draft.apply_to(existing);
        self.write_all(&books)
    }

    fn delete(&self, id: BookId) -> anyhow::Result<()> {
        let mut books = self.read_all()?;
        let before = books.len();
        books.retain(|b| b.id != Some(id));
        if books.len() == before {
            bail!("no book with id {}", id);
        }
        self.write_all(&books)
    }
}
