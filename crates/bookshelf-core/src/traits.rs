use crate::types::{Book, BookDraft, BookId};

/// The remote book collection. Any transport failure or non-success status is
/// a uniform failure; callers never interpret status codes beyond that.
pub trait BookRepository: Send + Sync {
    fn list(&self) -> anyhow::Result<Vec<Book>>;
    fn create(&self, draft: &BookDraft) -> anyhow::Result<BookId>;
    fn update(&self, id: BookId, draft: &BookDraft) -> anyhow::Result<()>;
    fn delete(&self, id: BookId) -> anyhow::Result<()>;
}

/// A durable string key-value store (cart counter, remembered login).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}
