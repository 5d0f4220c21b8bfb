//! Blocking HTTP client for the remote book collection.
//!
//! All mutations in the catalog are synchronous with respect to each other,
//! so a blocking client keeps the single-actor model honest. Any transport
//! failure or non-success status maps to one uniform failure via `anyhow`.

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use bookshelf_core::traits::BookRepository;
use bookshelf_core::types::{Book, BookDraft, BookId};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct HttpBookRepository {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct Created {
    id: BookId,
}

impl HttpBookRepository {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn books_url(&self) -> String {
        format!("{}/api/books", self.base_url)
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/api/books/{}", self.base_url, id)
    }
}

impl BookRepository for HttpBookRepository {
    fn list(&self) -> anyhow::Result<Vec<Book>> {
        let resp = self.client.get(self.books_url()).send()?;
        if !resp.status().is_success() {
            bail!("collection endpoint returned {}", resp.status());
        }
        let books: Vec<Book> = resp.json().context("unexpected collection payload")?;
        debug!(count = books.len(), "fetched catalog");
        Ok(books)
    }

    fn create(&self, draft: &BookDraft) -> anyhow::Result<BookId> {
        let resp = self.client.post(self.books_url()).json(draft).send()?;
        if !resp.status().is_success() {
            bail!("create returned {}", resp.status());
        }
        let created: Created = resp.json().context("unexpected create payload")?;
        Ok(created.id)
    }

    fn update(&self, id: BookId, draft: &BookDraft) -> anyhow::Result<()> {
        let resp = self.client.put(self.book_url(id)).json(draft).send()?;
        if !resp.status().is_success() {
            bail!("update of {} returned {}", id, resp.status());
        }
        Ok(())
    }

    fn delete(&self, id: BookId) -> anyhow::Result<()> {
        let resp = self.client.delete(self.book_url(id)).send()?;
        if !resp.status().is_success() {
            bail!("delete of {} returned {}", id, resp.status());
        }
        Ok(())
    }
}
