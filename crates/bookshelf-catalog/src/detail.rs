//! Detail-view overlay state machine.
//!
//! States: `Closed` and `Open(record)`. Opening with no record is a no-op,
//! closing an already-closed overlay is a no-op, and a successful delete of
//! the open record closes it automatically.

use bookshelf_core::types::{Book, BookId};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(Book),
}

#[derive(Debug, Default)]
pub struct DetailViewController {
    state: DetailState,
}

impl DetailViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open(_))
    }

    pub fn open_record(&self) -> Option<&Book> {
        match &self.state {
            DetailState::Open(book) => Some(book),
            DetailState::Closed => None,
        }
    }

    /// Transition to `Open` for a real record; `open(None)` does not
    /// transition.
    pub fn open(&mut self, record: Option<Book>) {
        if let Some(book) = record {
            self.state = DetailState::Open(book);
        }
    }

    /// Explicit close action. Idempotent from `Closed`.
    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }

    /// Cancellation signal (e.g. an escape gesture); same effect as `close`.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// A record was deleted upstream; close the overlay if it is the one on
    /// display.
    pub fn record_deleted(&mut self, id: BookId) {
        if let DetailState::Open(book) = &self.state {
            if book.id == Some(id) {
                self.state = DetailState::Closed;
            }
        }
    }
}
