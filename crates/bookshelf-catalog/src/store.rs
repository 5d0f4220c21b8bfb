//! Single source of truth for the raw record collection and the derived view.
//!
//! Every mutation re-runs the same pure derivation: filter, then sort, then
//! paginate. Sorting before paginating is what makes page N the Nth
//! contiguous slice of one globally ordered list instead of an independently
//! sorted sub-page.

use bookshelf_core::criteria::{FilterCriteria, RatingBucket, SortKey};
use bookshelf_core::error::{Error, Result};
use bookshelf_core::traits::BookRepository;
use bookshelf_core::types::{Book, BookDraft, BookId, CatalogView};
use tracing::{debug, warn};

use crate::{cover, filter, page, sort};

/// Pure derivation of the current view from raw records + criteria. Calling
/// it twice with the same inputs yields identical views.
pub fn derive_view(books: &[Book], criteria: &FilterCriteria) -> CatalogView {
    let mut filtered = filter::apply(books, criteria);
    sort::apply(&mut filtered, criteria.sort_key);
    page::paginate(filtered, criteria.page_number, criteria.page_size)
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    books: Vec<Book>,
    criteria: FilterCriteria,
    view: CatalogView,
    load_error: Option<Error>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let mut store = Self::default();
        store.recompute();
        store
    }

    /// Replace the raw collection from the repository, backfilling missing
    /// covers. Fails soft: on a repository failure the store adopts an empty
    /// collection and remembers a load error; the criteria survive so a
    /// retried `load` picks up where the user left off.
    pub fn load(&mut self, repo: &dyn BookRepository) {
        match repo.list() {
            Ok(mut list) => {
                for book in &mut list {
                    if !book.has_cover() {
                        book.cover = Some(cover::resolve(book.title_or_empty()));
                    }
                }
                debug!(count = list.len(), "catalog loaded");
                self.books = list;
                self.load_error = None;
            }
            Err(e) => {
                warn!("catalog load failed: {e}");
                self.books.clear();
                self.load_error = Some(Error::Load(e.to_string()));
            }
        }
        self.recompute();
    }

    /// The load error from the most recent `load`, if it failed.
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current derived view. Idempotent between mutations.
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == Some(id))
    }

    pub fn set_search(&mut self, text: &str) {
        self.criteria.search_text = text.to_string();
        self.reset_page_and_recompute();
    }

    /// Set the price bounds. Non-finite values are normalized to unset and an
    /// inverted pair is used swapped; neither is ever an error.
    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.criteria.price_min = min.filter(|v| v.is_finite());
        self.criteria.price_max = max.filter(|v| v.is_finite());
        self.reset_page_and_recompute();
    }

    pub fn set_rating_bucket(&mut self, bucket: RatingBucket) {
        self.criteria.rating_bucket = bucket;
        self.reset_page_and_recompute();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.criteria.sort_key = key;
        self.reset_page_and_recompute();
    }

    /// Change the page size and return to page 1. A zero size is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.criteria.page_size = size;
        self.reset_page_and_recompute();
    }

    /// Direct page navigation; the recompute clamps into `[1, total_pages]`.
    pub fn set_page(&mut self, n: usize) {
        self.criteria.page_number = n;
        self.recompute();
    }

    /// Reset all criteria to their defaults (explicit user action).
    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    /// Create a record remotely, then reload the collection. On failure no
    /// local state changes.
    pub fn create(&mut self, repo: &dyn BookRepository, draft: &BookDraft) -> Result<BookId> {
        let id = repo
            .create(draft)
            .map_err(|e| Error::Mutation(e.to_string()))?;
        self.load(repo);
        Ok(id)
    }

    /// Update a record remotely, then reload. On failure no local state
    /// changes.
    pub fn update(&mut self, repo: &dyn BookRepository, id: BookId, draft: &BookDraft) -> Result<()> {
        repo.update(id, draft)
            .map_err(|e| Error::Mutation(e.to_string()))?;
        self.load(repo);
        Ok(())
    }

    /// Delete a record remotely, then reload. Callers holding a detail view
    /// open on `id` should forward the success to
    /// [`DetailViewController::record_deleted`](crate::detail::DetailViewController::record_deleted).
    pub fn delete(&mut self, repo: &dyn BookRepository, id: BookId) -> Result<()> {
        repo.delete(id)
            .map_err(|e| Error::Mutation(e.to_string()))?;
        self.load(repo);
        Ok(())
    }

    fn reset_page_and_recompute(&mut self) {
        self.criteria.page_number = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = derive_view(&self.books, &self.criteria);
        // The clamped page becomes the criteria's page so the invariant
        // 1 <= page <= total_pages holds after every mutation.
        self.criteria.page_number = self.view.page_number;
    }
}
