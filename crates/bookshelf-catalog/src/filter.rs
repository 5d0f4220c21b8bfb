//! Predicate conjunction over the raw record collection.
//!
//! All three predicates are independent ANDs; a record must pass every active
//! one. Missing numeric fields count as `0`, so a positive price or rating
//! minimum excludes records that never priced or rated themselves. That is
//! the defined behavior of the catalog, not a gap.

use bookshelf_core::criteria::FilterCriteria;
use bookshelf_core::types::Book;

/// Keep the records satisfying every active criterion, in original order.
pub fn apply(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let keyword = criteria.search_keyword();
    let (min, max) = criteria.price_bounds();
    let threshold = criteria.rating_bucket.threshold();

    books
        .iter()
        .filter(|b| keyword.as_deref().is_none_or(|kw| matches_search(b, kw)))
        .filter(|b| within_price(b, min, max))
        .filter(|b| threshold.is_none_or(|t| b.rating_or_zero() >= t))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against title, author or description.
/// The keyword is already trimmed and case-folded by the caller.
fn matches_search(book: &Book, keyword: &str) -> bool {
    book.title_or_empty().to_lowercase().contains(keyword)
        || book.author_or_empty().to_lowercase().contains(keyword)
        || book.description_or_empty().to_lowercase().contains(keyword)
}

fn within_price(book: &Book, min: Option<f64>, max: Option<f64>) -> bool {
    let price = book.price_or_zero();
    if min.is_some_and(|lo| price < lo) {
        return false;
    }
    if max.is_some_and(|hi| price > hi) {
        return false;
    }
    true
}
