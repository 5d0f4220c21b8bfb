//! Total order over the filtered collection.
//!
//! Every strategy runs through the same stable sort: `Relevance` depends on
//! stability outright, and ties under the price/rating keys must not reorder
//! otherwise-similar records between renders.

use std::cmp::Ordering;

use bookshelf_core::criteria::SortKey;
use bookshelf_core::types::Book;

pub fn apply(books: &mut [Book], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceAsc => {
            books.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()));
        }
        SortKey::PriceDesc => {
            books.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()));
        }
        SortKey::RatingDesc => {
            books.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
        }
        SortKey::TitleAsc => books.sort_by(compare_titles),
    }
}

/// Case-folded codepoint order on titles. The corpus carries no collation
/// tables, so CJK titles order by codepoint rather than by pinyin; exact
/// duplicates keep their original relative order.
fn compare_titles(a: &Book, b: &Book) -> Ordering {
    a.title_or_empty()
        .to_lowercase()
        .cmp(&b.title_or_empty().to_lowercase())
}
