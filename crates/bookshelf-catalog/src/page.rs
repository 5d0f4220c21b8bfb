//! Deterministic slicing of the sorted, filtered collection.

use bookshelf_core::types::{Book, CatalogView};

/// `max(1, ceil(count / page_size))`. The floor of 1 holds even for an empty
/// collection so page arithmetic never divides by or clamps to zero.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`. Out-of-range requests are
/// never errors.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages)
}

/// Slice one page out of the full ordered collection. The last page may be
/// shorter; the returned view records the clamped page number.
pub fn paginate(books: Vec<Book>, requested_page: usize, page_size: usize) -> CatalogView {
    let total_count = books.len();
    let pages = total_pages(total_count, page_size);
    let page = clamp_page(requested_page, pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let records = if start < total_count {
        books[start..end].to_vec()
    } else {
        Vec::new()
    };
    CatalogView {
        records,
        total_count,
        page_number: page,
        total_pages: pages,
    }
}
