use bookshelf_catalog::{derive_view, filter, page, sort};
use bookshelf_core::criteria::{FilterCriteria, RatingBucket, SortKey};
use bookshelf_core::types::Book;

fn book(title: &str, price: f64, rating: f64) -> Book {
    Book {
        title: Some(title.to_string()),
        price: Some(price),
        rating: Some(rating),
        ..Book::default()
    }
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(Book::title_or_empty).collect()
}

#[test]
fn filter_is_a_conjunction() {
    // A record matching the search but failing the price bound is excluded.
    let books = vec![book("A", 10.0, 5.0), book("B", 60.0, 5.0)];
    let criteria = FilterCriteria {
        price_max: Some(30.0),
        ..FilterCriteria::default()
    };
    let out = filter::apply(&books, &criteria);
    assert_eq!(titles(&out), vec!["A"]);
}

#[test]
fn search_matches_title_author_or_description() {
    let mut by_author = book("Unrelated", 1.0, 1.0);
    by_author.author = Some("Klabnik".to_string());
    let mut by_desc = book("Other", 1.0, 1.0);
    by_desc.description = Some("a borrow checker deep dive".to_string());
    let books = vec![book("The Rust Book", 1.0, 1.0), by_author, by_desc, book("Nope", 1.0, 1.0)];

    let criteria = FilterCriteria {
        search_text: "  RUST ".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["The Rust Book"]);

    let criteria = FilterCriteria {
        search_text: "klab".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter::apply(&books, &criteria).len(), 1);

    let criteria = FilterCriteria {
        search_text: "borrow checker".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["Other"]);
}

#[test]
fn missing_numeric_fields_coerce_to_zero() {
    // An unpriced, unrated record is excluded by positive minimums. Defined
    // behavior, not an edge case to "fix".
    let bare = Book {
        title: Some("Bare".to_string()),
        ..Book::default()
    };
    let books = vec![bare, book("Priced", 20.0, 4.0)];

    let criteria = FilterCriteria {
        price_min: Some(0.01),
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["Priced"]);

    let criteria = FilterCriteria {
        rating_bucket: RatingBucket::Gte3,
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["Priced"]);

    // With no minimums both pass.
    let criteria = FilterCriteria::default();
    assert_eq!(filter::apply(&books, &criteria).len(), 2);
}

#[test]
fn inverted_price_bounds_behave_swapped() {
    let books = vec![book("A", 10.0, 5.0), book("B", 30.0, 5.0), book("C", 60.0, 5.0)];
    let inverted = FilterCriteria {
        price_min: Some(50.0),
        price_max: Some(10.0),
        ..FilterCriteria::default()
    };
    let straight = FilterCriteria {
        price_min: Some(10.0),
        price_max: Some(50.0),
        ..FilterCriteria::default()
    };
    assert_eq!(
        filter::apply(&books, &inverted),
        filter::apply(&books, &straight)
    );
}

#[test]
fn rating_buckets_filter_inclusively() {
    let books = vec![
        book("two", 1.0, 2.0),
        book("three", 1.0, 3.0),
        book("four", 1.0, 4.0),
        book("four-five", 1.0, 4.5),
    ];
    let criteria = FilterCriteria {
        rating_bucket: RatingBucket::Gte4,
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["four", "four-five"]);
    let criteria = FilterCriteria {
        rating_bucket: RatingBucket::Gte45,
        ..FilterCriteria::default()
    };
    assert_eq!(titles(&filter::apply(&books, &criteria)), vec!["four-five"]);
}

#[test]
fn price_sort_is_stable_for_ties() {
    let mut books = vec![book("X", 10.0, 1.0), book("Y", 10.0, 2.0), book("W", 5.0, 3.0)];
    sort::apply(&mut books, SortKey::PriceAsc);
    assert_eq!(titles(&books), vec!["W", "X", "Y"], "ties keep original order");
}

#[test]
fn relevance_is_a_no_op() {
    let original = vec![book("C", 3.0, 1.0), book("A", 1.0, 2.0), book("B", 2.0, 3.0)];
    let mut books = original.clone();
    sort::apply(&mut books, SortKey::Relevance);
    assert_eq!(books, original);
}

#[test]
fn sort_strategies_order_as_named() {
    let mut books = vec![book("b", 20.0, 3.0), book("A", 10.0, 5.0), book("c", 30.0, 4.0)];
    sort::apply(&mut books, SortKey::PriceDesc);
    assert_eq!(titles(&books), vec!["c", "b", "A"]);
    sort::apply(&mut books, SortKey::RatingDesc);
    assert_eq!(titles(&books), vec!["A", "c", "b"]);
    sort::apply(&mut books, SortKey::TitleAsc);
    assert_eq!(titles(&books), vec!["A", "b", "c"], "title compare is case-folded");
}

#[test]
fn missing_price_sorts_as_zero() {
    let free = Book {
        title: Some("free".to_string()),
        ..Book::default()
    };
    let mut books = vec![book("paid", 5.0, 0.0), free];
    sort::apply(&mut books, SortKey::PriceAsc);
    assert_eq!(titles(&books), vec!["free", "paid"]);
}

#[test]
fn total_pages_has_a_floor_of_one() {
    assert_eq!(page::total_pages(0, 12), 1);
    assert_eq!(page::total_pages(12, 12), 1);
    assert_eq!(page::total_pages(13, 12), 2);
}

#[test]
fn pagination_invariants_hold_for_any_count() {
    for count in 0..40usize {
        for page_size in 1..7 {
            for requested in [1usize, 2, 3, 99] {
                let books: Vec<Book> = (0..count).map(|i| book(&format!("b{i}"), i as f64, 0.0)).collect();
                let criteria = FilterCriteria {
                    page_size,
                    page_number: requested,
                    ..FilterCriteria::default()
                };
                let view = derive_view(&books, &criteria);
                assert_eq!(view.total_pages, count.div_ceil(page_size).max(1));
                assert!(view.page_number >= 1 && view.page_number <= view.total_pages);
                assert!(view.records.len() <= page_size);
                assert_eq!(view.total_count, count);
            }
        }
    }
}

#[test]
fn pages_are_contiguous_slices_of_the_sorted_order() {
    let books: Vec<Book> = (0..10).map(|i| book(&format!("b{i}"), (10 - i) as f64, 0.0)).collect();
    let mut criteria = FilterCriteria {
        sort_key: SortKey::PriceAsc,
        page_size: 4,
        ..FilterCriteria::default()
    };
    let mut seen = Vec::new();
    for p in 1..=3 {
        criteria.page_number = p;
        let view = derive_view(&books, &criteria);
        seen.extend(view.records.iter().map(|b| b.price_or_zero()));
    }
    let mut expected: Vec<f64> = (1..=10).map(f64::from).collect();
    expected.sort_by(f64::total_cmp);
    assert_eq!(seen, expected, "page N is the Nth slice of one global order");
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let books: Vec<Book> = (0..30).map(|i| book(&format!("b{i}"), 1.0, 0.0)).collect();
    let criteria = FilterCriteria {
        page_size: 12,
        page_number: 99,
        ..FilterCriteria::default()
    };
    let view = derive_view(&books, &criteria);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page_number, 3);
    assert_eq!(view.records.len(), 6, "last page may be shorter");
}

#[test]
fn derive_view_is_idempotent() {
    let books: Vec<Book> = (0..25).map(|i| book(&format!("b{i}"), i as f64, 0.0)).collect();
    let criteria = FilterCriteria {
        search_text: "b1".to_string(),
        sort_key: SortKey::PriceDesc,
        page_size: 5,
        page_number: 2,
        ..FilterCriteria::default()
    };
    let first = derive_view(&books, &criteria);
    let second = derive_view(&books, &criteria);
    assert_eq!(first, second);
}
