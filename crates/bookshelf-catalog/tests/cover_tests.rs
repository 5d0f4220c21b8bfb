use bookshelf_catalog::cover;

#[test]
fn cover_is_deterministic_per_title() {
    let a = cover::resolve("Rust程序设计");
    let b = cover::resolve("Rust程序设计");
    assert_eq!(a, b);
}

#[test]
fn cover_is_a_percent_encoded_svg_data_uri() {
    let uri = cover::resolve("A Tale of Two Cities");
    assert!(uri.starts_with("data:image/svg+xml;charset=utf-8,"));
    let payload = &uri["data:image/svg+xml;charset=utf-8,".len()..];
    assert!(!payload.contains('<'), "markup must be escaped");
    assert!(!payload.contains('"'));
    assert!(payload.contains("%3Csvg"));
}

#[test]
fn blank_title_falls_back_to_a_default() {
    let blank = cover::resolve("   ");
    let named = cover::resolve("named");
    assert_ne!(blank, named);
    assert_eq!(blank, cover::resolve(""));
}

#[test]
fn long_titles_are_truncated_before_hashing() {
    // Titles sharing the first 16 chars pick the same palette slot; the
    // rendered short title is identical.
    let a = cover::resolve("0123456789abcdef-first");
    let b = cover::resolve("0123456789abcdef-second");
    assert_eq!(a, b);
}
