use std::env;

use bookshelf_catalog::{CartCounter, CatalogStore, DetailViewController};
use bookshelf_client::{FileKeyValueStore, HttpBookRepository, JsonBookRepository};
use bookshelf_core::config::Config;
use bookshelf_core::criteria::SortKey;
use bookshelf_core::traits::BookRepository;
use bookshelf_core::types::{Book, BookDraft};
use tracing_subscriber::EnvFilter;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <browse|show|add|remove|cart> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn open_repository(config: &Config) -> anyhow::Result<Box<dyn BookRepository>> {
    if let Ok(base_url) = config.get::<String>("catalog.base_url") {
        return Ok(Box::new(HttpBookRepository::new(&base_url)?));
    }
    let books_file: String = config
        .get("data.books_file")
        .unwrap_or_else(|_| "data/books.json".to_string());
    Ok(Box::new(JsonBookRepository::new(books_file)))
}

fn open_state_store(config: &Config) -> FileKeyValueStore {
    let state_file: String = config
        .get("data.state_file")
        .unwrap_or_else(|_| "data/state.json".to_string());
    FileKeyValueStore::open(state_file)
}

fn parse_sort_key(raw: &str) -> SortKey {
    match raw {
        "priceAsc" => SortKey::PriceAsc,
        "priceDesc" => SortKey::PriceDesc,
        "ratingDesc" => SortKey::RatingDesc,
        "titleAsc" => SortKey::TitleAsc,
        _ => SortKey::Relevance,
    }
}

fn print_line(book: &Book) {
    let id = book.id.map_or_else(|| "-".to_string(), |v| v.to_string());
    let price = book
        .price
        .map_or_else(|| "—".to_string(), |p| format!("¥{:.2}", p));
    let rating = book
        .rating
        .map_or_else(|| "no rating".to_string(), |r| format!("{:.1}", r));
    println!(
        "  [{}] {} — {} ({}, {})",
        id,
        book.title_or_empty(),
        book.author_or_empty(),
        price,
        rating
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "browse" => {
            let repo = open_repository(&config)?;
            let mut store = CatalogStore::new();
            store.load(repo.as_ref());
            if let Some(err) = store.load_error() {
                eprintln!("{}", err);
                std::process::exit(1);
            }
            if let Some(query) = args.first() {
                store.set_search(query);
            }
            if let Some(sort) = args.get(1) {
                store.set_sort_key(parse_sort_key(sort));
            }
            if let Some(page) = args.get(2).and_then(|p| p.parse::<usize>().ok()) {
                store.set_page(page);
            }
            let view = store.view();
            for book in &view.records {
                print_line(book);
            }
            println!(
                "page {}/{} — {} matching record(s)",
                view.page_number, view.total_pages, view.total_count
            );
        }
        "show" => {
            let id = args
                .first()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    eprintln!("Usage: bookshelf show <id>");
                    std::process::exit(1)
                });
            let repo = open_repository(&config)?;
            let mut store = CatalogStore::new();
            store.load(repo.as_ref());
            let mut detail = DetailViewController::new();
            detail.open(store.find_by_id(id).cloned());
            match detail.open_record() {
                Some(book) => {
                    print_line(book);
                    if let Some(desc) = &book.description {
                        println!("  {}", desc);
                    }
                    if !book.keywords.is_empty() {
                        println!("  keywords: {}", book.keywords.join(", "));
                    }
                }
                None => {
                    eprintln!("No book with id {}", id);
                    std::process::exit(1);
                }
            }
        }
        "add" => {
            let title = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: bookshelf add <title> [author] [price] [rating]");
                std::process::exit(1)
            });
            let draft = BookDraft::from_form(
                &title,
                args.get(1).map(String::as_str),
                None,
                args.get(2).map(String::as_str),
                None,
                args.get(3).map(String::as_str),
                None,
                None,
            )?;
            let repo = open_repository(&config)?;
            let mut store = CatalogStore::new();
            store.load(repo.as_ref());
            let id = store.create(repo.as_ref(), &draft)?;
            println!("Created book {}", id);
        }
        "remove" => {
            let id = args
                .first()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    eprintln!("Usage: bookshelf remove <id>");
                    std::process::exit(1)
                });
            let repo = open_repository(&config)?;
            let mut store = CatalogStore::new();
            store.load(repo.as_ref());
            let mut detail = DetailViewController::new();
            detail.open(store.find_by_id(id).cloned());
            store.delete(repo.as_ref(), id)?;
            detail.record_deleted(id);
            println!("Deleted book {}", id);
        }
        "cart" => {
            let mut cart = CartCounter::new(open_state_store(&config));
            match args.first().map(String::as_str) {
                Some("add") => {
                    println!("cart: {}", cart.increment());
                }
                Some("set") => {
                    let n = args.get(1).and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
                    println!("cart: {}", cart.set(n));
                }
                _ => println!("cart: {}", cart.count()),
            }
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
