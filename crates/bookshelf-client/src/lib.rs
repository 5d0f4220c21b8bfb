//! bookshelf-client
//!
//! Infrastructure implementations of the `bookshelf-core` trait seams: an
//! HTTP repository for the remote collection endpoint, a JSON-file repository
//! for offline use and tests, and a file-backed key-value store.

pub mod http;
pub mod json;
pub mod kv;

pub use http::HttpBookRepository;
pub use json::JsonBookRepository;
pub use kv::FileKeyValueStore;
