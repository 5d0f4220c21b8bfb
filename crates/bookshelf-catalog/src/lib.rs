//! bookshelf-catalog
//!
//! The catalog query pipeline: filtering, sorting and pagination composed by
//! [`store::CatalogStore`], plus the cart counter and detail-view state
//! machines and the placeholder cover resolver.

pub mod cart;
pub mod cover;
pub mod detail;
pub mod filter;
pub mod page;
pub mod sort;
pub mod store;

pub use cart::CartCounter;
pub use detail::{DetailState, DetailViewController};
pub use store::{derive_view, CatalogStore};
