//! Catalog data model, line-format I/O, and recommendation queries.
//!
//! This crate holds everything except the terminal shell: the item/rating
//! types, the semicolon-delimited persistence codec, the in-memory catalog
//! store, and the pure query functions that derive ranked views from it.

pub mod codec;
pub mod error;
pub mod recommend;
pub mod store;
pub mod types;

pub use codec::{DecodeError, Record};
pub use error::CatalogError;
pub use recommend::{by_genre, top_n};
pub use store::Catalog;
pub use types::{Item, ItemKind, Rating, User};
