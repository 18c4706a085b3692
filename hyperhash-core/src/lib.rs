//! HyperHash core library — domain types, slug/category derivation, topic catalog.
//!
//! Public API surface:
//! - [`types`] — [`Topic`], [`PostDescriptor`]
//! - [`slug`] — URL-safe slug derivation
//! - [`category`] — [`Category`] classification
//! - [`catalog`] — built-in weekly topics + YAML override
//! - [`error`] — [`CatalogError`]

pub mod catalog;
pub mod category;
pub mod error;
pub mod slug;
pub mod types;

pub use catalog::TopicCatalog;
pub use category::Category;
pub use error::CatalogError;
pub use types::{PostDescriptor, Topic};
