//! # hyperhash-publish
//!
//! Hash-gated atomic writer and the render-and-write pipeline.
//!
//! Call [`pipeline::publish_at`] to render a post and write it into the
//! content directory.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::PublishError;
pub use pipeline::{publish_at, PublishOptions, DEFAULT_CONTENT_DIR};
pub use writer::WriteResult;
