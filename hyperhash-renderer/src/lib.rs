//! # hyperhash-renderer
//!
//! Tera-based template engine that renders MDX blog posts from a
//! [`PostDescriptor`](hyperhash_core::PostDescriptor).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use hyperhash_core::PostDescriptor;
//! use hyperhash_renderer::{PostKind, Renderer};
//!
//! fn render_one(topic: &str) {
//!     let post = PostDescriptor::from_topic(topic);
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(content) = renderer.render(&post, Utc::now(), PostKind::Topic) {
//!             println!("{} bytes", content.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{PostKind, Renderer, TemplateEngine};
pub use error::RenderError;
