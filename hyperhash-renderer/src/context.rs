//! Template context — serializable rendering payload built from [`PostDescriptor`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hyperhash_core::PostDescriptor;

use crate::error::RenderError;

/// Byline written into the front matter `author` field.
const AUTHOR: &str = "HyperHash Team";

/// How many leading keywords become front-matter `tags`. The full keyword
/// list still lands in the nested `seo` block.
const TAG_COUNT: usize = 3;

/// Rendering payload: the post fields plus generation metadata.
///
/// Construction is deterministic for a fixed descriptor and timestamp, so
/// rendering the same topic twice with the same clock yields byte-identical
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub post: PostCtx,
    pub meta: MetaCtx,
}

/// Post fields exposed to templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCtx {
    pub topic: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Front-matter category label, e.g. "Instagram Marketing".
    pub category: String,
    /// Short tag list for the front matter `tags` field.
    pub tags: Vec<String>,
    /// Full ordered keyword list for the nested `seo` block.
    pub keywords: Vec<String>,
}

/// Generation metadata exposed to templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    /// ISO date (`YYYY-MM-DD`) for the `publishedAt` field.
    pub published_at: String,
    /// ISO date for the `updatedAt` field; equals `published_at` on creation.
    pub updated_at: String,
    pub author: String,
    pub generator_version: String,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a descriptor and a publication instant.
    pub fn new(post: &PostDescriptor, published_at: DateTime<Utc>) -> Self {
        let date = published_at.format("%Y-%m-%d").to_string();
        TemplateContext {
            post: PostCtx {
                topic: post.topic.0.clone(),
                title: post.title.clone(),
                slug: post.slug.clone(),
                description: post.description.clone(),
                category: post.category.label().to_string(),
                tags: post.keywords.iter().take(TAG_COUNT).cloned().collect(),
                keywords: post.keywords.clone(),
            },
            meta: MetaCtx {
                published_at: date.clone(),
                updated_at: date,
                author: AUTHOR.to_string(),
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
