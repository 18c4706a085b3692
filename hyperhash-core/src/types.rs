//! Domain types for HyperHash content generation.
//!
//! A [`PostDescriptor`] is built once per invocation from a single topic
//! string and is never mutated afterwards; the renderer consumes it to
//! produce one MDX document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::slug::slugify;

/// Appended to the title-cased topic to form the post title.
const TITLE_SUFFIX: &str = ": The Complete Guide";

/// Product keywords appended after the topic-derived variants.
const BASE_KEYWORDS: &[&str] = &[
    "hashtag generator",
    "trending hashtags",
    "hashtag strategy",
    "social media growth",
    "content marketing",
];

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The free-text subject string used to parameterize generated content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic(pub String);

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// PostDescriptor
// ---------------------------------------------------------------------------

/// Everything the renderer needs to produce one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDescriptor {
    pub topic: Topic,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Ordered; topic variants first, then [`BASE_KEYWORDS`].
    pub keywords: Vec<String>,
    pub category: Category,
}

impl PostDescriptor {
    /// Build a descriptor from a raw topic string.
    ///
    /// The topic is trimmed before any derivation; an all-whitespace topic
    /// therefore produces an empty slug, which downstream publishing rejects.
    pub fn from_topic(raw: &str) -> Self {
        let topic = raw.trim();
        PostDescriptor {
            topic: Topic::from(topic),
            title: format!("{}{}", title_case(topic), TITLE_SUFFIX),
            slug: slugify(topic),
            description: format!(
                "Discover the best hashtags for {} and learn how to use them \
                 to grow your reach, engagement, and followers.",
                topic.to_lowercase()
            ),
            keywords: build_keywords(topic),
            category: Category::classify(topic),
        }
    }
}

/// Uppercase the first letter of each whitespace-separated word, leaving the
/// rest of the word untouched ("TikTok" stays "TikTok").
fn title_case(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Topic variants followed by the fixed product keywords, skipping exact
/// repeats while preserving first-seen order.
fn build_keywords(topic: &str) -> Vec<String> {
    let lower = topic.to_lowercase();
    let mut keywords: Vec<String> = Vec::with_capacity(3 + BASE_KEYWORDS.len());

    fn push(candidate: String, keywords: &mut Vec<String>) {
        if !candidate.is_empty() && !keywords.contains(&candidate) {
            keywords.push(candidate);
        }
    }

    push(lower.clone(), &mut keywords);
    if !lower.is_empty() {
        push(format!("{lower} hashtags"), &mut keywords);
        push(format!("best hashtags for {lower}"), &mut keywords);
    }
    for base in BASE_KEYWORDS {
        push((*base).to_string(), &mut keywords);
    }

    keywords
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
