//! Category classification — first-match keyword rules over the topic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The editorial category a generated post is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Instagram,
    TikTok,
    Twitter,
    YouTube,
    HashtagStrategy,
    #[default]
    SocialMedia,
}

/// Ordered classification rules. First match wins, so a topic mentioning
/// both "instagram" and "tiktok" always files under Instagram. Do not
/// reorder without revisiting the tests that pin this behaviour.
const RULES: &[(&str, Category)] = &[
    ("instagram", Category::Instagram),
    ("tiktok", Category::TikTok),
    ("twitter", Category::Twitter),
    ("youtube", Category::YouTube),
    ("hashtag", Category::HashtagStrategy),
];

impl Category {
    /// Classify a topic by case-insensitive substring match against [`RULES`].
    pub fn classify(topic: &str) -> Category {
        let haystack = topic.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| haystack.contains(needle))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Human-readable label used in front matter and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Instagram => "Instagram Marketing",
            Category::TikTok => "TikTok Marketing",
            Category::Twitter => "Twitter Marketing",
            Category::YouTube => "YouTube Marketing",
            Category::HashtagStrategy => "Hashtag Strategy",
            Category::SocialMedia => "Social Media Marketing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
