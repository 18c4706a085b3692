//! Weekly topic catalog.
//!
//! # Storage layout
//!
//! ```text
//! ~/.hyperhash/
//!   topics.yaml   (optional override — replaces the built-in list entirely)
//! ```
//!
//! # API pattern
//!
//! Every loading function has two forms:
//! - `fn_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `fn()` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::Topic;

/// Built-in weekly topics, used when no override file exists.
const BUILTIN_TOPICS: &[&str] = &[
    "Instagram Hashtag Strategy",
    "TikTok Hashtag Trends",
    "Twitter Hashtag Best Practices",
    "YouTube Shorts Hashtags",
    "Hashtag Research Tools",
    "Instagram Reels Growth",
    "Small Business Hashtags",
    "Fitness Content Hashtags",
    "Travel Photography Hashtags",
    "Food Blogger Hashtags",
];

/// The catalog YAML document: a single `topics` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCatalog {
    pub topics: Vec<Topic>,
}

impl TopicCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        TopicCatalog {
            topics: BUILTIN_TOPICS.iter().map(|t| Topic::from(*t)).collect(),
        }
    }

    /// Pick one topic uniformly at random.
    ///
    /// The built-in list is non-empty and override files are validated on
    /// load, so this only returns `None` for a hand-constructed empty catalog.
    pub fn pick_random(&self) -> Option<&Topic> {
        self.topics.choose(&mut thread_rng())
    }
}

/// `<home>/.hyperhash/topics.yaml` — pure, no I/O.
pub fn override_path_at(home: &Path) -> PathBuf {
    home.join(".hyperhash").join("topics.yaml")
}

/// Load the catalog: the override file if present, otherwise the built-in list.
///
/// Returns `CatalogError::Parse` (with path + line context) for malformed
/// YAML and `CatalogError::EmptyCatalog` for an override with no topics.
pub fn load_at(home: &Path) -> Result<TopicCatalog, CatalogError> {
    let path = override_path_at(home);
    if !path.exists() {
        return Ok(TopicCatalog::builtin());
    }
    let contents = std::fs::read_to_string(&path)?;
    let catalog: TopicCatalog = serde_yaml::from_str(&contents)
        .map_err(|e| CatalogError::Parse { path: path.clone(), source: e })?;
    if catalog.topics.is_empty() {
        return Err(CatalogError::EmptyCatalog { path });
    }
    Ok(catalog)
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<TopicCatalog, CatalogError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, CatalogError> {
    dirs::home_dir().ok_or(CatalogError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_override(home: &TempDir, contents: &str) {
        let dir = home.path().join(".hyperhash");
        std::fs::create_dir_all(&dir).expect("create .hyperhash");
        std::fs::write(dir.join("topics.yaml"), contents).expect("write override");
    }

    #[test]
    fn builtin_catalog_used_when_no_override() {
        let home = TempDir::new().expect("tempdir");
        let catalog = load_at(home.path()).expect("load");
        assert_eq!(catalog, TopicCatalog::builtin());
        assert!(!catalog.topics.is_empty());
    }

    #[test]
    fn override_file_replaces_builtin_list() {
        let home = TempDir::new().expect("tempdir");
        write_override(&home, "topics:\n  - Pet Portraits\n  - Vinyl Collecting\n");
        let catalog = load_at(home.path()).expect("load");
        assert_eq!(
            catalog.topics,
            vec![Topic::from("Pet Portraits"), Topic::from("Vinyl Collecting")]
        );
    }

    #[test]
    fn malformed_override_is_a_parse_error() {
        let home = TempDir::new().expect("tempdir");
        write_override(&home, "topics: {not a list");
        let err = load_at(home.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn empty_override_is_rejected() {
        let home = TempDir::new().expect("tempdir");
        write_override(&home, "topics: []\n");
        let err = load_at(home.path()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog { .. }));
    }

    #[test]
    fn pick_random_returns_a_catalog_member() {
        let catalog = TopicCatalog::builtin();
        for _ in 0..20 {
            let topic = catalog.pick_random().expect("non-empty");
            assert!(catalog.topics.contains(topic));
        }
    }
}
