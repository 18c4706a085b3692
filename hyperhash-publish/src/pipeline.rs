//! Render-and-write pipeline — the canonical entrypoint for both CLI commands.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use hyperhash_core::PostDescriptor;
use hyperhash_renderer::{PostKind, TemplateContext, TemplateEngine};

use crate::error::PublishError;
use crate::writer::{self, WriteResult};

/// Where generated posts land unless `--dir` says otherwise.
pub const DEFAULT_CONTENT_DIR: &str = "content/blog";

/// Options shared by both post kinds.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Directory the rendered file is written into; created if absent.
    pub content_dir: PathBuf,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// Overwrite an existing file with different content.
    pub force: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        PublishOptions {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            dry_run: false,
            force: false,
        }
    }
}

/// `<home>/.hyperhash/templates/` — user template override directory.
pub fn template_dir_at(home: &Path) -> PathBuf {
    home.join(".hyperhash").join("templates")
}

/// Render `post` as `kind` and write it into the content directory.
///
/// `home` is only consulted for template overrides under
/// `~/.hyperhash/templates/`; publishing never writes outside
/// `opts.content_dir`. Topic posts with an empty slug are rejected before
/// rendering — an empty slug would name the file just `.mdx`.
pub fn publish_at(
    home: &Path,
    post: &PostDescriptor,
    kind: PostKind,
    now: DateTime<Utc>,
    opts: &PublishOptions,
) -> Result<WriteResult, PublishError> {
    if kind == PostKind::Topic && post.slug.is_empty() {
        return Err(PublishError::EmptySlug {
            topic: post.topic.0.clone(),
        });
    }

    let engine = TemplateEngine::new(Some(&template_dir_at(home)))?;
    let ctx = TemplateContext::new(post, now);
    let content = engine.render(&ctx, kind)?;

    let filename = kind.output_filename(&post.slug, now.date_naive());
    let path = opts.content_dir.join(filename);
    writer::atomic_write(&path, &content, opts.force, opts.dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 8, 0, 0).unwrap()
    }

    fn opts_in(dir: &TempDir) -> PublishOptions {
        PublishOptions {
            content_dir: dir.path().join("content").join("blog"),
            dry_run: false,
            force: false,
        }
    }

    #[test]
    fn topic_post_lands_at_slug_mdx() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let post = PostDescriptor::from_topic("Best Instagram Hashtags For Sneakers");

        let result = publish_at(
            home.path(),
            &post,
            PostKind::Topic,
            fixed_instant(),
            &opts_in(&out),
        )
        .expect("publish");

        assert!(result
            .path()
            .ends_with("content/blog/best-instagram-hashtags-for-sneakers.mdx"));
        assert!(result.path().exists());
    }

    #[test]
    fn weekly_post_lands_at_dated_filename() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let post = PostDescriptor::from_topic("TikTok Hashtag Trends");

        let result = publish_at(
            home.path(),
            &post,
            PostKind::Weekly,
            fixed_instant(),
            &opts_in(&out),
        )
        .expect("publish");

        assert!(result
            .path()
            .ends_with("content/blog/weekly-post-2026-08-30.mdx"));
    }

    #[test]
    fn empty_slug_topic_is_rejected_before_writing() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let post = PostDescriptor::from_topic("!!! ???");
        assert_eq!(post.slug, "");

        let err = publish_at(
            home.path(),
            &post,
            PostKind::Topic,
            fixed_instant(),
            &opts_in(&out),
        )
        .unwrap_err();
        assert!(matches!(err, PublishError::EmptySlug { .. }));
        assert!(
            !out.path().join("content").exists(),
            "nothing may be created for a rejected topic"
        );
    }

    #[test]
    fn republishing_identical_topic_is_unchanged() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let post = PostDescriptor::from_topic("Fitness Content Hashtags");
        let opts = opts_in(&out);

        let first = publish_at(home.path(), &post, PostKind::Topic, fixed_instant(), &opts)
            .expect("first publish");
        assert!(matches!(first, WriteResult::Written { .. }));

        let second = publish_at(home.path(), &post, PostKind::Topic, fixed_instant(), &opts)
            .expect("second publish");
        assert!(matches!(second, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn dry_run_creates_no_content_dir() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let post = PostDescriptor::from_topic("Travel Photography Hashtags");
        let mut opts = opts_in(&out);
        opts.dry_run = true;

        let result = publish_at(home.path(), &post, PostKind::Topic, fixed_instant(), &opts)
            .expect("dry-run publish");
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!out.path().join("content").exists());
    }

    #[test]
    fn template_override_flows_through_publish() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let tpl_dir = template_dir_at(home.path()).join("topic");
        std::fs::create_dir_all(&tpl_dir).unwrap();
        std::fs::write(tpl_dir.join("post.mdx.tera"), "custom: {{ post.slug }}\n").unwrap();

        let post = PostDescriptor::from_topic("Vinyl Collecting");
        let result = publish_at(
            home.path(),
            &post,
            PostKind::Topic,
            fixed_instant(),
            &opts_in(&out),
        )
        .expect("publish");

        let body = std::fs::read_to_string(result.path()).unwrap();
        assert_eq!(body, "custom: vinyl-collecting\n");
    }
}
