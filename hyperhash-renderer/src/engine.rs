//! Tera rendering engine — [`PostKind`] enum and [`Renderer`].
//!
//! # Output mapping
//!
//! | Kind   | Template                | Output file                   |
//! |--------|-------------------------|-------------------------------|
//! | Weekly | `weekly/post.mdx.tera`  | `weekly-post-<YYYY-MM-DD>.mdx`|
//! | Topic  | `topic/post.mdx.tera`   | `<slug>.mdx`                  |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tera::Tera;

use hyperhash_core::PostDescriptor;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "shared/_front_matter.tera",
        include_str!("templates/_partials/front_matter.tera"),
    ),
    ("weekly/post.mdx.tera", include_str!("templates/weekly.mdx.tera")),
    ("topic/post.mdx.tera", include_str!("templates/topic.mdx.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path
            .strip_prefix(dir)
            .unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// PostKind
// ---------------------------------------------------------------------------

/// The two post flavours the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    /// Weekly roundup post; topic picked at random from the catalog.
    Weekly,
    /// One-off post for a user-supplied topic.
    Topic,
}

impl PostKind {
    /// All kinds in a stable order.
    pub fn all() -> &'static [PostKind] {
        &[PostKind::Weekly, PostKind::Topic]
    }

    /// Template name to render for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            PostKind::Weekly => "weekly/post.mdx.tera",
            PostKind::Topic => "topic/post.mdx.tera",
        }
    }

    /// Output file name within the content directory.
    ///
    /// Weekly posts are named by date; topic posts by slug. The slug may be
    /// empty here — the publish layer rejects that before any write.
    pub fn output_filename(&self, slug: &str, date: NaiveDate) -> String {
        match self {
            PostKind::Weekly => format!("weekly-post-{}.mdx", date.format("%Y-%m-%d")),
            PostKind::Topic => format!("{slug}.mdx"),
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering post templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults. Template names are normalised to lowercase and relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the document for `kind` using the supplied context.
    pub fn render(&self, ctx: &TemplateContext, kind: PostKind) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(kind.template_name(), &tera_ctx)?;
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for both post kinds.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Render the document for `kind` from a descriptor and publication instant.
    pub fn render(
        &self,
        post: &PostDescriptor,
        published_at: chrono::DateTime<chrono::Utc>,
        kind: PostKind,
    ) -> Result<String, RenderError> {
        let ctx = TemplateContext::new(post, published_at);
        self.render_with_context(&ctx, kind)
    }

    /// Render using a caller-provided [`TemplateContext`].
    pub fn render_with_context(
        &self,
        ctx: &TemplateContext,
        kind: PostKind,
    ) -> Result<String, RenderError> {
        self.engine.render(ctx, kind)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixed_instant() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap()
    }

    fn make_post(topic: &str) -> PostDescriptor {
        PostDescriptor::from_topic(topic)
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn both_kinds_render_without_error() {
        let renderer = Renderer::new().unwrap();
        let post = make_post("Fitness Reels");
        for kind in PostKind::all() {
            let content = renderer
                .render(&post, fixed_instant(), *kind)
                .unwrap_or_else(|e| panic!("render failed for {:?}: {e}", kind));
            assert!(
                content.contains("Fitness Reels"),
                "rendered content for {:?} should contain the topic",
                kind
            );
        }
    }

    #[test]
    fn rendered_output_starts_with_front_matter() {
        let renderer = Renderer::new().unwrap();
        let post = make_post("Travel Photography Hashtags");
        let content = renderer.render(&post, fixed_instant(), PostKind::Topic).unwrap();
        assert!(content.starts_with("---\n"), "front matter fence missing");
        assert!(content.contains("publishedAt: \"2026-08-30\""));
        assert!(content.contains("featured: false"));
        assert!(content.contains("ogType: \"article\""));
    }

    #[test]
    fn front_matter_block_parses_as_yaml() {
        let renderer = Renderer::new().unwrap();
        let post = make_post("YouTube Shorts");
        let content = renderer.render(&post, fixed_instant(), PostKind::Topic).unwrap();
        let rest = content.strip_prefix("---\n").expect("opening fence");
        let (front, _) = rest.split_once("\n---\n").expect("closing fence");
        let value: serde_yaml::Value = serde_yaml::from_str(front)
            .unwrap_or_else(|e| panic!("front matter is not valid YAML: {e}\n{front}"));
        assert_eq!(
            value["category"].as_str(),
            Some("YouTube Marketing"),
            "category field mismatch"
        );
        assert!(value["seo"]["keywords"].as_sequence().is_some());
    }

    #[test]
    fn rendering_is_deterministic_for_fixed_inputs() {
        let renderer = Renderer::new().unwrap();
        let post = make_post("Small Business Hashtags");
        let a = renderer.render(&post, fixed_instant(), PostKind::Topic).unwrap();
        let b = renderer.render(&post, fixed_instant(), PostKind::Topic).unwrap();
        assert_eq!(a, b, "same descriptor + instant must render byte-identical output");
    }

    #[test]
    fn weekly_filename_uses_date_topic_filename_uses_slug() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            PostKind::Weekly.output_filename("ignored", date),
            "weekly-post-2026-08-30.mdx"
        );
        assert_eq!(
            PostKind::Topic.output_filename("best-instagram-hashtags-for-sneakers", date),
            "best-instagram-hashtags-for-sneakers.mdx"
        );
    }

    #[test]
    fn user_template_override_replaces_embedded() {
        let dir = tempfile::TempDir::new().unwrap();
        let topic_dir = dir.path().join("topic");
        std::fs::create_dir_all(&topic_dir).unwrap();
        std::fs::write(
            topic_dir.join("post.mdx.tera"),
            "OVERRIDE {{ post.topic }}\n",
        )
        .unwrap();

        let engine = TemplateEngine::new(Some(dir.path())).unwrap();
        let post = make_post("Pet Portraits");
        let ctx = TemplateContext::new(&post, fixed_instant());
        let content = engine.render(&ctx, PostKind::Topic).unwrap();
        assert_eq!(content, "OVERRIDE Pet Portraits\n");
    }

    #[test]
    fn non_tera_files_in_override_dir_are_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a template").unwrap();
        let engine = TemplateEngine::new(Some(dir.path())).unwrap();
        let post = make_post("Food Blogger Hashtags");
        let ctx = TemplateContext::new(&post, fixed_instant());
        // Embedded templates must still be present and render fine.
        engine.render(&ctx, PostKind::Weekly).expect("embedded weekly template");
    }
}
