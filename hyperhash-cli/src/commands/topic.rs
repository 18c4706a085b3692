//! `hyperhash topic "<text>"` — generate a post for a user-supplied topic.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Args;

use hyperhash_core::PostDescriptor;
use hyperhash_publish::pipeline;
use hyperhash_renderer::PostKind;

use super::{print_result, OutputArgs};

/// Arguments for `hyperhash topic`.
#[derive(Args, Debug)]
pub struct TopicArgs {
    /// Topic text, e.g. "Best Instagram Hashtags For Sneakers".
    pub text: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TopicArgs {
    pub fn run(self) -> Result<()> {
        // Missing or blank text exits 1 with a usage line, not clap's exit 2.
        let text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("usage: hyperhash topic \"<text>\""))?;

        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;

        let post = PostDescriptor::from_topic(text);
        let result = pipeline::publish_at(
            &home,
            &post,
            PostKind::Topic,
            Utc::now(),
            &self.output.to_publish_options(),
        )
        .with_context(|| format!("failed to generate post for '{text}'"))?;

        print_result(text, &result);
        Ok(())
    }
}
