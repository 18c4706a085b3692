//! `hyperhash weekly` — generate this week's post from a random catalog topic.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use hyperhash_core::{catalog, PostDescriptor};
use hyperhash_publish::pipeline;
use hyperhash_renderer::PostKind;

use super::{print_result, OutputArgs};

/// Arguments for `hyperhash weekly`.
#[derive(Args, Debug)]
pub struct WeeklyArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

impl WeeklyArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;

        let topics = catalog::load_at(&home).context("failed to load topic catalog")?;
        let topic = topics
            .pick_random()
            .context("topic catalog is empty")?
            .clone();

        let post = PostDescriptor::from_topic(&topic.0);
        let result = pipeline::publish_at(
            &home,
            &post,
            PostKind::Weekly,
            Utc::now(),
            &self.output.to_publish_options(),
        )
        .with_context(|| format!("failed to generate weekly post for '{topic}'"))?;

        print_result(&topic.0, &result);
        Ok(())
    }
}
