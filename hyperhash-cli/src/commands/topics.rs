//! `hyperhash topics` — list the weekly topic catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hyperhash_core::{catalog, slug::slugify, Category};

/// Arguments for `hyperhash topics`.
#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Emit the catalog as JSON instead of the human-readable listing.
    #[arg(long)]
    pub json: bool,
}

/// One catalog row in `--json` output.
#[derive(Debug, Serialize)]
struct TopicRow {
    topic: String,
    slug: String,
    category: String,
}

impl TopicsArgs {
    pub fn run(self) -> Result<()> {
        let home: PathBuf = dirs::home_dir().context("could not determine home directory")?;
        let topics = catalog::load_at(&home).context("failed to load topic catalog")?;

        let rows: Vec<TopicRow> = topics
            .topics
            .iter()
            .map(|t| TopicRow {
                topic: t.0.clone(),
                slug: slugify(&t.0),
                category: Category::classify(&t.0).label().to_string(),
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        println!("Weekly topic catalog ({} topics):", rows.len());
        for row in &rows {
            println!("  {} [{}]", row.topic, row.category);
        }
        Ok(())
    }
}
