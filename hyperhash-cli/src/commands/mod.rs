//! CLI subcommand implementations.

pub mod topic;
pub mod topics;
pub mod weekly;

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use hyperhash_publish::{PublishOptions, WriteResult, DEFAULT_CONTENT_DIR};

/// Output options shared by `weekly` and `topic`.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Content directory to write into (created if absent).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONTENT_DIR)]
    pub dir: PathBuf,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing post with different content.
    #[arg(long)]
    pub force: bool,
}

impl OutputArgs {
    pub fn to_publish_options(&self) -> PublishOptions {
        PublishOptions {
            content_dir: self.dir.clone(),
            dry_run: self.dry_run,
            force: self.force,
        }
    }
}

/// Print the outcome of a publish run in the shared ✓/✎/~/· style.
pub fn print_result(topic: &str, result: &WriteResult) {
    match result {
        WriteResult::Written { path } => {
            println!("{} generated post for '{topic}'", "✓".green());
            println!("  ✎  {}", path.display());
        }
        WriteResult::WouldWrite { path } => {
            println!("{} [dry-run] would generate post for '{topic}'", "✓".green());
            println!("  ~  {}", path.display());
        }
        WriteResult::Unchanged { path } => {
            println!("{} post for '{topic}' is up to date (unchanged)", "✓".green());
            println!("  ·  {}", path.display());
        }
    }
}
