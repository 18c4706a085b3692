//! HyperHash — MDX blog post generator for the marketing site.
//!
//! # Usage
//!
//! ```text
//! hyperhash weekly [--dir <path>] [--dry-run] [--force]
//! hyperhash topic "<text>" [--dir <path>] [--dry-run] [--force]
//! hyperhash topics [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{topic::TopicArgs, topics::TopicsArgs, weekly::WeeklyArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "hyperhash",
    version,
    about = "Generate MDX blog posts for the HyperHash marketing site",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate this week's post from a random catalog topic.
    Weekly(WeeklyArgs),

    /// Generate a post for a specific topic.
    Topic(TopicArgs),

    /// List the weekly topic catalog.
    Topics(TopicsArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Weekly(args)) => args.run(),
        Some(Commands::Topic(args)) => args.run(),
        Some(Commands::Topics(args)) => args.run(),
        None => {
            // Bare invocation is a help request, not an error.
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
