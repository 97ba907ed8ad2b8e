use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod paths;
mod ui;

use config::Config;

#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "Guess who follows whom from what they post.")]
#[command(version)]
struct Cli {
    /// Path to a murmur.toml config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Posts file layout (auto, json, jsonl). Overrides the config file.
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the follows graph inferred from a posts file
    Graph {
        #[arg(value_name = "POSTS")]
        posts: PathBuf,
    },

    /// Rank users by how many others follow them
    Rank {
        #[arg(value_name = "POSTS")]
        posts: PathBuf,

        /// Maximum number of users to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show the handles mentioned in a piece of text
    Mentions {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Print the posts matching every given filter
    Filter {
        #[arg(value_name = "POSTS")]
        posts: PathBuf,

        /// Only posts by this author
        #[arg(long)]
        author: Option<String>,

        /// Only posts containing one of these words (repeatable)
        #[arg(long = "word", value_name = "WORD")]
        words: Vec<String>,
    },

    /// Show the time range covered by a posts file
    Span {
        #[arg(value_name = "POSTS")]
        posts: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing for debug logs (hidden by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&paths::config_path(cli.config.as_deref()))?;
    if let Some(format) = cli.format.as_deref() {
        config.input.format = murmur_ingest::PostFormat::parse(format)
            .ok_or_else(|| anyhow::anyhow!("Unknown posts format: {}", format))?;
    }
    if cli.json {
        config.output.json = true;
    }

    match cli.command {
        Commands::Graph { posts } => commands::graph::run(&posts, &config),
        Commands::Rank { posts, limit } => {
            if limit.is_some() {
                config.ranking.limit = limit;
            }
            commands::rank::run(&posts, &config)
        }
        Commands::Mentions { text } => commands::mentions::run(&text, &config),
        Commands::Filter {
            posts,
            author,
            words,
        } => commands::filter::run(&posts, author.as_deref(), &words, &config),
        Commands::Span { posts } => commands::span::run(&posts, &config),
    }
}
