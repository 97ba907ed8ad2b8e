pub mod filter;
pub mod graph;
pub mod mentions;
pub mod rank;
pub mod span;

use std::path::Path;

use anyhow::{Context, Result};
use murmur_graph::Post;

use crate::config::Config;

/// Load the posts file named on the command line.
pub fn load(path: &Path, config: &Config) -> Result<Vec<Post>> {
    murmur_ingest::load_posts(path, config.input.format)
        .with_context(|| format!("Failed to load posts from {}", path.display()))
}
