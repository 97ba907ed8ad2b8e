use std::path::Path;

use anyhow::Result;
use murmur_graph::timespan;

use crate::config::Config;
use crate::ui;

pub fn run(posts_path: &Path, config: &Config) -> Result<()> {
    let posts = super::load(posts_path, config)?;
    let span = timespan(&posts);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&span)?);
        return Ok(());
    }

    match span {
        Some(span) => {
            ui::success(&format!("{} posts", posts.len()));
            ui::info(&format!("from {}", span.start().to_rfc3339()));
            ui::info(&format!("to   {}", span.end().to_rfc3339()));
        }
        None => ui::error("No posts."),
    }

    Ok(())
}
