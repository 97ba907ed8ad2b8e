use std::path::Path;

use anyhow::Result;
use murmur_graph::{guess_follows_graph, influence_scores};
use serde::Serialize;

use crate::config::Config;
use crate::ui;

#[derive(Debug, Serialize, PartialEq)]
struct RankEntry {
    rank: usize,
    handle: String,
    followers: usize,
}

pub fn run(posts_path: &Path, config: &Config) -> Result<()> {
    let posts = super::load(posts_path, config)?;
    let graph = guess_follows_graph(&posts);
    let entries = rank_entries(influence_scores(&graph), config.ranking.limit);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        ui::error("No users found.");
        return Ok(());
    }

    ui::header(&format!("Top {} of {} users", entries.len(), graph.len()));
    for entry in &entries {
        let followers = config.ranking.show_scores.then_some(entry.followers);
        ui::rank_row(entry.rank, &entry.handle, followers);
    }
    println!();

    Ok(())
}

fn rank_entries(scores: Vec<(String, usize)>, limit: Option<usize>) -> Vec<RankEntry> {
    scores
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(idx, (handle, followers))| RankEntry {
            rank: idx + 1,
            handle,
            followers,
        })
        .collect()
}
