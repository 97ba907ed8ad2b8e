use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use murmur_graph::{edge_count, guess_follows_graph, FollowsGraph};

use crate::config::Config;
use crate::ui;

pub fn run(posts_path: &Path, config: &Config) -> Result<()> {
    let posts = super::load(posts_path, config)?;
    let graph = guess_follows_graph(&posts);
    let sorted = sorted_graph(&graph);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
        return Ok(());
    }

    ui::header(&format!(
        "Follows graph: {} users, {} edges",
        graph.len(),
        edge_count(&graph)
    ));
    for (handle, follows) in &sorted {
        let targets: Vec<&str> = follows.iter().map(String::as_str).collect();
        ui::edge_row(handle, &targets);
    }
    println!();

    Ok(())
}

/// Graph with keys and follow-sets in lexicographic order, for stable output.
pub fn sorted_graph(graph: &FollowsGraph) -> BTreeMap<String, Vec<String>> {
    graph
        .iter()
        .map(|(handle, follows)| {
            let mut follows: Vec<String> = follows.iter().cloned().collect();
            follows.sort();
            (handle.clone(), follows)
        })
        .collect()
}
