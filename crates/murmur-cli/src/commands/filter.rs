use std::path::Path;

use anyhow::Result;
use console::style;
use murmur_graph::filter::{containing, written_by};
use murmur_graph::Post;

use crate::config::Config;
use crate::ui;

pub fn run(posts_path: &Path, author: Option<&str>, words: &[String], config: &Config) -> Result<()> {
    let posts = super::load(posts_path, config)?;
    let total = posts.len();
    let matched = apply(posts, author, words);

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    ui::header(&format!("{} of {} posts match", matched.len(), total));
    for post in &matched {
        println!(
            "  {} {} {}",
            style(post.timestamp().format("%Y-%m-%d %H:%M")).dim(),
            style(format!("@{}", post.author())).cyan(),
            post.text()
        );
    }
    println!();

    Ok(())
}

/// Narrow `posts` by every filter that was given.
fn apply(posts: Vec<Post>, author: Option<&str>, words: &[String]) -> Vec<Post> {
    let posts = match author {
        Some(author) => written_by(&posts, author),
        None => posts,
    };
    if words.is_empty() {
        return posts;
    }
    containing(&posts, words)
}
