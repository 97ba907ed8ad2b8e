//! Batch-level facts about a list of posts.

use crate::schema::{Post, Timespan};

/// Smallest timespan containing every post, or `None` for an empty batch.
pub fn timespan(posts: &[Post]) -> Option<Timespan> {
    let start = posts.iter().map(Post::timestamp).min()?;
    let end = posts.iter().map(Post::timestamp).max()?;
    Timespan::new(start, end).ok()
}
