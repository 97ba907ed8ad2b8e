//! Post filters.
//!
//! Each filter returns the matching posts in input order and leaves the input
//! untouched.

use crate::schema::{normalize_handle, Post, Timespan};

/// Posts whose author is `author`, compared case-insensitively.
pub fn written_by(posts: &[Post], author: &str) -> Vec<Post> {
    let author = normalize_handle(author);
    posts
        .iter()
        .filter(|post| post.author_handle() == author)
        .cloned()
        .collect()
}

/// Posts sent within `span`, bounds included.
pub fn in_timespan(posts: &[Post], span: &Timespan) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| span.contains(post.timestamp()))
        .cloned()
        .collect()
}

/// Posts containing at least one of `words` as a whole word.
///
/// Words are split on whitespace and compared case-insensitively.
pub fn containing<S: AsRef<str>>(posts: &[Post], words: &[S]) -> Vec<Post> {
    let wanted: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|post| {
            post.text()
                .split_whitespace()
                .any(|word| wanted.contains(&word.to_lowercase()))
        })
        .cloned()
        .collect()
}
