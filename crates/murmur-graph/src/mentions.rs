//! Mention extraction from post text.
//!
//! A mention is `@` followed by one or more handle characters
//! (`A-Z`, `a-z`, `0-9`, `_`, `-`). The `@` must start the text or follow a
//! character outside the handle alphabet, so `bitdiddle@mit.edu` is not a
//! mention of `mit`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{is_handle_char, normalize_handle, Post};

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_-]+)").expect("mention pattern is valid"));

/// Distinct handles mentioned in `text`, lowercased.
pub fn mentioned_users(text: &str) -> HashSet<String> {
    let mut handles = HashSet::new();

    for cap in MENTION_RE.captures_iter(text) {
        let (Some(marker), Some(handle)) = (cap.get(0), cap.get(1)) else {
            continue;
        };

        // regex has no look-behind, so check the boundary by hand
        let preceded_by_handle = text[..marker.start()]
            .chars()
            .next_back()
            .is_some_and(is_handle_char);
        if preceded_by_handle {
            continue;
        }

        handles.insert(normalize_handle(handle.as_str()));
    }

    handles
}

/// Union of the handles mentioned across a batch of posts.
pub fn mentioned_users_in(posts: &[Post]) -> HashSet<String> {
    posts
        .iter()
        .flat_map(|post| mentioned_users(post.text()))
        .collect()
}
