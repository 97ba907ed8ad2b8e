//! Core types for the follows graph.
//!
//! This module defines the values that flow through Murmur:
//! - `Post`: an immutable record supplied by the caller
//! - `FollowsGraph`: handle → set of handles that user is inferred to follow
//! - `Timespan`: a closed interval of time covering a batch of posts
//!
//! Handles are compared case-insensitively. Every handle stored in a graph is
//! in its canonical (lowercase) form, produced by [`normalize_handle`].

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mapping from a canonical handle to the canonical handles it follows.
pub type FollowsGraph = HashMap<String, HashSet<String>>;

/// Errors raised by the few fallible constructors in this crate.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A timespan was built with its end before its start.
    #[error("Invalid timespan: start {start} is after end {end}")]
    InvalidTimespan {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A single post by one author.
///
/// Posts are built with [`Post::new`]; reading them from disk (and rejecting
/// empty authors) is `murmur-ingest`'s job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Author handle as supplied, not case-normalized.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Canonical form of the author handle.
    pub fn author_handle(&self) -> String {
        normalize_handle(&self.author)
    }
}

/// A closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimespan")]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire form of a `Timespan`.
#[derive(Deserialize)]
struct RawTimespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimespan> for Timespan {
    type Error = GraphError;

    fn try_from(raw: RawTimespan) -> Result<Self, Self::Error> {
        Timespan::new(raw.start, raw.end)
    }
}

impl Timespan {
    /// Create a timespan, rejecting `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, GraphError> {
        if start > end {
            return Err(GraphError::InvalidTimespan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` lies within the interval, bounds included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Canonical (lowercase) form of a handle.
pub fn normalize_handle(handle: &str) -> String {
    handle.to_lowercase()
}

/// Whether `c` belongs to the handle alphabet.
pub fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Number of follow edges in a graph.
pub fn edge_count(graph: &FollowsGraph) -> usize {
    graph.values().map(HashSet::len).sum()
}
