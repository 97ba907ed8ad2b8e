//! Loading posts from disk.
//!
//! Posts arrive either as a single JSON array or as JSON lines (one object per
//! line). Every record is checked before it reaches the graph: the author must
//! be non-empty, the text may be empty.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, instrument};

// Re-export graph types for convenience
pub use murmur_graph::{FollowsGraph, Post};

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to read posts from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse posts in {} at line {line}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Post {id} in {} has an empty author", .path.display())]
    EmptyAuthor { path: PathBuf, id: u64 },
}

/// On-disk layout of a posts file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostFormat {
    /// Pick by file extension: `.jsonl` / `.ndjson` are JSON lines.
    #[default]
    Auto,
    /// A single JSON array of posts.
    Json,
    /// One JSON post object per line.
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl PostFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostFormat::Auto => "auto",
            PostFormat::Json => "json",
            PostFormat::Jsonl => "jsonl",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(PostFormat::Auto),
            "json" => Some(PostFormat::Json),
            "jsonl" | "ndjson" => Some(PostFormat::Jsonl),
            _ => None,
        }
    }

    /// Replace `Auto` with the concrete format implied by `path`.
    pub fn resolve(self, path: &Path) -> Self {
        if self != PostFormat::Auto {
            return self;
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                PostFormat::Jsonl
            }
            _ => PostFormat::Json,
        }
    }
}

/// A post as written on disk, before validation.
#[derive(Debug, Clone, Deserialize)]
struct PostRecord {
    id: u64,
    author: String,
    #[serde(default)]
    text: String,
    #[serde(alias = "created_at")]
    timestamp: DateTime<Utc>,
}

impl PostRecord {
    fn into_post(self, path: &Path) -> Result<Post> {
        if self.author.trim().is_empty() {
            return Err(IngestError::EmptyAuthor {
                path: path.to_path_buf(),
                id: self.id,
            });
        }
        Ok(Post::new(self.id, self.author, self.text, self.timestamp))
    }
}

/// Read and validate every post in `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_posts(path: &Path, format: PostFormat) -> Result<Vec<Post>> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = format.resolve(path);
    debug!("Parsing {} bytes as {}", contents.len(), format.as_str());

    let posts = parse_posts(&contents, format, path)?;
    info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Parse posts from an in-memory string. `origin` is only used in errors.
pub fn parse_posts(contents: &str, format: PostFormat, origin: &Path) -> Result<Vec<Post>> {
    let records = match format.resolve(origin) {
        PostFormat::Jsonl => parse_json_lines(contents, origin)?,
        _ => parse_json_array(contents, origin)?,
    };

    records
        .into_iter()
        .map(|record| record.into_post(origin))
        .collect()
}

fn parse_json_array(contents: &str, origin: &Path) -> Result<Vec<PostRecord>> {
    serde_json::from_str(contents).map_err(|source| IngestError::Parse {
        path: origin.to_path_buf(),
        line: source.line(),
        source,
    })
}

fn parse_json_lines(contents: &str, origin: &Path) -> Result<Vec<PostRecord>> {
    let mut records = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| IngestError::Parse {
            path: origin.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARRAY: &str = r#"[
        {"id": 1, "author": "alyssa", "text": "hi @bbitdiddle", "timestamp": "2016-02-17T10:00:00Z"},
        {"id": 2, "author": "bbitdiddle", "text": "", "created_at": "2016-02-17T11:00:00Z"}
    ]"#;

    fn write_fixture(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_resolve() {
        assert_eq!(PostFormat::Auto.resolve(Path::new("a.jsonl")), PostFormat::Jsonl);
        assert_eq!(PostFormat::Auto.resolve(Path::new("a.NDJSON")), PostFormat::Jsonl);
        assert_eq!(PostFormat::Auto.resolve(Path::new("a.json")), PostFormat::Json);
        assert_eq!(PostFormat::Auto.resolve(Path::new("posts")), PostFormat::Json);
        assert_eq!(PostFormat::Json.resolve(Path::new("a.jsonl")), PostFormat::Json);
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for format in [PostFormat::Auto, PostFormat::Json, PostFormat::Jsonl] {
            assert_eq!(PostFormat::parse(format.as_str()), Some(format));
        }
        assert_eq!(PostFormat::parse("ndjson"), Some(PostFormat::Jsonl));
        assert_eq!(PostFormat::parse("csv"), None);
    }

    #[test]
    fn test_load_json_array() {
        let file = write_fixture(".json", ARRAY);
        let posts = load_posts(file.path(), PostFormat::Auto).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author(), "alyssa");
        assert_eq!(posts[0].text(), "hi @bbitdiddle");
        assert_eq!(posts[1].text(), "");
        assert_eq!(posts[1].timestamp().to_rfc3339(), "2016-02-17T11:00:00+00:00");
    }

    #[test]
    fn test_load_json_lines_skips_blank_lines() {
        let contents = concat!(
            r#"{"id": 1, "author": "a", "text": "@b", "timestamp": "2016-02-17T10:00:00Z"}"#,
            "\n\n",
            r#"{"id": 2, "author": "b", "text": "@a", "timestamp": "2016-02-17T10:05:00Z"}"#,
            "\n",
        );
        let file = write_fixture(".jsonl", contents);
        let posts = load_posts(file.path(), PostFormat::Auto).unwrap();

        assert_eq!(posts.iter().map(Post::id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_json_lines_error_reports_line() {
        let contents = concat!(
            r#"{"id": 1, "author": "a", "text": "", "timestamp": "2016-02-17T10:00:00Z"}"#,
            "\n",
            "not json\n",
        );
        let err = parse_posts(contents, PostFormat::Jsonl, Path::new("feed.jsonl")).unwrap_err();

        match err {
            IngestError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_author_rejected() {
        let contents = r#"[{"id": 9, "author": "  ", "text": "hi", "timestamp": "2016-02-17T10:00:00Z"}]"#;
        let err = parse_posts(contents, PostFormat::Json, Path::new("posts.json")).unwrap_err();

        assert!(matches!(err, IngestError::EmptyAuthor { id: 9, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_posts(Path::new("/definitely/not/here.json"), PostFormat::Auto).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
