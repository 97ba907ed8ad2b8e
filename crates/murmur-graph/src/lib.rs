//! Murmur Graph - who follows whom, guessed from what people post.
//!
//! This crate is the pure core of Murmur. It performs no I/O and keeps no
//! state between calls. It includes:
//!
//! - **Mentions**: `@handle` extraction from post text
//! - **Follows**: inference of the follows graph from a batch of posts
//! - **Influence**: ranking users by how many others follow them
//! - **Filter / Extract**: helpers for narrowing and summarizing a batch
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use murmur_graph::{guess_follows_graph, influencers, Post};
//!
//! let posts = vec![
//!     Post::new(1, "alyssa", "lunch with @bbitdiddle?", Utc::now()),
//!     Post::new(2, "carol", "@BBitDiddle congrats!", Utc::now()),
//! ];
//!
//! let graph = guess_follows_graph(&posts);
//! assert_eq!(graph.len(), 3);
//!
//! let ranked = influencers(&graph);
//! assert_eq!(ranked[0], "bbitdiddle");
//! ```

pub mod extract;
pub mod filter;
pub mod follows;
pub mod influence;
pub mod mentions;
pub mod schema;

// Re-export commonly used types
pub use extract::timespan;
pub use follows::{followers_of, guess_follows_graph};
pub use influence::{influence_scores, influencers};
pub use mentions::{mentioned_users, mentioned_users_in};
pub use schema::{
    edge_count, is_handle_char, normalize_handle, FollowsGraph, GraphError, Post, Timespan,
};
