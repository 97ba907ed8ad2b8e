//! Follows graph inference.
//!
//! An author is guessed to follow every other user they mention. The graph's
//! key set is every author plus every mentioned handle, so a user who is only
//! ever mentioned still appears with an empty follow-set.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::mentions::mentioned_users;
use crate::schema::{edge_count, FollowsGraph, Post};

/// Build the follows graph implied by a batch of posts.
///
/// The result depends only on the multiset of posts, not their order.
/// Self-mentions are dropped.
#[instrument(skip_all, fields(posts = posts.len()))]
pub fn guess_follows_graph(posts: &[Post]) -> FollowsGraph {
    let mut graph = FollowsGraph::new();

    for post in posts {
        let author = post.author_handle();
        let mentions = mentioned_users(post.text());

        debug!(
            "Post {} by {}: {} distinct mentions",
            post.id(),
            author,
            mentions.len()
        );

        for handle in mentions {
            if handle == author {
                continue;
            }
            graph.entry(handle.clone()).or_default();
            graph.entry(author.clone()).or_default().insert(handle);
        }

        graph.entry(author).or_default();
    }

    info!(
        "Built follows graph: {} users, {} edges",
        graph.len(),
        edge_count(&graph)
    );

    graph
}

/// Invert a follows graph into handle → set of followers.
///
/// The key set matches the input's. References to handles that are not keys
/// are skipped.
pub fn followers_of(graph: &FollowsGraph) -> FollowsGraph {
    let mut followers: FollowsGraph = graph
        .keys()
        .map(|handle| (handle.clone(), HashSet::new()))
        .collect();

    for (follower, follows) in graph {
        for followed in follows {
            match followers.get_mut(followed) {
                Some(set) => {
                    set.insert(follower.clone());
                }
                None => debug!("Skipping dangling follow {} -> {}", follower, followed),
            }
        }
    }

    followers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn post(id: u64, author: &str, text: &str) -> Post {
        Post::new(id, author, text, Utc::now())
    }

    fn set(handles: &[&str]) -> HashSet<String> {
        handles.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(guess_follows_graph(&[]).is_empty());
    }

    #[test]
    fn test_posts_without_mentions() {
        let posts = vec![
            post(1, "user1", "Hello World!"),
            post(2, "user2", "No mentions here."),
        ];
        let graph = guess_follows_graph(&posts);

        assert_eq!(graph.len(), 2);
        assert!(graph["user1"].is_empty());
        assert!(graph["user2"].is_empty());
    }

    #[test]
    fn test_single_mention() {
        let graph = guess_follows_graph(&[post(1, "user1", "Hello @user2!")]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph["user1"], set(&["user2"]));
        assert!(graph["user2"].is_empty());
    }

    #[test]
    fn test_multiple_mentions() {
        let graph = guess_follows_graph(&[post(1, "user1", "Hi @user2 and @user3!")]);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph["user1"], set(&["user2", "user3"]));
    }

    #[test]
    fn test_multiple_posts_from_one_user() {
        let posts = vec![
            post(1, "user1", "Hey @user2!"),
            post(2, "user1", "Hello again @user3!"),
        ];
        let graph = guess_follows_graph(&posts);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph["user1"], set(&["user2", "user3"]));
    }

    #[test]
    fn test_self_mention_excluded() {
        let graph = guess_follows_graph(&[post(1, "user1", "talking to myself @User1")]);

        assert_eq!(graph.len(), 1);
        assert!(graph["user1"].is_empty());
    }

    #[test]
    fn test_author_case_normalized() {
        let posts = vec![
            post(1, "Alyssa", "hi @BOB"),
            post(2, "ALYSSA", "hi @carol"),
            post(3, "bob", "hi @alyssa"),
        ];
        let graph = guess_follows_graph(&posts);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph["alyssa"], set(&["bob", "carol"]));
        assert_eq!(graph["bob"], set(&["alyssa"]));
        assert!(graph["carol"].is_empty());
    }

    #[test]
    fn test_every_followed_handle_is_a_key() {
        let posts = vec![
            post(1, "a", "@b @c"),
            post(2, "b", "@d"),
            post(3, "e", "@a @e"),
        ];
        let graph = guess_follows_graph(&posts);

        for follows in graph.values() {
            for handle in follows {
                assert!(graph.contains_key(handle), "{handle} missing as key");
            }
        }
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn test_order_independent_and_idempotent() {
        let base = Utc::now();
        let posts = vec![
            Post::new(1, "a", "@b", base),
            Post::new(2, "b", "@c @a", base + Duration::minutes(1)),
            Post::new(3, "a", "@c", base + Duration::minutes(2)),
        ];
        let mut reversed = posts.clone();
        reversed.reverse();

        let first = guess_follows_graph(&posts);
        assert_eq!(first, guess_follows_graph(&posts));
        assert_eq!(first, guess_follows_graph(&reversed));
    }

    #[test]
    fn test_followers_of() {
        let mut graph = FollowsGraph::new();
        graph.insert("user1".into(), set(&["user2", "user3"]));
        graph.insert("user2".into(), set(&["user3", "ghost"]));
        graph.insert("user3".into(), HashSet::new());

        let followers = followers_of(&graph);

        assert_eq!(followers.len(), 3);
        assert!(followers["user1"].is_empty());
        assert_eq!(followers["user2"], set(&["user1"]));
        assert_eq!(followers["user3"], set(&["user1", "user2"]));
        assert!(!followers.contains_key("ghost"));
    }
}
