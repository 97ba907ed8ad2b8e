//! Influence ranking.
//!
//! A user's influence is their in-degree in the follows graph: the number of
//! distinct users whose follow-set contains them.

use std::cmp::Ordering;

use tracing::info;

use crate::follows::followers_of;
use crate::schema::FollowsGraph;

/// Every key of `graph`, most-followed first.
///
/// Ties are ordered by handle so the output is deterministic.
pub fn influencers(graph: &FollowsGraph) -> Vec<String> {
    influence_scores(graph)
        .into_iter()
        .map(|(handle, _)| handle)
        .collect()
}

/// Every key of `graph` paired with its in-degree, ordered as [`influencers`].
///
/// Followed handles that are not keys of `graph` are not counted and are not
/// ranked.
pub fn influence_scores(graph: &FollowsGraph) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = followers_of(graph)
        .into_iter()
        .map(|(handle, followers)| (handle, followers.len()))
        .collect();
    ranked.sort_by(by_influence);

    if let Some((top, count)) = ranked.first() {
        info!(
            "Ranked {} users, top is {} with {} followers",
            ranked.len(),
            top,
            count
        );
    }

    ranked
}

fn by_influence(a: &(String, usize), b: &(String, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
