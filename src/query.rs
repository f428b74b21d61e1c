//! # Query Layer
//!
//! Stateless read views derived from a [`GraphStore`]: the hobby catalog, the popularity
//! ranking, per-user score lookup and the friendship edge list used to draw the graph.

use crate::model::{User, UserId};
use crate::scoring::{self, Popularity};
use crate::store::GraphStore;
use serde::Serialize;
use std::collections::{btree_map, BTreeMap, HashSet};

/// Iterator over `(hobby, users holding it)` pairs in ascending hobby order.
pub type HobbyCounts<'a> = btree_map::IntoIter<&'a str, usize>;

/// Restartable view over the hobbies currently held by users.
///
/// Counts are tallied each time iteration starts, so a catalog can be walked any number
/// of times and nothing is computed until it is.
#[derive(Debug, Clone, Copy)]
pub struct HobbyCatalog<'a> {
    store: &'a GraphStore,
}

impl<'a> HobbyCatalog<'a> {
    pub fn iter(&self) -> HobbyCounts<'a> {
        let mut counts = BTreeMap::new();
        for user in self.store.users() {
            for hobby in user.hobbies() {
                *counts.entry(hobby.as_str()).or_insert(0) += 1;
            }
        }
        counts.into_iter()
    }
}

impl<'a> IntoIterator for HobbyCatalog<'a> {
    type Item = (&'a str, usize);
    type IntoIter = HobbyCounts<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &HobbyCatalog<'a> {
    type Item = (&'a str, usize);
    type IntoIter = HobbyCounts<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn hobby_catalog(store: &GraphStore) -> HobbyCatalog<'_> {
    HobbyCatalog { store }
}

/// Every distinct hobby in the network, sorted ascending.
pub fn all_hobbies(store: &GraphStore) -> Vec<String> {
    hobby_catalog(store)
        .iter()
        .map(|(hobby, _)| hobby.to_string())
        .collect()
}

/// A user paired with its popularity at the time of ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(flatten)]
    pub popularity: Popularity,
}

/// All users ordered by score, highest first.
///
/// Equal scores keep their insertion order.
pub fn users_by_popularity(store: &GraphStore) -> Vec<RankedUser> {
    let mut ranked: Vec<RankedUser> = store
        .users()
        .map(|user| RankedUser {
            popularity: scoring::popularity(user, store),
            user: user.clone(),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.popularity.score.total_cmp(&a.popularity.score));
    ranked
}

/// Score of the given user, or `0.0` when the id is unknown.
pub fn popularity_score(store: &GraphStore, id: &UserId) -> f64 {
    store
        .get(id)
        .map_or(0.0, |user| scoring::score(user, store))
}

/// One friendship, reported once per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendshipEdge {
    /// The endpoint created first.
    pub source: UserId,
    pub target: UserId,
}

/// Lists every friendship exactly once, walking users in insertion order.
pub fn friendship_edges(store: &GraphStore) -> Vec<FriendshipEdge> {
    let mut visited: HashSet<&UserId> = HashSet::new();
    let mut edges = Vec::new();
    for user in store.users() {
        visited.insert(user.id());
        for friend in user.friends() {
            if !visited.contains(friend) {
                edges.push(FriendshipEdge {
                    source: user.id().clone(),
                    target: friend.clone(),
                });
            }
        }
    }
    edges
}
