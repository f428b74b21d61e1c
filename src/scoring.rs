//! # Popularity Scoring
//!
//! ```text
//! score = |friends| + 0.5 × Σ_{f ∈ friends} |hobbies ∩ f.hobbies|
//! ```
//!
//! Friend count dominates; shared hobbies break ties in favour of users whose
//! connections actually have something in common. Shared hobbies are counted per friend,
//! so three friends who all read contribute three matches.
//!
//! Scoring is total: a friend id missing from the store is skipped.

use crate::model::User;
use crate::store::GraphStore;
use serde::Serialize;

/// Weight of one shared hobby relative to one friend.
pub const SHARED_HOBBY_WEIGHT: f64 = 0.5;

/// Scores strictly above this mark a user as popular.
pub const POPULARITY_THRESHOLD: f64 = 5.0;

/// A score together with its popular/not-popular classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Popularity {
    pub score: f64,
    pub popular: bool,
}

impl Popularity {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            popular: is_popular(score),
        }
    }
}

/// Computes the popularity score of `user` against the current store contents.
pub fn score(user: &User, store: &GraphStore) -> f64 {
    let shared: usize = user
        .friends()
        .iter()
        .filter_map(|id| store.get(id))
        .map(|friend| user.shared_hobbies(friend))
        .sum();
    user.friends().len() as f64 + SHARED_HOBBY_WEIGHT * shared as f64
}

pub fn is_popular(score: f64) -> bool {
    score > POPULARITY_THRESHOLD
}

pub fn popularity(user: &User, store: &GraphStore) -> Popularity {
    Popularity::from_score(score(user, store))
}
