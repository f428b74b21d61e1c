//! Demo network used by the binary and by integration tests.

use crate::clients::SocialGraph;
use crate::model::{UserCreate, UserId};
use crate::store::{GraphError, GraphStore};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// `(username, age, hobbies)` of the demo users, in creation order.
pub const DEMO_USERS: [(&str, u32, &[&str]); 5] = [
    ("alice_wonder", 28, &["reading", "hiking", "photography"]),
    ("bob_builder", 32, &["coding", "gaming", "music"]),
    ("carol_creative", 25, &["painting", "reading", "yoga"]),
    ("david_dev", 30, &["coding", "hiking", "cooking"]),
    ("emma_explorer", 27, &["traveling", "photography", "yoga"]),
];

/// `createdAt` dates (year, month, day) of the demo users, in [`DEMO_USERS`] order.
pub const DEMO_CREATED_AT: [(i32, u32, u32); 5] = [
    (2024, 1, 15),
    (2024, 2, 10),
    (2024, 3, 5),
    (2024, 1, 20),
    (2024, 2, 28),
];

/// Friendships between demo users, as indices into [`DEMO_USERS`].
pub const DEMO_FRIENDSHIPS: [(usize, usize); 4] = [(0, 1), (0, 2), (1, 3), (2, 4)];

/// Creates the demo users and friendships through any backend.
///
/// Returns the ids in [`DEMO_USERS`] order.
pub async fn seed_demo_network<G>(graph: &G) -> Result<Vec<UserId>, G::Error>
where
    G: SocialGraph + ?Sized,
{
    let mut ids = Vec::with_capacity(DEMO_USERS.len());
    for (username, age, hobbies) in DEMO_USERS {
        let user = graph
            .create_user(UserCreate::new(username, age, hobbies.iter().copied()))
            .await?;
        ids.push(user.id().clone());
    }
    for (a, b) in DEMO_FRIENDSHIPS {
        graph.link_users(&ids[a], &ids[b]).await?;
    }
    info!(
        users = ids.len(),
        friendships = DEMO_FRIENDSHIPS.len(),
        "Demo network seeded"
    );
    Ok(ids)
}

/// Builds a store holding the demo network, with each user's `createdAt` set to its
/// [`DEMO_CREATED_AT`] date and random ids.
///
/// Returns the store and the ids in [`DEMO_USERS`] order.
pub fn demo_store() -> Result<(GraphStore, Vec<UserId>), GraphError> {
    let dates: Vec<DateTime<Utc>> = DEMO_CREATED_AT
        .iter()
        .filter_map(|&(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single())
        .collect();
    let next = AtomicUsize::new(0);
    let clock = move || {
        let i = next.fetch_add(1, Ordering::SeqCst);
        dates.get(i).copied().unwrap_or_else(Utc::now)
    };
    let mut store = GraphStore::with_sources(UserId::random, clock);

    let mut ids = Vec::with_capacity(DEMO_USERS.len());
    for (username, age, hobbies) in DEMO_USERS {
        let user = store.create_user(UserCreate::new(username, age, hobbies.iter().copied()))?;
        ids.push(user.id().clone());
    }
    for (a, b) in DEMO_FRIENDSHIPS {
        store.link_users(&ids[a], &ids[b])?;
    }
    info!(users = ids.len(), friendships = DEMO_FRIENDSHIPS.len(), "Demo store built");
    Ok((store, ids))
}
