//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable.
//!
//! ## What Gets Logged
//!
//! - **Actor lifecycle** (`info`): startup, shutdown and final store size
//! - **Mutations** (`info`): `Created`, `Updated`, `Deleted`, `Linked`, `Unlinked`,
//!   `Hobby added` with `user_id` / `friend_id` fields and the store size
//! - **Rejections** (`warn`): the operation name, ids and the error message
//! - **Requests and reads** (`debug`): full payloads, scores, lookups
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=social_graph::store=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, seeding the demo network and trying to delete a linked user
//! prints:
//!
//! ```text
//! INFO Graph actor started size=0
//! INFO Created user_id=6f0c… size=1
//! ...
//! INFO Linked user_id=6f0c… friend_id=a81e…
//! INFO Demo network seeded users=5 friendships=4
//! WARN Rejected op="delete_user" user_id=6f0c… error=Cannot delete user 6f0c… with 2 existing friend(s); unlink friends first
//! ```
//!
//! The `?` sigil in `debug!(?params, "Create")` records a field through its `Debug`
//! representation; `%` uses `Display`.

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // ids and op names carry the context
        .compact()
        .init();
}
