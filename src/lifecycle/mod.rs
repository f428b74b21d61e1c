//! # System Lifecycle
//!
//! Starting, wiring and stopping the graph actor, plus logging setup.
//!
//! - [`SocialSystem`] spawns a [`GraphActor`](crate::actor::GraphActor) and exposes its
//!   client; [`SocialSystem::shutdown`] drops the client and waits for the actor.
//! - [`setup_tracing`] installs the log subscriber, filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod social_system;
pub mod tracing;

pub use social_system::*;
pub use self::tracing::*;
