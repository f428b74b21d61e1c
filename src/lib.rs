//! # Social Graph
//!
//! > **Users, friendships, hobbies and a popularity score.**
//!
//! This crate is the domain core behind a social network view: an in-memory entity
//! store that guards the friendship rules, a scoring function that ranks users, and the
//! read views a presentation layer renders.
//!
//! ## 🏗️ Design
//!
//! ### The store is the only writer
//! [`GraphStore`](store::GraphStore) owns every [`User`](model::User). Users expose read
//! accessors only, so friendship symmetry, the no-self-link rule and the
//! delete-while-linked guard cannot be bypassed. Friends are stored as id sets on both
//! sides (an arena keyed by id), never as references, so the graph holds no cycles.
//!
//! ### Scoring and queries are pure
//! [`scoring`] and [`query`] are free functions over `&GraphStore`. They never fail and
//! never mutate.
//!
//! ### Concurrency via an actor
//! When several tasks share the graph, [`GraphActor`](actor::GraphActor) owns the store
//! in one Tokio task and handles requests one at a time, which makes every mutation a
//! critical section and every read a consistent snapshot. Callers talk to it through a
//! cloneable [`GraphClient`](clients::GraphClient).
//!
//! ### Type-safe errors
//! [`GraphError`](store::GraphError) classifies every rejection as validation, not
//! found or conflict ([`ErrorKind`](store::ErrorKind)).
//! [`ClientError`](actor::ClientError) adds the transport failures of the actor channel.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `User`, `UserId` and the create/update payloads
//! - [`store`]: the graph store and its errors
//! - [`scoring`]: popularity score and the "popular" classification
//! - [`query`]: hobby catalog, popularity ranking, score lookup, edge list
//! - [`actor`]: the graph actor, its messages and mock channel helpers
//! - [`clients`]: the [`SocialGraph`](clients::SocialGraph) contract and `GraphClient`
//! - [`lifecycle`]: `SocialSystem` startup/shutdown and tracing setup
//! - [`config`]: environment-driven runtime settings
//! - [`seed`]: the demo network
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use social_graph::model::UserCreate;
//! use social_graph::query::users_by_popularity;
//! use social_graph::store::GraphStore;
//!
//! let mut store = GraphStore::new();
//! let a = store.create_user(UserCreate::new("alice", 28, ["reading", "hiking"])).unwrap();
//! let b = store.create_user(UserCreate::new("bob", 32, ["reading"])).unwrap();
//! store.link_users(a.id(), b.id()).unwrap();
//!
//! let ranking = users_by_popularity(&store);
//! assert_eq!(ranking[0].popularity.score, 1.5);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod scoring;
pub mod seed;
pub mod store;
