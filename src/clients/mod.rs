//! Client-side handles to the social graph.
//!
//! - [`SocialGraph`] is the contract the presentation layer programs against. Any
//!   backend (the in-process actor, a remote HTTP service) can implement it.
//! - [`GraphClient`] implements it by messaging a [`GraphActor`](crate::actor::GraphActor).

pub mod graph_client;
pub mod social_graph;

pub use graph_client::*;
pub use social_graph::*;
