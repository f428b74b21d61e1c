//! Pure data structures for the social graph: the [`User`] entity and its payloads.

pub mod user;

pub use user::*;
