//! # Graph Actor
//!
//! Serialises all access to a [`GraphStore`] through one Tokio task.
//!
//! The actor owns the store and the receiving end of an mpsc channel and handles one
//! [`GraphRequest`] at a time. That makes every mutation a critical section without any
//! lock: validation and the symmetric friendship write of `link_users` can never
//! interleave with another request. Reads are answered from inside the same loop with
//! owned copies, so a caller never observes a half-applied write.
//!
//! ```rust
//! use social_graph::actor::GraphActor;
//! use social_graph::clients::SocialGraph;
//! use social_graph::model::UserCreate;
//! use social_graph::store::GraphStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = GraphActor::new(16, GraphStore::new());
//!     let handle = tokio::spawn(actor.run());
//!
//!     let alice = client.create_user(UserCreate::new("alice", 28, ["reading"])).await.unwrap();
//!     assert_eq!(client.list_users().await.unwrap().len(), 1);
//!
//!     drop(client);
//!     let store = handle.await.unwrap();
//!     assert!(store.contains(alice.id()));
//! }
//! ```

pub mod error;
pub mod message;
pub mod mock;

pub use error::*;
pub use message::*;

use crate::clients::GraphClient;
use crate::query;
use crate::store::GraphStore;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The server half: owns the store and processes requests sequentially.
pub struct GraphActor {
    receiver: mpsc::Receiver<GraphRequest>,
    store: GraphStore,
}

impl GraphActor {
    /// Creates the actor around `store` and the client used to reach it.
    ///
    /// `buffer_size` is the mpsc capacity; senders wait when it is full. A capacity of
    /// zero is raised to one.
    pub fn new(buffer_size: usize, store: GraphStore) -> (Self, GraphClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, store };
        (actor, GraphClient::new(sender))
    }

    /// Processes requests until every client is dropped, then hands the store back.
    pub async fn run(mut self) -> GraphStore {
        info!(size = self.store.len(), "Graph actor started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(request);
        }

        info!(size = self.store.len(), "Shutdown");
        self.store
    }

    fn handle(&mut self, request: GraphRequest) {
        // A caller that gave up on its answer is not an error for the actor.
        match request {
            GraphRequest::CreateUser { params, respond_to } => {
                let _ = respond_to.send(self.store.create_user(params));
            }
            GraphRequest::UpdateUser {
                id,
                update,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.update_user(&id, update));
            }
            GraphRequest::DeleteUser { id, respond_to } => {
                let _ = respond_to.send(self.store.delete_user(&id));
            }
            GraphRequest::LinkUsers {
                id,
                friend_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.link_users(&id, &friend_id));
            }
            GraphRequest::UnlinkUsers {
                id,
                friend_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.unlink_users(&id, &friend_id));
            }
            GraphRequest::AddHobby {
                id,
                hobby,
                respond_to,
            } => {
                let _ = respond_to.send(self.store.add_hobby(&id, hobby));
            }
            GraphRequest::GetUser { id, respond_to } => {
                let user = self.store.get(&id).cloned();
                debug!(user_id = %id, found = user.is_some(), "Get");
                let _ = respond_to.send(user);
            }
            GraphRequest::ListUsers { respond_to } => {
                let _ = respond_to.send(self.store.list_users());
            }
            GraphRequest::PopularityScore { id, respond_to } => {
                let score = query::popularity_score(&self.store, &id);
                debug!(user_id = %id, score, "Score");
                let _ = respond_to.send(score);
            }
            GraphRequest::UsersByPopularity { respond_to } => {
                debug!("Rank by popularity");
                let _ = respond_to.send(query::users_by_popularity(&self.store));
            }
            GraphRequest::HobbyCatalog { respond_to } => {
                let catalog = query::hobby_catalog(&self.store)
                    .iter()
                    .map(|(hobby, count)| (hobby.to_string(), count))
                    .collect::<Vec<_>>();
                debug!(hobbies = catalog.len(), "Hobby catalog");
                let _ = respond_to.send(catalog);
            }
            GraphRequest::FriendshipEdges { respond_to } => {
                debug!("Friendship edges");
                let _ = respond_to.send(query::friendship_edges(&self.store));
            }
        }
    }
}
