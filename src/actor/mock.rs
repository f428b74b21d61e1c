//! # Mock Channel Helpers
//!
//! Test a piece of code that talks to a [`GraphClient`] without running a real actor:
//! the test holds the receiving end, inspects each [`GraphRequest`] and answers it by
//! hand. This makes transport failures and store rejections easy to inject.
//!
//! Kept outside `#[cfg(test)]` so integration tests can use it too.
//!
//! ```rust
//! use social_graph::actor::mock::{create_mock_client, expect_link};
//! use social_graph::actor::ClientError;
//! use social_graph::clients::SocialGraph;
//! use social_graph::model::UserId;
//! use social_graph::store::GraphError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move {
//!         client.link_users(&UserId::from("a"), &UserId::from("a")).await
//!     });
//!
//!     let (id, _friend_id, responder) = expect_link(&mut receiver).await.unwrap();
//!     responder.send(Err(GraphError::SelfLink(id))).unwrap();
//!
//!     let result = task.await.unwrap();
//!     assert!(matches!(result, Err(ClientError::Graph(GraphError::SelfLink(_)))));
//! }
//! ```

use super::message::{GraphRequest, Response};
use crate::clients::GraphClient;
use crate::model::{User, UserCreate, UserId};
use tokio::sync::mpsc;

/// A client whose requests arrive on the returned receiver instead of an actor.
pub fn create_mock_client(buffer_size: usize) -> (GraphClient, mpsc::Receiver<GraphRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (GraphClient::new(sender), receiver)
}

/// Waits for the next request; `None` once every client is gone.
pub async fn next_request(receiver: &mut mpsc::Receiver<GraphRequest>) -> Option<GraphRequest> {
    receiver.recv().await
}

/// Waits for a `CreateUser` request. Any other request yields `None`.
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<GraphRequest>,
) -> Option<(UserCreate, Response<User>)> {
    match receiver.recv().await? {
        GraphRequest::CreateUser { params, respond_to } => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for a `LinkUsers` request. Any other request yields `None`.
pub async fn expect_link(
    receiver: &mut mpsc::Receiver<GraphRequest>,
) -> Option<(UserId, UserId, Response<User>)> {
    match receiver.recv().await? {
        GraphRequest::LinkUsers {
            id,
            friend_id,
            respond_to,
        } => Some((id, friend_id, respond_to)),
        _ => None,
    }
}
