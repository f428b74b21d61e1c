//! # Graph Messages
//!
//! Requests sent from a [`GraphClient`](crate::clients::GraphClient) to the
//! [`GraphActor`](super::GraphActor). Each request carries a oneshot channel for its
//! answer.
//!
//! Mutations answer with `Result<_, GraphError>`; reads cannot fail and answer with the
//! value itself.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::query::{FriendshipEdge, RankedUser};
use crate::store::{GraphError, HobbyOutcome};
use tokio::sync::oneshot;

/// Response channel for operations that can be rejected by the store.
pub type Response<T> = oneshot::Sender<Result<T, GraphError>>;

/// Response channel for reads.
pub type Reply<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum GraphRequest {
    CreateUser {
        params: UserCreate,
        respond_to: Response<User>,
    },
    UpdateUser {
        id: UserId,
        update: UserUpdate,
        respond_to: Response<User>,
    },
    DeleteUser {
        id: UserId,
        respond_to: Response<User>,
    },
    LinkUsers {
        id: UserId,
        friend_id: UserId,
        respond_to: Response<User>,
    },
    UnlinkUsers {
        id: UserId,
        friend_id: UserId,
        respond_to: Reply<bool>,
    },
    AddHobby {
        id: UserId,
        hobby: String,
        respond_to: Response<HobbyOutcome>,
    },
    GetUser {
        id: UserId,
        respond_to: Reply<Option<User>>,
    },
    ListUsers {
        respond_to: Reply<Vec<User>>,
    },
    PopularityScore {
        id: UserId,
        respond_to: Reply<f64>,
    },
    UsersByPopularity {
        respond_to: Reply<Vec<RankedUser>>,
    },
    HobbyCatalog {
        respond_to: Reply<Vec<(String, usize)>>,
    },
    FriendshipEdges {
        respond_to: Reply<Vec<FriendshipEdge>>,
    },
}
