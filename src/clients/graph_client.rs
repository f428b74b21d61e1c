//! # Graph Client
//!
//! Cloneable handle that forwards requests to a [`GraphActor`](crate::actor::GraphActor)
//! and waits for the answer on a oneshot channel.

use super::SocialGraph;
use crate::actor::{ClientError, GraphRequest};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::query::{FriendshipEdge, RankedUser};
use crate::store::HobbyOutcome;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for the graph actor. Cloning only clones the channel sender.
#[derive(Clone, Debug)]
pub struct GraphClient {
    sender: mpsc::Sender<GraphRequest>,
}

impl GraphClient {
    pub fn new(sender: mpsc::Sender<GraphRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> GraphRequest,
    ) -> Result<T, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }

    /// All users with their popularity, highest score first.
    #[instrument(skip(self))]
    pub async fn users_by_popularity(&self) -> Result<Vec<RankedUser>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| GraphRequest::UsersByPopularity { respond_to })
            .await
    }

    /// `(hobby, user count)` pairs sorted by hobby.
    #[instrument(skip(self))]
    pub async fn hobby_catalog(&self) -> Result<Vec<(String, usize)>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| GraphRequest::HobbyCatalog { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn friendship_edges(&self) -> Result<Vec<FriendshipEdge>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| GraphRequest::FriendshipEdges { respond_to })
            .await
    }
}

#[async_trait]
impl SocialGraph for GraphClient {
    type Error = ClientError;

    #[instrument(skip(self))]
    async fn create_user(&self, params: UserCreate) -> Result<User, ClientError> {
        debug!("Sending request");
        Ok(self
            .request(|respond_to| GraphRequest::CreateUser { params, respond_to })
            .await??)
    }

    #[instrument(skip(self))]
    async fn update_user(&self, id: &UserId, update: UserUpdate) -> Result<User, ClientError> {
        debug!("Sending request");
        let id = id.clone();
        Ok(self
            .request(|respond_to| GraphRequest::UpdateUser {
                id,
                update,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: &UserId) -> Result<User, ClientError> {
        debug!("Sending request");
        let id = id.clone();
        Ok(self
            .request(|respond_to| GraphRequest::DeleteUser { id, respond_to })
            .await??)
    }

    #[instrument(skip(self))]
    async fn link_users(&self, id: &UserId, friend_id: &UserId) -> Result<User, ClientError> {
        debug!("Sending request");
        let (id, friend_id) = (id.clone(), friend_id.clone());
        Ok(self
            .request(|respond_to| GraphRequest::LinkUsers {
                id,
                friend_id,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    async fn unlink_users(&self, id: &UserId, friend_id: &UserId) -> Result<bool, ClientError> {
        debug!("Sending request");
        let (id, friend_id) = (id.clone(), friend_id.clone());
        self.request(|respond_to| GraphRequest::UnlinkUsers {
            id,
            friend_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn add_hobby(&self, id: &UserId, hobby: String) -> Result<HobbyOutcome, ClientError> {
        debug!("Sending request");
        let id = id.clone();
        Ok(self
            .request(|respond_to| GraphRequest::AddHobby {
                id,
                hobby,
                respond_to,
            })
            .await??)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, ClientError> {
        debug!("Sending request");
        let id = id.clone();
        self.request(|respond_to| GraphRequest::GetUser { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| GraphRequest::ListUsers { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn popularity_score(&self, id: &UserId) -> Result<f64, ClientError> {
        debug!("Sending request");
        let id = id.clone();
        self.request(|respond_to| GraphRequest::PopularityScore { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn all_hobbies(&self) -> Result<Vec<String>, ClientError> {
        Ok(self
            .hobby_catalog()
            .await?
            .into_iter()
            .map(|(hobby, _)| hobby)
            .collect())
    }
}
