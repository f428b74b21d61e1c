use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::store::HobbyOutcome;
use async_trait::async_trait;

/// The operations a social graph backend offers to its callers.
///
/// Semantics follow [`GraphStore`](crate::store::GraphStore): linking an existing pair
/// is a conflict, unlinking a missing pair is a no-op, deleting a user with friends is a
/// conflict, and `popularity_score` of an unknown id is `0.0`.
#[async_trait]
pub trait SocialGraph: Send + Sync {
    /// Backend error type; store rejections must stay distinguishable from transport
    /// failures.
    type Error: std::error::Error + Send + Sync + 'static;

    async fn create_user(&self, params: UserCreate) -> Result<User, Self::Error>;

    async fn update_user(&self, id: &UserId, update: UserUpdate) -> Result<User, Self::Error>;

    async fn delete_user(&self, id: &UserId) -> Result<User, Self::Error>;

    async fn link_users(&self, id: &UserId, friend_id: &UserId) -> Result<User, Self::Error>;

    /// Returns whether a friendship was removed.
    async fn unlink_users(&self, id: &UserId, friend_id: &UserId) -> Result<bool, Self::Error>;

    async fn add_hobby(&self, id: &UserId, hobby: String) -> Result<HobbyOutcome, Self::Error>;

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, Self::Error>;

    /// All users in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Self::Error>;

    async fn popularity_score(&self, id: &UserId) -> Result<f64, Self::Error>;

    /// Distinct hobbies, sorted ascending.
    async fn all_hobbies(&self) -> Result<Vec<String>, Self::Error>;
}
