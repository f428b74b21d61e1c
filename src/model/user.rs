use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identifier of a [`User`].
///
/// Ids are assigned by the [`GraphStore`](crate::store::GraphStore) at creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draws a fresh random (UUID v4) identifier.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A participant of the social network.
///
/// Fields are read-only from outside the crate: only the
/// [`GraphStore`](crate::store::GraphStore) builds users and mutates them, which is what
/// keeps friendships symmetric and free of dangling ids.
///
/// Serialized field names follow the JSON contract of the HTTP backend
/// (`username`, `age`, `hobbies`, `friends`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: String,
    age: u32,
    hobbies: BTreeSet<String>,
    friends: BTreeSet<UserId>,
    created_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        username: String,
        age: u32,
        hobbies: BTreeSet<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            hobbies,
            friends: BTreeSet::new(),
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Hobbies in ascending lexicographic order.
    pub fn hobbies(&self) -> &BTreeSet<String> {
        &self.hobbies
    }

    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_hobby(&self, hobby: &str) -> bool {
        self.hobbies.contains(hobby)
    }

    pub fn is_friend_of(&self, other: &UserId) -> bool {
        self.friends.contains(other)
    }

    /// Number of hobbies this user shares with `other` (exact, case-sensitive match).
    pub fn shared_hobbies(&self, other: &User) -> usize {
        self.hobbies.intersection(&other.hobbies).count()
    }

    pub(crate) fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub(crate) fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub(crate) fn set_hobbies(&mut self, hobbies: BTreeSet<String>) {
        self.hobbies = hobbies;
    }

    pub(crate) fn insert_hobby(&mut self, hobby: String) -> bool {
        self.hobbies.insert(hobby)
    }

    pub(crate) fn insert_friend(&mut self, friend: UserId) -> bool {
        self.friends.insert(friend)
    }

    pub(crate) fn remove_friend(&mut self, friend: &UserId) -> bool {
        self.friends.remove(friend)
    }
}

/// Payload for creating a new user.
///
/// Duplicate hobbies are collapsed before storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub age: u32,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl UserCreate {
    pub fn new<I, S>(username: impl Into<String>, age: u32, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            age,
            hobbies: hobbies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload for updating an existing user.
///
/// Only the fields that are `Some` are changed. `id`, `createdAt` and `friends` are not
/// settable this way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub age: Option<u32>,
    pub hobbies: Option<Vec<String>>,
}

impl UserUpdate {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = Some(hobbies.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.age.is_none() && self.hobbies.is_none()
    }
}
