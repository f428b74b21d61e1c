//! # Graph Store
//!
//! The authoritative in-memory collection of [`User`]s and the only place users are
//! created or mutated. Every operation either applies completely or leaves the store
//! exactly as it was.
//!
//! Relationship rules enforced here:
//! - friendship is symmetric and never points at the user itself
//! - friend and hobby sets hold no duplicates
//! - a user who still has friends cannot be deleted, so no friend id ever dangles
//!
//! ```rust
//! use social_graph::model::UserCreate;
//! use social_graph::store::GraphStore;
//!
//! let mut store = GraphStore::new();
//! let alice = store.create_user(UserCreate::new("alice", 28, ["reading"])).unwrap();
//! let bob = store.create_user(UserCreate::new("bob", 32, ["reading"])).unwrap();
//!
//! store.link_users(alice.id(), bob.id()).unwrap();
//! assert!(store.delete_user(alice.id()).is_err());
//!
//! store.unlink_users(alice.id(), bob.id());
//! store.delete_user(alice.id()).unwrap();
//! ```

pub mod error;

pub use error::*;

use crate::model::{User, UserCreate, UserId, UserUpdate};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, info, warn};

/// Youngest accepted age.
pub const MIN_AGE: u32 = 1;
/// Oldest accepted age.
pub const MAX_AGE: u32 = 150;

/// Result of [`GraphStore::add_hobby`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HobbyOutcome {
    Added,
    /// The user already had the hobby; nothing changed.
    AlreadyPresent,
}

type IdSource = Box<dyn FnMut() -> UserId + Send>;
type Clock = Box<dyn Fn() -> DateTime<Utc> + Send>;

/// In-memory arena of users keyed by id.
///
/// Friendships are stored as id sets on both users rather than as references, so the
/// structure holds no cycles; symmetry is maintained by the operations below.
pub struct GraphStore {
    users: HashMap<UserId, User>,
    /// Insertion order, used for every listing.
    order: Vec<UserId>,
    next_id: IdSource,
    clock: Clock,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("users", &self.order.len())
            .finish_non_exhaustive()
    }
}

impl GraphStore {
    /// Creates an empty store with random UUID ids and the system clock.
    pub fn new() -> Self {
        Self::with_sources(UserId::random, Utc::now)
    }

    /// Creates an empty store with an injected id generator and clock.
    ///
    /// The generator should be collision resistant; an id already held by a live user is
    /// discarded and drawn again.
    pub fn with_sources(
        next_id: impl FnMut() -> UserId + Send + 'static,
        clock: impl Fn() -> DateTime<Utc> + Send + 'static,
    ) -> Self {
        Self {
            users: HashMap::new(),
            order: Vec::new(),
            next_id: Box::new(next_id),
            clock: Box::new(clock),
        }
    }

    // --- Reads ---

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates over all users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.order.iter().filter_map(|id| self.users.get(id))
    }

    /// Owned snapshot of all users in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        debug!(size = self.users.len(), "List users");
        self.users().cloned().collect()
    }

    // --- Mutations ---

    /// Creates a user with a fresh id, no friends and `createdAt` set to now.
    pub fn create_user(&mut self, params: UserCreate) -> Result<User, GraphError> {
        debug!(?params, "Create");
        self.try_create(params)
            .inspect_err(|e| warn!(op = "create_user", error = %e, "Rejected"))
    }

    fn try_create(&mut self, params: UserCreate) -> Result<User, GraphError> {
        validate_username(&params.username)?;
        validate_age(params.age)?;
        let hobbies = params.hobbies.into_iter().collect();

        let id = self.fresh_id();
        let user = User::new(id.clone(), params.username, params.age, hobbies, (self.clock)());
        self.users.insert(id.clone(), user.clone());
        self.order.push(id.clone());
        info!(user_id = %id, size = self.users.len(), "Created");
        Ok(user)
    }

    fn fresh_id(&mut self) -> UserId {
        loop {
            let id = (self.next_id)();
            if !self.users.contains_key(&id) {
                return id;
            }
            warn!(user_id = %id, "Generated id already in use, drawing again");
        }
    }

    /// Changes the provided fields among username, age and hobbies.
    pub fn update_user(&mut self, id: &UserId, update: UserUpdate) -> Result<User, GraphError> {
        debug!(user_id = %id, ?update, "Update");
        self.try_update(id, update)
            .inspect_err(|e| warn!(op = "update_user", user_id = %id, error = %e, "Rejected"))
    }

    fn try_update(&mut self, id: &UserId, update: UserUpdate) -> Result<User, GraphError> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;

        // Validate everything before the first write.
        if let Some(username) = &update.username {
            validate_username(username)?;
        }
        if let Some(age) = update.age {
            validate_age(age)?;
        }
        if update.is_empty() {
            debug!(user_id = %id, "Nothing to update");
            return Ok(user.clone());
        }
        let hobbies: Option<BTreeSet<String>> = update.hobbies.map(|h| h.into_iter().collect());

        if let Some(username) = update.username {
            user.set_username(username);
        }
        if let Some(age) = update.age {
            user.set_age(age);
        }
        if let Some(hobbies) = hobbies {
            user.set_hobbies(hobbies);
        }
        info!(user_id = %id, "Updated");
        Ok(user.clone())
    }

    /// Removes a user who has no friends left and returns it.
    pub fn delete_user(&mut self, id: &UserId) -> Result<User, GraphError> {
        debug!(user_id = %id, "Delete");
        self.try_delete(id)
            .inspect_err(|e| warn!(op = "delete_user", user_id = %id, error = %e, "Rejected"))
    }

    fn try_delete(&mut self, id: &UserId) -> Result<User, GraphError> {
        let user = self
            .users
            .get(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        if !user.friends().is_empty() {
            return Err(GraphError::HasFriends {
                id: id.clone(),
                friends: user.friends().len(),
            });
        }

        let removed = self
            .users
            .remove(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        self.order.retain(|other| other != id);
        info!(user_id = %id, size = self.users.len(), "Deleted");
        Ok(removed)
    }

    /// Makes `a` and `b` friends of each other and returns the updated `a`.
    ///
    /// Linking an existing pair is a conflict rather than a silent no-op.
    pub fn link_users(&mut self, a: &UserId, b: &UserId) -> Result<User, GraphError> {
        debug!(user_id = %a, friend_id = %b, "Link");
        self.try_link(a, b).inspect_err(|e| {
            warn!(op = "link_users", user_id = %a, friend_id = %b, error = %e, "Rejected")
        })
    }

    fn try_link(&mut self, a: &UserId, b: &UserId) -> Result<User, GraphError> {
        if a == b {
            return Err(GraphError::SelfLink(a.clone()));
        }
        let user = self
            .users
            .get(a)
            .ok_or_else(|| GraphError::NotFound(a.clone()))?;
        let friend = self
            .users
            .get(b)
            .ok_or_else(|| GraphError::NotFound(b.clone()))?;
        if user.is_friend_of(b) || friend.is_friend_of(a) {
            return Err(GraphError::AlreadyLinked(a.clone(), b.clone()));
        }

        if let Some(friend) = self.users.get_mut(b) {
            friend.insert_friend(a.clone());
        }
        let user = self
            .users
            .get_mut(a)
            .ok_or_else(|| GraphError::NotFound(a.clone()))?;
        user.insert_friend(b.clone());
        info!(user_id = %a, friend_id = %b, "Linked");
        Ok(user.clone())
    }

    /// Removes the friendship between `a` and `b` on both sides.
    ///
    /// Returns whether anything was removed. A missing link or unknown id is a no-op.
    pub fn unlink_users(&mut self, a: &UserId, b: &UserId) -> bool {
        debug!(user_id = %a, friend_id = %b, "Unlink");
        let removed_from_a = self
            .users
            .get_mut(a)
            .is_some_and(|user| user.remove_friend(b));
        let removed_from_b = self
            .users
            .get_mut(b)
            .is_some_and(|friend| friend.remove_friend(a));

        let removed = removed_from_a || removed_from_b;
        if removed {
            info!(user_id = %a, friend_id = %b, "Unlinked");
        } else {
            debug!(user_id = %a, friend_id = %b, "No link to remove");
        }
        removed
    }

    /// Adds a hobby to the user, reporting [`HobbyOutcome::AlreadyPresent`] when the user
    /// has it already.
    pub fn add_hobby(
        &mut self,
        id: &UserId,
        hobby: impl Into<String>,
    ) -> Result<HobbyOutcome, GraphError> {
        let hobby = hobby.into();
        debug!(user_id = %id, hobby = %hobby, "Add hobby");
        self.try_add_hobby(id, hobby)
            .inspect_err(|e| warn!(op = "add_hobby", user_id = %id, error = %e, "Rejected"))
    }

    fn try_add_hobby(&mut self, id: &UserId, hobby: String) -> Result<HobbyOutcome, GraphError> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        if user.has_hobby(&hobby) {
            info!(user_id = %id, hobby = %hobby, "Hobby already present");
            return Ok(HobbyOutcome::AlreadyPresent);
        }
        info!(user_id = %id, hobby = %hobby, "Hobby added");
        user.insert_hobby(hobby);
        Ok(HobbyOutcome::Added)
    }
}

fn validate_username(username: &str) -> Result<(), GraphError> {
    if username.is_empty() {
        return Err(GraphError::EmptyUsername);
    }
    Ok(())
}

fn validate_age(age: u32) -> Result<(), GraphError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(GraphError::AgeOutOfRange(age));
    }
    Ok(())
}
