//! Error types for the graph store.

use crate::model::UserId;
use thiserror::Error;

/// The three failure kinds a store operation can report.
///
/// None of them is retryable as-is: the caller has to fix the input or the graph state
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (empty username, bad age, or a self-link).
    Validation,
    /// A referenced user does not exist.
    NotFound,
    /// The operation would break a relationship rule.
    Conflict,
}

/// Errors that can occur during graph store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    /// The username is the empty string.
    #[error("Username must not be empty")]
    EmptyUsername,

    /// The age lies outside `[MIN_AGE, MAX_AGE]`.
    #[error("Age {0} is out of range [1, 150]")]
    AgeOutOfRange(u32),

    /// A user cannot befriend themselves.
    #[error("Cannot link user to themselves: {0}")]
    SelfLink(UserId),

    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// The two users are already friends.
    #[error("Users are already friends: {0} and {1}")]
    AlreadyLinked(UserId, UserId),

    /// The user still has friends and cannot be deleted.
    #[error("Cannot delete user {id} with {friends} existing friend(s); unlink friends first")]
    HasFriends { id: UserId, friends: usize },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::EmptyUsername
            | GraphError::AgeOutOfRange(_)
            | GraphError::SelfLink(_) => ErrorKind::Validation,
            GraphError::NotFound(_) => ErrorKind::NotFound,
            GraphError::AlreadyLinked(..) | GraphError::HasFriends { .. } => ErrorKind::Conflict,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
