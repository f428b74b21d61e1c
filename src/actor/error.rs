//! Errors seen by callers talking to the graph actor.

use crate::store::GraphError;
use thiserror::Error;

/// Either a store rejection or a failure to reach the actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The store rejected the operation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Graph actor closed")]
    ActorClosed,

    #[error("Graph actor dropped response channel")]
    ActorDropped,
}

impl ClientError {
    /// The store error behind this failure, if any.
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            ClientError::Graph(e) => Some(e),
            _ => None,
        }
    }
}
