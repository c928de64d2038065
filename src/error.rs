//! Error type for algorithm entry points.
//!
//! Contract operations on the representations never fail loudly: they return `false` or a sentinel.
//! Algorithms that require a valid vertex (a traversal start, a flow source, ...) instead check their
//! preconditions upfront and report misuse as a [`GraphError`].

use thiserror::Error;

use crate::{Node, NumNodes};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} does not exist in a graph with {num_nodes} vertices")]
    InvalidVertex { vertex: Node, num_nodes: NumNodes },

    #[error("source and sink must differ, both are {0}")]
    IdenticalTerminals(Node),
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns `Err(GraphError::InvalidVertex)` unless `vertex < num_nodes`
pub(crate) fn check_vertex(vertex: Node, num_nodes: NumNodes) -> Result<()> {
    if vertex < num_nodes {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex { vertex, num_nodes })
    }
}
