//! Error types for the dwgraph library.

use thiserror::Error;

/// All errors that can occur in the dwgraph library.
///
/// Every variant signals the same failure kind: an operation was handed a
/// node value that is not a member of the graph. Each carries the fixed
/// message for the operation that raised it, and none of them leaves the
/// graph mutated. Expected no-effect outcomes (duplicate inserts, erases
/// of something absent) are reported as `Ok(false)` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `insert_edge` was given an endpoint outside the node set.
    #[error("cannot insert an edge when either src or dst node does not exist")]
    InsertEdgeEndpoint,

    /// `replace_node` was asked to rename a node that is not present.
    #[error("cannot replace a node that does not exist")]
    ReplaceNodeMissing,

    /// `merge_replace_node` was given an old or new node outside the node set.
    #[error("cannot merge-replace when old or new node does not exist")]
    MergeReplaceMissing,

    /// `erase_edge` by key was given an endpoint outside the node set.
    #[error("cannot erase an edge when either src or dst node does not exist")]
    EraseEdgeEndpoint,

    /// `is_connected` was given an endpoint outside the node set.
    #[error("cannot check connectivity when src or dst node does not exist")]
    IsConnectedEndpoint,

    /// `edges` was given an endpoint outside the node set.
    #[error("cannot list edges when src or dst node does not exist")]
    EdgesEndpoint,

    /// `connections` was given a source outside the node set.
    #[error("cannot list connections when src node does not exist")]
    ConnectionsMissing,
}

/// Convenience result type for dwgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
