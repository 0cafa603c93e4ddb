//! dwgraph — generic in-memory directed weighted multigraph.
//!
//! Nodes are unique values of any orderable type; edges are directed and
//! either weighted or unweighted. Multiple edges between the same ordered
//! pair of nodes are permitted as long as they differ in weight or
//! weightedness. The graph exclusively owns its edges: queries hand out
//! value snapshots, and a detached bidirectional cursor flattens the
//! per-source edge buckets into one globally ordered traversal.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{EdgeCursor, EdgeIter, Multigraph};
pub use types::{Edge, GraphError, GraphResult};
