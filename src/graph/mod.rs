//! The multigraph container — the core data structure.

pub mod cursor;
pub mod multigraph;

pub use cursor::{EdgeCursor, EdgeIter};
pub use multigraph::Multigraph;
