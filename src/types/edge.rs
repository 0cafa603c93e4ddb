//! The edge variant model — weighted and unweighted directed edges.

use std::fmt;

use serde::Serialize;

/// A directed relationship between two node values, optionally carrying a
/// weight.
///
/// Edges are immutable once constructed and compare by value: two edges are
/// equal iff they have the same weightedness, the same endpoints, and the
/// same weight. The graph hands these out as snapshots only; they never
/// alias graph storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Edge<N, E> {
    /// An edge that carries no weight.
    Unweighted {
        /// Source node value.
        src: N,
        /// Destination node value.
        dst: N,
    },
    /// An edge that carries a weight.
    Weighted {
        /// Source node value.
        src: N,
        /// Destination node value.
        dst: N,
        /// The weight carried by this edge.
        weight: E,
    },
}

impl<N, E> Edge<N, E> {
    /// Create an edge `src -> dst`, weighted iff `weight` is `Some`.
    pub fn new(src: N, dst: N, weight: Option<E>) -> Self {
        match weight {
            Some(weight) => Self::Weighted { src, dst, weight },
            None => Self::Unweighted { src, dst },
        }
    }

    /// Create an unweighted edge `src -> dst`.
    pub fn unweighted(src: N, dst: N) -> Self {
        Self::Unweighted { src, dst }
    }

    /// Create a weighted edge `src -> dst` carrying `weight`.
    pub fn weighted(src: N, dst: N, weight: E) -> Self {
        Self::Weighted { src, dst, weight }
    }

    /// Whether this edge carries a weight.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted { .. })
    }

    /// The weight, or `None` for an unweighted edge.
    pub fn weight(&self) -> Option<&E> {
        match self {
            Self::Weighted { weight, .. } => Some(weight),
            Self::Unweighted { .. } => None,
        }
    }

    /// The `(src, dst)` endpoint pair.
    pub fn endpoints(&self) -> (&N, &N) {
        match self {
            Self::Unweighted { src, dst } | Self::Weighted { src, dst, .. } => (src, dst),
        }
    }

    /// The source node value.
    pub fn src(&self) -> &N {
        self.endpoints().0
    }

    /// The destination node value.
    pub fn dst(&self) -> &N {
        self.endpoints().1
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Edge<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unweighted { src, dst } => write!(f, "{src} -> {dst} | U"),
            Self::Weighted { src, dst, weight } => write!(f, "{src} -> {dst} | W | {weight}"),
        }
    }
}
