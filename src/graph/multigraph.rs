//! Core graph structure — an ordered node set with per-source edge buckets.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;

use crate::types::{Edge, GraphError, GraphResult};

use super::cursor::{CursorPos, EdgeCursor, EdgeIter};

/// Weight tag of a stored edge.
///
/// The derived ordering is the bucket tie-break: an unweighted edge sorts
/// before every weighted one, and weighted edges sort by weight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum EdgeKind<E> {
    Unweighted,
    Weighted(E),
}

impl<E> EdgeKind<E> {
    pub(crate) fn from_weight(weight: Option<E>) -> Self {
        match weight {
            Some(weight) => Self::Weighted(weight),
            None => Self::Unweighted,
        }
    }

    pub(crate) fn weight(&self) -> Option<&E> {
        match self {
            Self::Weighted(weight) => Some(weight),
            Self::Unweighted => None,
        }
    }
}

/// One stored edge inside a source bucket.
///
/// The derived ordering is lexicographic over `(dst, kind)`, so a bucket
/// iterates by destination ascending, unweighted before weighted, then
/// weight ascending — the flattened traversal order within one source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Link<N, E> {
    pub(crate) dst: N,
    pub(crate) kind: EdgeKind<E>,
}

/// A directed multigraph over node values of type `N` with edge weights of
/// type `E`.
///
/// Node uniqueness and both edge orderings live in one structure: a node is
/// a member iff it is a key of the adjacency map, and its bucket holds every
/// edge sourced there, duplicate-free under `(dst, weightedness, weight)`.
/// A node with no outgoing edges keeps an empty bucket rather than losing
/// its entry.
///
/// The graph owns every edge outright, which is why `Clone` is a deep copy
/// and why equality can be derived: two graphs are equal iff their node
/// sets match and every bucket matches element-for-element under the
/// tie-break ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multigraph<N, E> {
    pub(crate) adjacency: BTreeMap<N, BTreeSet<Link<N, E>>>,
}

impl<N, E> Default for Multigraph<N, E> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Multigraph<N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph containing the given nodes and no edges.
    ///
    /// Duplicate node values collapse to one membership.
    pub fn from_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    // ==================== Modifiers ====================

    /// Insert a node. Returns `false` without effect if it is already a
    /// member.
    pub fn insert_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(BTreeSet::new());
                true
            }
        }
    }

    /// Insert an edge `src -> dst`, weighted iff `weight` is `Some`.
    ///
    /// Fails if either endpoint is not a member; returns `Ok(false)` without
    /// effect if an edge with the same destination, weightedness, and weight
    /// already exists at `src`. Edges differing in weight or weightedness
    /// coexist between the same ordered pair.
    pub fn insert_edge(&mut self, src: N, dst: N, weight: Option<E>) -> GraphResult<bool> {
        if !self.adjacency.contains_key(&dst) {
            return Err(GraphError::InsertEdgeEndpoint);
        }
        match self.adjacency.get_mut(&src) {
            Some(bucket) => Ok(bucket.insert(Link {
                dst,
                kind: EdgeKind::from_weight(weight),
            })),
            None => Err(GraphError::InsertEdgeEndpoint),
        }
    }

    /// Rename `old` to `new` everywhere: in the node set and as the source
    /// or destination of every edge.
    ///
    /// Fails if `old` is not a member. Returns `Ok(false)` without effect if
    /// `new` already exists. The rename is built into a fresh structure and
    /// swapped in whole, so the graph is never observable half-renamed.
    pub fn replace_node(&mut self, old: &N, new: N) -> GraphResult<bool> {
        if !self.adjacency.contains_key(old) {
            return Err(GraphError::ReplaceNodeMissing);
        }
        if self.adjacency.contains_key(&new) {
            return Ok(false);
        }
        self.adjacency = self.rewrite_endpoints(old, &new);
        Ok(true)
    }

    /// Fold `old` into the existing node `new`.
    ///
    /// Every edge with `old` as an endpoint is rewritten to use `new`;
    /// edges that become duplicates of an existing `new`-edge coalesce into
    /// one. `old` leaves the node set. Fails if either node is absent.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> GraphResult<()> {
        if !self.adjacency.contains_key(old) || !self.adjacency.contains_key(new) {
            return Err(GraphError::MergeReplaceMissing);
        }
        let edges_before = self.edge_count();
        self.adjacency = self.rewrite_endpoints(old, new);
        let coalesced = edges_before - self.edge_count();
        if coalesced > 0 {
            debug!("merge_replace_node coalesced {coalesced} duplicate edge(s)");
        }
        Ok(())
    }

    /// Remove a node and every edge where it appears as source or
    /// destination. Returns `false` without effect if it is not a member.
    pub fn erase_node(&mut self, node: &N) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }
        for bucket in self.adjacency.values_mut() {
            bucket.retain(|link| link.dst != *node);
        }
        true
    }

    /// Remove the edge `src -> dst` with exactly the given weightedness and
    /// weight. Returns whether an edge was removed; fails if either endpoint
    /// is not a member.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: Option<&E>) -> GraphResult<bool> {
        if !self.adjacency.contains_key(dst) {
            return Err(GraphError::EraseEdgeEndpoint);
        }
        let link = Link {
            dst: dst.clone(),
            kind: EdgeKind::from_weight(weight.cloned()),
        };
        match self.adjacency.get_mut(src) {
            Some(bucket) => Ok(bucket.remove(&link)),
            None => Err(GraphError::EraseEdgeEndpoint),
        }
    }

    /// Remove the edge at `cursor` and return a cursor to the position
    /// immediately after it, or the end cursor if none follows.
    pub fn erase_edge_at(&mut self, cursor: EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        let next = cursor.next(self);
        if let CursorPos::At { src, dst, kind } = cursor.pos {
            if let Some(bucket) = self.adjacency.get_mut(&src) {
                bucket.remove(&Link { dst, kind });
            }
        }
        next
    }

    /// Remove every edge in `[first, last)` by repeated single-edge erase
    /// and return `last`.
    pub fn erase_edge_range(
        &mut self,
        mut first: EdgeCursor<N, E>,
        last: EdgeCursor<N, E>,
    ) -> EdgeCursor<N, E> {
        while first != last && !first.is_end() {
            first = self.erase_edge_at(first);
        }
        last
    }

    /// Empty the node set and every edge bucket.
    pub fn clear(&mut self) {
        let (nodes, edges) = (self.node_count(), self.edge_count());
        self.adjacency.clear();
        debug!("cleared graph of {nodes} node(s) and {edges} edge(s)");
    }

    // ==================== Accessors ====================

    /// Whether `node` is a member of the node set.
    pub fn is_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges across all sources.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Whether at least one edge `src -> dst` exists, of any weight.
    /// Fails if either endpoint is not a member.
    pub fn is_connected(&self, src: &N, dst: &N) -> GraphResult<bool> {
        if !self.adjacency.contains_key(dst) {
            return Err(GraphError::IsConnectedEndpoint);
        }
        let bucket = self
            .adjacency
            .get(src)
            .ok_or(GraphError::IsConnectedEndpoint)?;
        Ok(Self::links_for(bucket, dst).next().is_some())
    }

    /// All nodes, strictly ascending.
    pub fn nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// All edges between the ordered pair `src -> dst`, as value snapshots:
    /// the unweighted edge (if any) first, then weighted edges ascending by
    /// weight. Fails if either endpoint is not a member.
    pub fn edges(&self, src: &N, dst: &N) -> GraphResult<Vec<Edge<N, E>>> {
        if !self.adjacency.contains_key(dst) {
            return Err(GraphError::EdgesEndpoint);
        }
        let bucket = self.adjacency.get(src).ok_or(GraphError::EdgesEndpoint)?;
        Ok(Self::links_for(bucket, dst)
            .map(|link| Edge::new(src.clone(), link.dst.clone(), link.kind.weight().cloned()))
            .collect())
    }

    /// The sorted, duplicate-free destinations directly reachable from
    /// `src`. Fails if `src` is not a member.
    pub fn connections(&self, src: &N) -> GraphResult<Vec<N>> {
        let bucket = self
            .adjacency
            .get(src)
            .ok_or(GraphError::ConnectionsMissing)?;
        let mut reachable: Vec<N> = Vec::new();
        for link in bucket {
            // Bucket order is dst-major, so duplicates are adjacent.
            if reachable.last() != Some(&link.dst) {
                reachable.push(link.dst.clone());
            }
        }
        Ok(reachable)
    }

    // ==================== Cursor access ====================

    /// Cursor at the first edge in flattened order, or the end cursor for a
    /// graph without edges.
    pub fn begin(&self) -> EdgeCursor<N, E> {
        for (src, bucket) in &self.adjacency {
            if let Some(link) = bucket.iter().next() {
                return EdgeCursor::at(src.clone(), link.dst.clone(), link.kind.clone());
            }
        }
        EdgeCursor::end()
    }

    /// The end cursor: one past the last edge.
    pub fn end(&self) -> EdgeCursor<N, E> {
        EdgeCursor::end()
    }

    /// Cursor at the edge `src -> dst` with exactly the given weightedness
    /// and weight, or the end cursor if no such edge exists. Omitting the
    /// weight matches only the unweighted edge.
    pub fn find(&self, src: &N, dst: &N, weight: Option<&E>) -> EdgeCursor<N, E> {
        let kind = EdgeKind::from_weight(weight.cloned());
        let link = Link {
            dst: dst.clone(),
            kind,
        };
        match self.adjacency.get(src) {
            Some(bucket) if bucket.contains(&link) => {
                EdgeCursor::at(src.clone(), link.dst, link.kind)
            }
            _ => EdgeCursor::end(),
        }
    }

    /// Iterate every edge in flattened order, yielding value snapshots.
    pub fn iter(&self) -> EdgeIter<'_, N, E> {
        EdgeIter::new(&self.adjacency)
    }

    /// All stored links `src -> dst` for a fixed destination, in bucket
    /// order (unweighted first, then weight ascending).
    fn links_for<'a>(
        bucket: &'a BTreeSet<Link<N, E>>,
        dst: &N,
    ) -> impl Iterator<Item = &'a Link<N, E>> {
        let start = Link {
            dst: dst.clone(),
            kind: EdgeKind::Unweighted,
        };
        let dst = dst.clone();
        bucket.range(start..).take_while(move |link| link.dst == dst)
    }

    /// Rebuild the adjacency map with every occurrence of `old` rewritten
    /// to `new` — as a node entry, as a source, and as a destination. Set
    /// insertion coalesces any edge that becomes a duplicate under the
    /// rewrite. The original map is untouched.
    fn rewrite_endpoints(&self, old: &N, new: &N) -> BTreeMap<N, BTreeSet<Link<N, E>>> {
        let mut rebuilt: BTreeMap<N, BTreeSet<Link<N, E>>> = BTreeMap::new();
        for (src, bucket) in &self.adjacency {
            let mapped_src = if src == old { new } else { src };
            let slot = rebuilt.entry(mapped_src.clone()).or_default();
            for link in bucket {
                let mapped_dst = if link.dst == *old { new } else { &link.dst };
                slot.insert(Link {
                    dst: mapped_dst.clone(),
                    kind: link.kind.clone(),
                });
            }
        }
        rebuilt
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Multigraph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Extend<N> for Multigraph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.insert_node(node);
        }
    }
}

impl<'g, N: Ord + Clone, E: Ord + Clone> IntoIterator for &'g Multigraph<N, E> {
    type Item = Edge<N, E>;
    type IntoIter = EdgeIter<'g, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Canonical rendering: each node in ascending order as `"<node> (\n"`,
/// its edges indented two spaces in bucket order, then `")\n"`. An empty
/// graph renders as the empty string.
impl<N: fmt::Display, E: fmt::Display> fmt::Display for Multigraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (src, bucket) in &self.adjacency {
            writeln!(f, "{src} (")?;
            for link in bucket {
                match link.kind.weight() {
                    Some(weight) => writeln!(f, "  {src} -> {} | W | {weight}", link.dst)?,
                    None => writeln!(f, "  {src} -> {} | U", link.dst)?,
                }
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
