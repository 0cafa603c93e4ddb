//! Bidirectional traversal over the flattened edge order.
//!
//! The flattened order runs over sources ascending, and within each source
//! over its bucket order `(dst, unweighted-before-weighted, weight)`.
//! Sources with empty buckets are skipped in both directions.

use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::types::Edge;

use super::multigraph::{EdgeKind, Link, Multigraph};

/// Where a cursor points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CursorPos<N, E> {
    /// At the stored edge `src -> dst` with the given weight tag.
    At { src: N, dst: N, kind: EdgeKind<E> },
    /// One past the last edge.
    End,
}

/// A detached position in the flattened edge order of a [`Multigraph`].
///
/// The cursor identifies its edge by value rather than by borrow, so it can
/// be handed back into mutating operations such as
/// [`Multigraph::erase_edge_at`]. Navigation consults the graph the cursor
/// was issued from; after a structural mutation, only the successor cursors
/// returned by the erase operations are contractually meaningful.
///
/// Two cursors are equal iff they sit on the same `(source, edge)` position
/// or are both at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeCursor<N, E> {
    pub(crate) pos: CursorPos<N, E>,
}

impl<N: Ord + Clone, E: Ord + Clone> EdgeCursor<N, E> {
    pub(crate) fn at(src: N, dst: N, kind: EdgeKind<E>) -> Self {
        Self {
            pos: CursorPos::At { src, dst, kind },
        }
    }

    pub(crate) fn end() -> Self {
        Self {
            pos: CursorPos::End,
        }
    }

    /// Whether this is the end cursor.
    pub fn is_end(&self) -> bool {
        matches!(self.pos, CursorPos::End)
    }

    /// The edge at this position as a value snapshot, or `None` when the
    /// cursor is at the end or its edge no longer exists in `graph`.
    pub fn value(&self, graph: &Multigraph<N, E>) -> Option<Edge<N, E>> {
        let CursorPos::At { src, dst, kind } = &self.pos else {
            return None;
        };
        let bucket = graph.adjacency.get(src)?;
        let link = Link {
            dst: dst.clone(),
            kind: kind.clone(),
        };
        bucket
            .contains(&link)
            .then(|| Edge::new(src.clone(), dst.clone(), kind.weight().cloned()))
    }

    /// The position immediately after this one: the next edge in the
    /// current source's bucket, else the first edge of the next source with
    /// a non-empty bucket, else the end cursor. Advancing the end cursor
    /// yields the end cursor.
    pub fn next(&self, graph: &Multigraph<N, E>) -> Self {
        let CursorPos::At { src, dst, kind } = &self.pos else {
            return Self::end();
        };
        if let Some(bucket) = graph.adjacency.get(src) {
            let here = Link {
                dst: dst.clone(),
                kind: kind.clone(),
            };
            if let Some(link) = bucket
                .range((Bound::Excluded(&here), Bound::Unbounded))
                .next()
            {
                return Self::at(src.clone(), link.dst.clone(), link.kind.clone());
            }
        }
        for (next_src, bucket) in graph
            .adjacency
            .range((Bound::Excluded(src), Bound::Unbounded))
        {
            if let Some(link) = bucket.iter().next() {
                return Self::at(next_src.clone(), link.dst.clone(), link.kind.clone());
            }
        }
        Self::end()
    }

    /// The position immediately before this one: the previous edge in the
    /// current source's bucket, else the last edge of the nearest earlier
    /// source with a non-empty bucket. From the end cursor this is the last
    /// edge of the graph.
    ///
    /// # Panics
    ///
    /// Stepping back past the first edge (including from the end cursor of
    /// an edgeless graph) violates the cursor's precondition and panics.
    pub fn prev(&self, graph: &Multigraph<N, E>) -> Self {
        match &self.pos {
            CursorPos::End => {
                for (src, bucket) in graph.adjacency.iter().rev() {
                    if let Some(link) = bucket.iter().next_back() {
                        return Self::at(src.clone(), link.dst.clone(), link.kind.clone());
                    }
                }
                panic!("cannot step a cursor back past the first edge");
            }
            CursorPos::At { src, dst, kind } => {
                if let Some(bucket) = graph.adjacency.get(src) {
                    let here = Link {
                        dst: dst.clone(),
                        kind: kind.clone(),
                    };
                    if let Some(link) = bucket
                        .range((Bound::Unbounded, Bound::Excluded(&here)))
                        .next_back()
                    {
                        return Self::at(src.clone(), link.dst.clone(), link.kind.clone());
                    }
                }
                for (prev_src, bucket) in graph
                    .adjacency
                    .range((Bound::Unbounded, Bound::Excluded(src)))
                    .rev()
                {
                    if let Some(link) = bucket.iter().next_back() {
                        return Self::at(prev_src.clone(), link.dst.clone(), link.kind.clone());
                    }
                }
                panic!("cannot step a cursor back past the first edge");
            }
        }
    }
}

/// Double-ended iterator over every edge of a graph in flattened order.
///
/// Yields value snapshots. Created by [`Multigraph::iter`] or by iterating
/// `&Multigraph`.
pub struct EdgeIter<'g, N, E> {
    outer: btree_map::Iter<'g, N, BTreeSet<Link<N, E>>>,
    front: Option<(&'g N, btree_set::Iter<'g, Link<N, E>>)>,
    back: Option<(&'g N, btree_set::Iter<'g, Link<N, E>>)>,
}

impl<'g, N, E> EdgeIter<'g, N, E> {
    pub(crate) fn new(adjacency: &'g BTreeMap<N, BTreeSet<Link<N, E>>>) -> Self {
        Self {
            outer: adjacency.iter(),
            front: None,
            back: None,
        }
    }
}

fn snapshot<N: Clone, E: Clone>(src: &N, link: &Link<N, E>) -> Edge<N, E> {
    Edge::new(src.clone(), link.dst.clone(), link.kind.weight().cloned())
}

impl<N: Ord + Clone, E: Ord + Clone> Iterator for EdgeIter<'_, N, E> {
    type Item = Edge<N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, links)) = &mut self.front {
                if let Some(link) = links.next() {
                    return Some(snapshot(*src, link));
                }
                self.front = None;
            }
            match self.outer.next() {
                Some((src, bucket)) => self.front = Some((src, bucket.iter())),
                None => {
                    // Outer exhausted: the two ends now share the back bucket.
                    let (src, links) = self.back.as_mut()?;
                    match links.next() {
                        Some(link) => return Some(snapshot(*src, link)),
                        None => {
                            self.back = None;
                            return None;
                        }
                    }
                }
            }
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> DoubleEndedIterator for EdgeIter<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, links)) = &mut self.back {
                if let Some(link) = links.next_back() {
                    return Some(snapshot(*src, link));
                }
                self.back = None;
            }
            match self.outer.next_back() {
                Some((src, bucket)) => self.back = Some((src, bucket.iter())),
                None => {
                    let (src, links) = self.front.as_mut()?;
                    match links.next_back() {
                        Some(link) => return Some(snapshot(*src, link)),
                        None => {
                            self.front = None;
                            return None;
                        }
                    }
                }
            }
        }
    }
}
