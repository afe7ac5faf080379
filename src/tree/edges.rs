//! Edge table: the adjacency structure of the tree under construction.
//!
//! Edges are keyed by `(source node, first symbol of label)`. The key is
//! unique table-wide, which is what gives every node at most one outgoing
//! edge per starting symbol.

use super::cursor::ActivePoint;
use super::nodes::NodeArena;
use super::symbol::Symbol;
use super::types::{EdgeEnd, NodeId, TextIndex};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Labelled arc from `source` to `target`, spelling `text[start..end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// First text index of the label (inclusive)
    pub start: TextIndex,
    pub end: EdgeEnd,
}

impl Edge {
    /// Label length given the current frontier
    #[inline]
    pub fn len(&self, frontier: TextIndex) -> usize {
        self.end.resolve(frontier) - self.start
    }
}

/// Map from `(source, first symbol)` to edge
#[derive(Debug, Clone)]
pub struct EdgeTable<S> {
    map: FxHashMap<(NodeId, S), Edge>,
}

impl<S: Symbol> EdgeTable<S> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    fn key(text: &[S], edge: &Edge) -> (NodeId, S) {
        (edge.source, text[edge.start])
    }

    /// Store an edge under `(edge.source, text[edge.start])`.
    ///
    /// Panics if that key is already taken.
    pub fn insert(&mut self, text: &[S], edge: Edge) {
        let key = Self::key(text, &edge);
        match self.map.entry(key) {
            Entry::Occupied(existing) => panic!(
                "duplicate edge key ({}, {:?}): {:?} collides with {:?}",
                key.0,
                key.1,
                edge,
                existing.get()
            ),
            Entry::Vacant(slot) => {
                slot.insert(edge);
            }
        }
    }

    /// Delete the entry for `edge` and return what was stored.
    ///
    /// Panics if there is no such entry.
    pub fn remove(&mut self, text: &[S], edge: &Edge) -> Edge {
        let key = Self::key(text, edge);
        self.map
            .remove(&key)
            .unwrap_or_else(|| panic!("removing absent edge ({}, {:?})", key.0, key.1))
    }

    /// Look up the outgoing edge of `node` starting with `symbol`
    #[inline]
    pub fn get(&self, node: NodeId, symbol: S) -> Option<&Edge> {
        self.map.get(&(node, symbol))
    }

    #[inline]
    pub fn contains(&self, node: NodeId, symbol: S) -> bool {
        self.map.contains_key(&(node, symbol))
    }

    /// Look up an edge the construction relies on being present.
    ///
    /// Panics if it is missing.
    #[inline]
    pub fn expect(&self, node: NodeId, symbol: S) -> Edge {
        match self.get(node, symbol) {
            Some(edge) => *edge,
            None => panic!("missing expected edge ({node}, {symbol:?})"),
        }
    }

    /// Split `edge` at the point the active cursor describes.
    ///
    /// The first `active.len()` symbols stay on a new near-side edge from
    /// `active.source` to a fresh node; the remainder is re-keyed under
    /// that node with its original end (open edges stay open). Returns the
    /// new node.
    pub fn split(
        &mut self,
        text: &[S],
        nodes: &mut NodeArena,
        edge: Edge,
        active: &ActivePoint,
    ) -> NodeId {
        let keep = active.len();
        assert!(keep > 0, "split requires an implicit cursor");
        if let EdgeEnd::At(end) = edge.end {
            assert!(
                edge.start + keep < end,
                "split point {keep} not strictly inside edge {edge:?}"
            );
        }

        let mid = nodes.alloc();
        self.remove(text, &edge);
        self.insert(
            text,
            Edge {
                source: active.source,
                target: mid,
                start: edge.start,
                end: EdgeEnd::At(edge.start + keep),
            },
        );
        self.insert(
            text,
            Edge {
                source: mid,
                start: edge.start + keep,
                ..edge
            },
        );

        tracing::trace!(source = active.source, mid, keep, "split edge");
        mid
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate all edges in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.map.values()
    }
}

impl<S: Symbol> Default for EdgeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::types::ROOT;

    fn leaf(source: NodeId, target: NodeId, start: TextIndex) -> Edge {
        Edge {
            source,
            target,
            start,
            end: EdgeEnd::Open,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let text = b"abc";
        let mut table = EdgeTable::new();
        table.insert(text, leaf(ROOT, 1, 0));
        table.insert(text, leaf(ROOT, 2, 1));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(ROOT, b'a').map(|e| e.target), Some(1));
        assert_eq!(table.get(ROOT, b'b').map(|e| e.target), Some(2));
        assert!(!table.contains(ROOT, b'c'));
        assert!(!table.contains(1, b'a'));
    }

    #[test]
    #[should_panic(expected = "duplicate edge key")]
    fn test_duplicate_key_panics() {
        let text = b"aa";
        let mut table = EdgeTable::new();
        table.insert(text, leaf(ROOT, 1, 0));
        table.insert(text, leaf(ROOT, 2, 1));
    }

    #[test]
    fn test_same_symbol_under_different_sources() {
        let text = b"aa";
        let mut table = EdgeTable::new();
        table.insert(text, leaf(ROOT, 1, 0));
        table.insert(text, leaf(1, 2, 1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_remove() {
        let text = b"ab";
        let mut table = EdgeTable::new();
        let edge = leaf(ROOT, 1, 0);
        table.insert(text, edge);
        assert_eq!(table.remove(text, &edge), edge);
        assert!(table.is_empty());
    }

    #[test]
    #[should_panic(expected = "removing absent edge")]
    fn test_remove_absent_panics() {
        let text = b"ab";
        let mut table: EdgeTable<u8> = EdgeTable::new();
        table.remove(text, &leaf(ROOT, 1, 0));
    }

    #[test]
    #[should_panic(expected = "missing expected edge")]
    fn test_expect_missing_panics() {
        let table: EdgeTable<u8> = EdgeTable::new();
        table.expect(ROOT, b'x');
    }

    #[test]
    fn test_split_open_edge() {
        // Root --"abcd"--> 1, split after "ab"
        let text = b"abcd";
        let mut nodes = NodeArena::new();
        let target = nodes.alloc();
        let mut table = EdgeTable::new();
        let edge = leaf(ROOT, target, 0);
        table.insert(text, edge);

        let active = ActivePoint {
            source: ROOT,
            first: 0,
            end: 2,
        };
        let mid = table.split(text, &mut nodes, edge, &active);

        assert_eq!(mid, 2);
        assert_eq!(table.len(), 2);

        let near = table.expect(ROOT, b'a');
        assert_eq!(near.target, mid);
        assert_eq!(near.start, 0);
        assert_eq!(near.end, EdgeEnd::At(2));

        let far = table.expect(mid, b'c');
        assert_eq!(far.target, target);
        assert_eq!(far.start, 2);
        assert_eq!(far.end, EdgeEnd::Open);
        assert_eq!(far.len(4), 2);
        assert_eq!(nodes.suffix_link(mid), None);
    }

    #[test]
    fn test_split_closed_edge_keeps_end() {
        let text = b"xabcy";
        let mut nodes = NodeArena::new();
        let inner = nodes.alloc();
        let mut table = EdgeTable::new();
        let edge = Edge {
            source: ROOT,
            target: inner,
            start: 1,
            end: EdgeEnd::At(4),
        };
        table.insert(text, edge);

        let active = ActivePoint {
            source: ROOT,
            first: 1,
            end: 2,
        };
        let mid = table.split(text, &mut nodes, edge, &active);

        assert_eq!(table.expect(ROOT, b'a').end, EdgeEnd::At(2));
        let far = table.expect(mid, b'b');
        assert_eq!(far.start, 2);
        assert_eq!(far.end, EdgeEnd::At(4));
        assert_eq!(far.target, inner);
    }
}
