//! Finished, immutable suffix tree.
//!
//! Freezing a builder resolves every open edge end to the end of the text
//! and lays the edge table out as sorted per-node adjacency lists, so the
//! result can be shared freely between readers.

use super::edges::EdgeTable;
use super::nodes::{Node, NodeArena};
use super::symbol::Symbol;
use super::types::{NodeId, ROOT, TextIndex};
use crate::config::BuildConfig;
use crate::error::Result;
use super::builder::SuffixTreeBuilder;
use std::ops::Range;

/// Edge of a finished tree, labelled by a range of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    source: NodeId,
    target: NodeId,
    start: TextIndex,
    end: TextIndex,
}

impl TreeEdge {
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// First text index of the label (inclusive)
    #[inline]
    pub fn first(&self) -> TextIndex {
        self.start
    }

    /// Last text index of the label (inclusive)
    #[inline]
    pub fn last(&self) -> TextIndex {
        self.end - 1
    }

    /// Label as a half-open range of the text
    #[inline]
    pub fn range(&self) -> Range<TextIndex> {
        self.start..self.end
    }

    /// Label length
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A suffix tree over a fixed text
#[derive(Debug, Clone)]
pub struct SuffixTree<S> {
    text: Vec<S>,
    input_len: usize,
    terminator: Option<S>,
    nodes: Vec<Node>,
    /// Edges grouped by source and sorted by first symbol
    edges: Vec<TreeEdge>,
    /// `edges[offsets[n]..offsets[n + 1]]` are the outgoing edges of `n`
    offsets: Vec<u32>,
}

impl<S: Symbol> SuffixTree<S> {
    /// Build over exactly the given symbols
    pub fn build(text: impl Into<Vec<S>>) -> Result<Self> {
        Self::build_with(text, &BuildConfig::new())
    }

    /// Build with explicit options
    pub fn build_with(text: impl Into<Vec<S>>, config: &BuildConfig<S>) -> Result<Self> {
        let text = text.into();
        let _span = tracing::debug_span!("build_suffix_tree", len = text.len()).entered();
        Ok(SuffixTreeBuilder::new(text, config)?.finish())
    }

    pub(crate) fn from_parts(
        text: Vec<S>,
        input_len: usize,
        terminator: Option<S>,
        nodes: NodeArena,
        table: EdgeTable<S>,
    ) -> Self {
        let end = text.len();
        let mut edges: Vec<TreeEdge> = table
            .iter()
            .map(|e| TreeEdge {
                source: e.source,
                target: e.target,
                start: e.start,
                end: e.end.resolve(end),
            })
            .collect();
        edges.sort_unstable_by_key(|e| (e.source, text[e.start]));

        let node_count = nodes.len();
        let mut offsets = vec![0u32; node_count + 1];
        for edge in &edges {
            offsets[edge.source as usize + 1] += 1;
        }
        for n in 0..node_count {
            offsets[n + 1] += offsets[n];
        }

        Self {
            text,
            input_len,
            terminator,
            nodes: nodes.into_nodes(),
            edges,
            offsets,
        }
    }

    /// Indexed text, terminator included
    pub fn text(&self) -> &[S] {
        &self.text
    }

    /// Length of the caller's input, terminator excluded
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn terminator(&self) -> Option<S> {
        self.terminator
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids, root first
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|n| n as NodeId)
    }

    /// All edges, grouped by source node
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Outgoing edges of `node`, sorted by first symbol
    pub fn edges_from(&self, node: NodeId) -> &[TreeEdge] {
        let n = node as usize;
        &self.edges[self.offsets[n] as usize..self.offsets[n + 1] as usize]
    }

    /// Outgoing edge of `node` whose label starts with `symbol`
    pub fn edge(&self, node: NodeId, symbol: S) -> Option<&TreeEdge> {
        let out = self.edges_from(node);
        out.binary_search_by_key(&symbol, |e| self.text[e.start])
            .ok()
            .map(|i| &out[i])
    }

    /// Symbols spelled by `edge`
    pub fn label(&self, edge: &TreeEdge) -> &[S] {
        &self.text[edge.range()]
    }

    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node as usize].suffix_link
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.edges_from(node).is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|&n| self.is_leaf(n)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol() {
        let tree = SuffixTree::build(b"a".to_vec()).unwrap();
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.edge_count(), 1);
        let edge = tree.edge(ROOT, b'a').unwrap();
        assert_eq!(tree.label(edge), b"a");
        assert_eq!((edge.first(), edge.last()), (0, 0));
        assert!(tree.is_leaf(edge.target()));
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_edges_sorted_by_first_symbol() {
        let tree = SuffixTree::build(b"cab".to_vec()).unwrap();
        let firsts: Vec<u8> = tree
            .edges_from(ROOT)
            .iter()
            .map(|e| tree.text()[e.first()])
            .collect();
        assert_eq!(firsts, b"abc");
    }

    #[test]
    fn test_edge_lookup_misses() {
        let tree = SuffixTree::build(b"ab".to_vec()).unwrap();
        assert!(tree.edge(ROOT, b'z').is_none());
        let leaf = tree.edge(ROOT, b'a').unwrap().target();
        assert!(tree.edge(leaf, b'b').is_none());
    }

    #[test]
    fn test_open_ends_resolved_to_text_end() {
        let tree = SuffixTree::build_with(b"abab".to_vec(), &BuildConfig::with_terminator(b'$')).unwrap();
        for node in tree.nodes() {
            for edge in tree.edges_from(node) {
                assert!(edge.range().end <= tree.text().len());
                assert!(!edge.is_empty());
                if tree.is_leaf(edge.target()) {
                    assert_eq!(edge.last(), tree.text().len() - 1);
                }
            }
        }
    }

    #[test]
    fn test_edge_count_is_node_count_minus_one() {
        let tree = SuffixTree::build_with(b"banana".to_vec(), &BuildConfig::with_terminator(b'$')).unwrap();
        assert_eq!(tree.edge_count(), tree.node_count() - 1);
        // 7 leaves, internal: a, ana, na, plus root
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(tree.node_count(), 11);
    }

    #[test]
    fn test_generic_over_char() {
        let text: Vec<char> = "héllo".chars().collect();
        let tree = SuffixTree::build(text).unwrap();
        let edge = tree.edge(ROOT, 'é').unwrap();
        assert_eq!(tree.label(edge), &['é', 'l', 'l', 'o']);
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuffixTree<u8>>();
    }
}
