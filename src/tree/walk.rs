//! Depth-first annotation of a finished tree.

use super::suffix_tree::SuffixTree;
use super::symbol::Symbol;
use super::types::{NodeId, ROOT, TextIndex};

/// Where a node sits in the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeInfo {
    /// Length of the node's path-label
    pub depth: usize,
    /// Start of one occurrence of the path-label in the text. For a leaf
    /// this is the start of the suffix it ends.
    pub label_start: TextIndex,
    /// `None` for the root and for nodes no edge reaches
    pub parent: Option<NodeId>,
}

impl NodeInfo {
    /// The node's path-label
    pub fn label<'a, S>(&self, text: &'a [S]) -> &'a [S] {
        &text[self.label_start..self.label_start + self.depth]
    }
}

/// Compute [`NodeInfo`] for every node, indexed by node id.
///
/// Uses an explicit stack, so deep trees (long runs of one symbol) cannot
/// overflow the call stack.
pub fn annotate<S: Symbol>(tree: &SuffixTree<S>) -> Vec<NodeInfo> {
    let mut info = vec![NodeInfo::default(); tree.node_count()];
    let mut stack = vec![ROOT];

    while let Some(node) = stack.pop() {
        let depth = info[node as usize].depth;
        for edge in tree.edges_from(node) {
            info[edge.target() as usize] = NodeInfo {
                depth: depth + edge.len(),
                label_start: edge.first() - depth,
                parent: Some(node),
            };
            stack.push(edge.target());
        }
    }

    info
}
