//! Summary figures for a finished tree.

use super::suffix_tree::SuffixTree;
use super::symbol::Symbol;
use super::types::ROOT;
use super::walk::annotate;
use serde::{Deserialize, Serialize};

/// Size and shape of a suffix tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Symbols supplied by the caller
    pub input_len: usize,
    /// Symbols indexed, terminator included
    pub text_len: usize,
    /// All nodes, root included
    pub nodes: usize,
    /// Non-root nodes with children
    pub internal_nodes: usize,
    pub leaves: usize,
    pub edges: usize,
    pub suffix_links: usize,
    /// Path-label length of the deepest internal node (the longest
    /// substring occurring at least twice)
    pub max_internal_depth: usize,
}

impl<S: Symbol> SuffixTree<S> {
    /// Collect [`TreeStats`]
    pub fn stats(&self) -> TreeStats {
        let info = annotate(self);
        let mut stats = TreeStats {
            input_len: self.input_len(),
            text_len: self.text().len(),
            nodes: self.node_count(),
            edges: self.edge_count(),
            ..Default::default()
        };

        for node in self.nodes() {
            if self.is_leaf(node) {
                stats.leaves += 1;
            } else if node != ROOT {
                stats.internal_nodes += 1;
                stats.max_internal_depth = stats.max_internal_depth.max(info[node as usize].depth);
            }
            if self.suffix_link(node).is_some() {
                stats.suffix_links += 1;
            }
        }

        stats
    }
}
