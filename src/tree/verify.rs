//! Structural checks on a finished tree.
//!
//! [`verify`] re-derives the properties a correct construction guarantees
//! and reports the first one that does not hold. Spelling every suffix is
//! quadratic in the worst case, so this is a diagnostic for tests and the
//! CLI, not something to run on every build.

use super::suffix_tree::SuffixTree;
use super::symbol::Symbol;
use super::types::{NodeId, ROOT};
use super::walk::{NodeInfo, annotate};
use thiserror::Error;

/// A property of the tree that does not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("node {node} has two outgoing edges starting with {symbol}")]
    DuplicateEdgeKey { node: NodeId, symbol: String },

    #[error("edge {from} -> {to} has an empty label")]
    EmptyEdge { from: NodeId, to: NodeId },

    #[error("node {node} is not reachable from the root")]
    Unreachable { node: NodeId },

    #[error("internal node {node} has a single child")]
    UnaryNode { node: NodeId },

    #[error("internal node {node} has no suffix link")]
    MissingSuffixLink { node: NodeId },

    #[error("suffix link {node} -> {target} does not drop exactly the first symbol")]
    UnsoundSuffixLink { node: NodeId, target: NodeId },

    #[error("suffix starting at {start} is not spelled by any path from the root")]
    MissingSuffix { start: usize },

    #[error("expected {expected} leaves, found {found}")]
    LeafCount { expected: usize, found: usize },
}

/// Check every structural property of `tree`
pub fn verify<S: Symbol>(tree: &SuffixTree<S>) -> Result<(), Violation> {
    check_edges(tree)?;
    let info = annotate(tree);
    check_topology(tree, &info)?;
    check_suffix_links(tree, &info)?;
    check_suffixes(tree)?;
    if tree.terminator().is_some() {
        let found = tree.leaf_count();
        let expected = tree.text().len();
        if found != expected {
            return Err(Violation::LeafCount { expected, found });
        }
    }
    Ok(())
}

fn check_edges<S: Symbol>(tree: &SuffixTree<S>) -> Result<(), Violation> {
    let text = tree.text();
    for node in tree.nodes() {
        let out = tree.edges_from(node);
        for edge in out {
            if edge.is_empty() {
                return Err(Violation::EmptyEdge {
                    from: edge.source(),
                    to: edge.target(),
                });
            }
        }
        for pair in out.windows(2) {
            let symbol = text[pair[0].first()];
            if symbol == text[pair[1].first()] {
                return Err(Violation::DuplicateEdgeKey {
                    node,
                    symbol: format!("{symbol:?}"),
                });
            }
        }
    }
    Ok(())
}

fn check_topology<S: Symbol>(tree: &SuffixTree<S>, info: &[NodeInfo]) -> Result<(), Violation> {
    for node in tree.nodes().filter(|&n| n != ROOT) {
        if info[node as usize].parent.is_none() {
            return Err(Violation::Unreachable { node });
        }
        if tree.edges_from(node).len() == 1 {
            return Err(Violation::UnaryNode { node });
        }
    }
    Ok(())
}

fn check_suffix_links<S: Symbol>(tree: &SuffixTree<S>, info: &[NodeInfo]) -> Result<(), Violation> {
    let text = tree.text();
    for node in tree.nodes().filter(|&n| n != ROOT) {
        let target = match tree.suffix_link(node) {
            Some(target) => target,
            None if tree.is_leaf(node) => continue,
            None => return Err(Violation::MissingSuffixLink { node }),
        };

        let from = info[node as usize].label(text);
        let to = info[target as usize].label(text);
        if from.len() != to.len() + 1 || from[1..] != *to {
            return Err(Violation::UnsoundSuffixLink { node, target });
        }
    }
    Ok(())
}

fn check_suffixes<S: Symbol>(tree: &SuffixTree<S>) -> Result<(), Violation> {
    let text = tree.text();
    for start in 0..text.len() {
        if !spells(tree, &text[start..]) {
            return Err(Violation::MissingSuffix { start });
        }
    }
    Ok(())
}

/// Whether `pattern` runs from the root, ending at a node or inside an edge
fn spells<S: Symbol>(tree: &SuffixTree<S>, pattern: &[S]) -> bool {
    let mut node = ROOT;
    let mut rest = pattern;
    while let Some(&head) = rest.first() {
        let Some(edge) = tree.edge(node, head) else {
            return false;
        };
        let label = tree.label(edge);
        let n = label.len().min(rest.len());
        if label[..n] != rest[..n] {
            return false;
        }
        rest = &rest[n..];
        node = edge.target();
    }
    true
}
