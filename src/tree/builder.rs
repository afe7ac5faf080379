//! Suffix tree builder
//!
//! Runs Ukkonen's online construction: one pass over the text, one
//! extension phase per symbol. Each phase inserts a leaf for every suffix
//! that is not yet in the tree, splitting edges where a suffix ends inside
//! one, and stops at the first suffix that is already present. Suffix
//! links let each insertion start where the previous one left off, so the
//! whole pass is amortized O(n).

use super::cursor::ActivePoint;
use super::edges::{Edge, EdgeTable};
use super::nodes::NodeArena;
use super::suffix_tree::SuffixTree;
use super::symbol::Symbol;
use super::types::{EdgeEnd, NodeId, ROOT, TextIndex};
use crate::config::BuildConfig;
use crate::error::{BuildError, Result};

/// Builder driving construction over a fixed text
pub struct SuffixTreeBuilder<S> {
    /// Input symbols, followed by the terminator if one is configured
    text: Vec<S>,
    /// Length of the caller's input, terminator excluded
    input_len: usize,
    terminator: Option<S>,
    nodes: NodeArena,
    edges: EdgeTable<S>,
    active: ActivePoint,
    /// Number of symbols processed so far; open edges end here
    frontier: TextIndex,
}

impl<S: Symbol> SuffixTreeBuilder<S> {
    /// Validate the input and prepare a builder positioned before the
    /// first symbol.
    pub fn new(text: impl Into<Vec<S>>, config: &BuildConfig<S>) -> Result<Self> {
        let mut text = text.into();
        if text.is_empty() {
            return Err(BuildError::EmptyText);
        }

        let input_len = text.len();
        if let Some(terminator) = config.terminator {
            if let Some(position) = text.iter().position(|&s| s == terminator) {
                return Err(BuildError::ReservedSymbol { position });
            }
            text.push(terminator);
        }

        // At most n leaves and n - 1 internal nodes besides the root
        let capacity = 2 * text.len();
        Ok(Self {
            text,
            input_len,
            terminator: config.terminator,
            nodes: NodeArena::with_capacity(capacity),
            edges: EdgeTable::with_capacity(capacity),
            active: ActivePoint::new(),
            frontier: 0,
        })
    }

    /// Total number of symbols the pass will consume, terminator included
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty input is rejected by [`SuffixTreeBuilder::new`]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of symbols consumed so far
    pub fn position(&self) -> usize {
        self.frontier
    }

    /// Whether every symbol has been consumed
    pub fn is_done(&self) -> bool {
        self.frontier == self.text.len()
    }

    /// Run the extension phase for the next symbol.
    ///
    /// Returns `false` once the whole text has been consumed.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.extend(self.frontier);
        true
    }

    /// Consume the rest of the text
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Complete construction and freeze the result
    pub fn finish(mut self) -> SuffixTree<S> {
        self.run();
        tracing::debug!(
            symbols = self.text.len(),
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "suffix tree built"
        );
        SuffixTree::from_parts(
            self.text,
            self.input_len,
            self.terminator,
            self.nodes,
            self.edges,
        )
    }

    /// Extension phase for `text[i]`.
    fn extend(&mut self, i: TextIndex) {
        self.frontier = i + 1;
        let symbol = self.text[i];
        let mut last_created: Option<NodeId> = None;

        let parent = loop {
            let mut parent = self.active.source;

            if self.active.is_explicit() {
                if self.edges.contains(self.active.source, symbol) {
                    break parent;
                }
            } else {
                let edge = self
                    .edges
                    .expect(self.active.source, self.text[self.active.first]);
                if self.text[edge.start + self.active.len()] == symbol {
                    break parent;
                }
                parent = self
                    .edges
                    .split(&self.text, &mut self.nodes, edge, &self.active);
            }

            let leaf = self.nodes.alloc();
            self.edges.insert(
                &self.text,
                Edge {
                    source: parent,
                    target: leaf,
                    start: i,
                    end: EdgeEnd::Open,
                },
            );

            self.link(last_created, parent);
            last_created = Some(parent);

            if self.active.source == ROOT {
                self.active.first += 1;
            } else {
                self.active.source = self.follow_suffix_link(self.active.source);
            }
            self.active
                .canonicalize(&self.text, &self.edges, self.frontier);
        };

        self.link(last_created, parent);

        self.active.end += 1;
        self.active
            .canonicalize(&self.text, &self.edges, self.frontier);

        tracing::trace!(
            phase = i,
            nodes = self.nodes.len(),
            active_source = self.active.source,
            active_len = self.active.len(),
            "extended"
        );
    }

    /// Point the node created by the previous insertion at `target`.
    ///
    /// The root never gets a link, so an insertion made directly at the
    /// root leaves nothing to link.
    fn link(&mut self, from: Option<NodeId>, target: NodeId) {
        if let Some(node) = from.filter(|&n| n != ROOT) {
            self.nodes.set_suffix_link(node, target);
        }
    }

    fn follow_suffix_link(&self, node: NodeId) -> NodeId {
        match self.nodes.suffix_link(node) {
            Some(target) => target,
            None => panic!("active node {node} has no suffix link"),
        }
    }
}
