//! Node store for suffix tree construction.
//!
//! Nodes are plain arena slots addressed by [`NodeId`]. A node carries only
//! its suffix link; labels and children live in the edge table.

use super::types::{NodeId, ROOT};

/// A node of the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    /// Node whose path-label is this node's path-label minus its first
    /// symbol. `None` until established; never set on the root.
    pub suffix_link: Option<NodeId>,
}

/// Arena of nodes. Nodes are never removed, so ids stay valid for the
/// lifetime of the arena.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an arena holding only the root
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an arena holding only the root, with room for `capacity` nodes.
    ///
    /// A suffix tree over `n` symbols has at most `2n` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::default());
        Self { nodes }
    }

    /// Allocate a fresh node with no suffix link
    pub fn alloc(&mut self) -> NodeId {
        let id = NodeId::try_from(self.nodes.len()).expect("node arena exceeded NodeId range");
        self.nodes.push(Node::default());
        id
    }

    /// Get a node's suffix link
    #[inline]
    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node as usize].suffix_link
    }

    /// Establish a node's suffix link.
    ///
    /// A link is only ever written once with a meaningful target; writing
    /// the same target again is allowed, a different one is a defect.
    pub fn set_suffix_link(&mut self, node: NodeId, target: NodeId) {
        assert_ne!(node, ROOT, "the root never carries a suffix link");
        let slot = &mut self.nodes[node as usize].suffix_link;
        if let Some(existing) = *slot {
            assert_eq!(
                existing, target,
                "suffix link of node {node} re-targeted from {existing} to {target}"
            );
        }
        *slot = Some(target);
    }

    /// Number of allocated nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is allocated on creation
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
