//! Core identifiers shared by the node store, edge table and cursor.

/// Index of a node in the node arena
pub type NodeId = u32;

/// Index of a symbol in the text
pub type TextIndex = usize;

/// The root node, allocated first by every builder
pub const ROOT: NodeId = 0;

/// End of an edge label during construction.
///
/// Leaf edges are `Open`: their label always runs to the current frontier
/// of the text, so they grow with every phase without being touched.
/// Splitting closes the near half of an edge; the far half keeps the
/// original end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Runs to the current frontier
    Open,
    /// Ends before this text index (exclusive)
    At(TextIndex),
}

impl EdgeEnd {
    /// Resolve against the current frontier (exclusive end of processed text)
    #[inline]
    pub fn resolve(self, frontier: TextIndex) -> TextIndex {
        match self {
            EdgeEnd::Open => frontier,
            EdgeEnd::At(end) => end,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, EdgeEnd::Open)
    }
}
