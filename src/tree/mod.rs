//! Ukkonen suffix tree construction
//!
//! ## Architecture
//!
//! - `nodes`: node arena, one suffix link per node
//! - `edges`: edge table keyed by `(source, first symbol)`, with split
//! - `cursor`: the active point and its canonicalization
//! - `builder`: the per-symbol extension loop driving the above
//! - `suffix_tree`: the frozen, read-only result
//! - `walk`, `verify`, `stats`: read-only passes over a finished tree

pub mod builder;
pub mod cursor;
pub mod edges;
pub mod nodes;
pub mod stats;
pub mod suffix_tree;
pub mod symbol;
pub mod types;
pub mod verify;
pub mod walk;

pub use builder::SuffixTreeBuilder;
pub use stats::TreeStats;
pub use suffix_tree::{SuffixTree, TreeEdge};
pub use symbol::Symbol;
pub use types::{NodeId, ROOT, TextIndex};
pub use verify::{Violation, verify};
pub use walk::{NodeInfo, annotate};
