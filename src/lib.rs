//! # sufx - Linear-time suffix trees
//!
//! Builds the suffix tree of a fixed text with Ukkonen's online
//! algorithm: a single left-to-right pass that extends an implicit tree one
//! symbol at a time, using suffix links and an active point to keep total
//! work linear in the text length.
//!
//! ## Architecture
//!
//! - [`tree`] - Node arena, edge table, active point, builder and the
//!   finished read-only tree
//! - [`config`] - Construction options and the CLI config file
//! - [`error`] - Input validation errors
//! - [`output`] - Terminal rendering (CLI)
//! - [`utils`] - Input loading and progress reporting (CLI)
//!
//! ## Quick Start
//!
//! ```
//! use sufx::{BuildConfig, SuffixTree};
//!
//! let tree = SuffixTree::build_with(b"banana".to_vec(), &BuildConfig::with_terminator(b'$')).unwrap();
//! assert_eq!(tree.leaf_count(), 7);
//!
//! // Follow the edge for 'n' from the root
//! let edge = tree.edge(tree.root(), b'n').unwrap();
//! assert_eq!(tree.label(edge), b"na");
//! ```
//!
//! Any `Copy + Eq + Ord + Hash + Debug` type works as a symbol:
//!
//! ```
//! use sufx::SuffixTree;
//!
//! let tree = SuffixTree::build(vec![3u32, 1, 4, 1, 5]).unwrap();
//! assert!(tree.edge(tree.root(), 1).is_some());
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod tree;
pub mod utils;

pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use tree::{
    NodeId, ROOT, SuffixTree, SuffixTreeBuilder, Symbol, TextIndex, TreeEdge, TreeStats,
    Violation, verify,
};
