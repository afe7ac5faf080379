use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as atomic symbols of the indexed text.
///
/// Automatically implemented for any type satisfying the bounds (`u8`,
/// `char`, `u16`, `u32`, `u64`, ...).
///
/// - `Copy`: the text is read by index, symbols are passed by value
/// - `Eq + Hash`: the edge table is keyed by `(node, first symbol)`
/// - `Ord`: children of a finished tree are kept sorted by first symbol
/// - `Debug`: invariant panics and tree rendering
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}
