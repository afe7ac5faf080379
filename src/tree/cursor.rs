//! The active point: where the next suffix insertion happens.

use super::edges::EdgeTable;
use super::symbol::Symbol;
use super::types::{NodeId, ROOT, TextIndex};

/// Path from `source` spelled by `text[first..end]`.
///
/// The cursor is *explicit* when the span is empty (it sits on `source`)
/// and *implicit* otherwise (it ends partway along an outgoing edge).
/// `first` may run one past `end` while the root is shrinking the span
/// from the front; that still counts as explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub source: NodeId,
    pub first: TextIndex,
    /// Exclusive end of the span
    pub end: TextIndex,
}

impl ActivePoint {
    /// Explicit cursor at the root
    pub fn new() -> Self {
        Self {
            source: ROOT,
            first: 0,
            end: 0,
        }
    }

    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.first >= self.end
    }

    #[inline]
    pub fn is_implicit(&self) -> bool {
        !self.is_explicit()
    }

    /// Number of symbols in the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.first)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_explicit()
    }

    /// Walk forward across every edge the span covers completely.
    ///
    /// Afterwards `source` is the deepest node on the path and the
    /// remaining span, if any, ends strictly inside one outgoing edge.
    pub fn canonicalize<S: Symbol>(
        &mut self,
        text: &[S],
        edges: &EdgeTable<S>,
        frontier: TextIndex,
    ) {
        while self.is_implicit() {
            let edge = edges.expect(self.source, text[self.first]);
            let edge_len = edge.len(frontier);
            if edge_len > self.len() {
                break;
            }
            self.first += edge_len;
            self.source = edge.target;
        }
    }
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::edges::Edge;
    use crate::tree::types::EdgeEnd;

    /// Root --"ab"--> 1 --"cab"--> 2, over text "abcab"
    fn chain() -> EdgeTable<u8> {
        let text = b"abcab";
        let mut table = EdgeTable::new();
        table.insert(
            text,
            Edge {
                source: ROOT,
                target: 1,
                start: 0,
                end: EdgeEnd::At(2),
            },
        );
        table.insert(
            text,
            Edge {
                source: 1,
                target: 2,
                start: 2,
                end: EdgeEnd::Open,
            },
        );
        table
    }

    #[test]
    fn test_new_cursor_is_explicit_root() {
        let active = ActivePoint::new();
        assert!(active.is_explicit());
        assert_eq!(active.source, ROOT);
        assert_eq!(active.len(), 0);
    }

    #[test]
    fn test_overshoot_counts_as_explicit() {
        let active = ActivePoint {
            source: ROOT,
            first: 4,
            end: 3,
        };
        assert!(active.is_explicit());
        assert_eq!(active.len(), 0);
    }

    #[test]
    fn test_canonicalize_stays_inside_edge() {
        let text = b"abcab";
        let edges = chain();
        // "a" ends inside the "ab" edge
        let mut active = ActivePoint {
            source: ROOT,
            first: 3,
            end: 4,
        };
        active.canonicalize(text, &edges, 5);
        assert_eq!(active.source, ROOT);
        assert_eq!((active.first, active.end), (3, 4));
    }

    #[test]
    fn test_canonicalize_lands_on_node() {
        let text = b"abcab";
        let edges = chain();
        // "ab" covers the first edge exactly
        let mut active = ActivePoint {
            source: ROOT,
            first: 3,
            end: 5,
        };
        active.canonicalize(text, &edges, 5);
        assert_eq!(active.source, 1);
        assert!(active.is_explicit());
    }

    #[test]
    fn test_canonicalize_walks_multiple_edges() {
        let text = b"abcabcx";
        let mut edges = EdgeTable::new();
        edges.insert(
            text,
            Edge {
                source: ROOT,
                target: 1,
                start: 0,
                end: EdgeEnd::At(1),
            },
        );
        edges.insert(
            text,
            Edge {
                source: 1,
                target: 2,
                start: 1,
                end: EdgeEnd::At(3),
            },
        );
        edges.insert(
            text,
            Edge {
                source: 2,
                target: 3,
                start: 3,
                end: EdgeEnd::Open,
            },
        );
        // "abca": crosses "a" and "bc", stops one symbol into the leaf edge
        let mut active = ActivePoint {
            source: ROOT,
            first: 0,
            end: 4,
        };
        active.canonicalize(text, &edges, 7);
        assert_eq!(active.source, 2);
        assert_eq!((active.first, active.end), (3, 4));
    }
}
