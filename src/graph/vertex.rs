//! Vertex records
//!
//! A vertex owns its data value and two insertion-ordered incidence lists:
//! edges leaving it and edges entering it.

use super::types::EdgeHandle;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered hash set over the Fx hasher
pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

#[derive(Debug, Clone)]
pub(crate) struct Vertex<V> {
    /// Stored value; vertices are deduplicated on it
    pub(crate) data: V,

    /// Edges whose `from` endpoint is this vertex
    pub(crate) outgoing: FxIndexSet<EdgeHandle>,

    /// Edges whose `to` endpoint is this vertex
    pub(crate) incoming: FxIndexSet<EdgeHandle>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(data: V) -> Self {
        Vertex {
            data,
            outgoing: FxIndexSet::default(),
            incoming: FxIndexSet::default(),
        }
    }

    /// Whether any edge still references this vertex in either direction
    pub(crate) fn is_incident(&self) -> bool {
        !self.outgoing.is_empty() || !self.incoming.is_empty()
    }

    /// Unlink an edge, keeping the order of the remaining ones
    pub(crate) fn unlink(&mut self, edge: EdgeHandle) {
        self.outgoing.shift_remove(&edge);
        self.incoming.shift_remove(&edge);
    }
}
