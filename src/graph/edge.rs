//! Edge records
//!
//! A directed edge owns its data value and refers to its two endpoints by
//! handle. Both endpoints belong to the graph that owns the edge.

use super::types::VertexHandle;

#[derive(Debug, Clone)]
pub(crate) struct Edge<E> {
    /// Source vertex (edge goes FROM this vertex)
    pub(crate) from: VertexHandle,

    /// Target vertex (edge goes TO this vertex)
    pub(crate) to: VertexHandle,

    pub(crate) data: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(from: VertexHandle, to: VertexHandle, data: E) -> Self {
        Edge { from, to, data }
    }

    /// Ordered `(from, to)` pair identifying this edge structurally
    pub(crate) fn pair(&self) -> (VertexHandle, VertexHandle) {
        (self.from, self.to)
    }
}
