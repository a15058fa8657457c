//! Core type definitions for the position model
//!
//! A handle is an opaque `(graph, slot, generation)` triple. The graph id ties
//! it to the instance that issued it; the generation ties it to one lifetime of
//! the slot, so a handle kept past removal never matches a recycled slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one graph instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    /// Allocate a fresh id; never returns the same value twice in a process
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.0)
    }
}

/// Position of a vertex inside the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexHandle {
    graph: GraphId,
    index: u32,
    generation: u32,
}

impl VertexHandle {
    pub(crate) fn new(graph: GraphId, index: u32, generation: u32) -> Self {
        VertexHandle { graph, index, generation }
    }

    /// Graph this handle was issued by
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for VertexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({}:{}v{})", self.graph.0, self.index, self.generation)
    }
}

/// Position of an edge inside the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeHandle {
    graph: GraphId,
    index: u32,
    generation: u32,
}

impl EdgeHandle {
    pub(crate) fn new(graph: GraphId, index: u32, generation: u32) -> Self {
        EdgeHandle { graph, index, generation }
    }

    /// Graph this handle was issued by
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}:{}v{})", self.graph.0, self.index, self.generation)
    }
}
