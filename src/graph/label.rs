//! Per-handle annotation slots
//!
//! Labels live outside the structural records so that algorithm state
//! (weights, predecessor edges, visit flags) can be attached, read and wiped
//! without touching vertex or edge data.

use super::types::{EdgeHandle, VertexHandle};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation value attached to a vertex or an edge
///
/// Supports:
/// - Number (f64), e.g. a road length
/// - Text
/// - Flag
/// - Vertex / Edge handles, e.g. a predecessor edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Label {
    Number(f64),
    Text(String),
    Flag(bool),
    Vertex(VertexHandle),
    Edge(EdgeHandle),
}

impl Label {
    /// Get numeric value if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Label::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get text value if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get flag value if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Label::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Get vertex handle if this refers to a vertex
    pub fn as_vertex(&self) -> Option<VertexHandle> {
        match self {
            Label::Vertex(v) => Some(*v),
            _ => None,
        }
    }

    /// Get edge handle if this refers to an edge
    pub fn as_edge(&self) -> Option<EdgeHandle> {
        match self {
            Label::Edge(e) => Some(*e),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Label::Number(_) => "Number",
            Label::Text(_) => "Text",
            Label::Flag(_) => "Flag",
            Label::Vertex(_) => "Vertex",
            Label::Edge(_) => "Edge",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "\"{}\"", s),
            Label::Flag(b) => write!(f, "{}", b),
            Label::Vertex(v) => write!(f, "{}", v),
            Label::Edge(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for Label {
    fn from(n: f64) -> Self {
        Label::Number(n)
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Number(n as f64)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<bool> for Label {
    fn from(b: bool) -> Self {
        Label::Flag(b)
    }
}

impl From<VertexHandle> for Label {
    fn from(v: VertexHandle) -> Self {
        Label::Vertex(v)
    }
}

impl From<EdgeHandle> for Label {
    fn from(e: EdgeHandle) -> Self {
        Label::Edge(e)
    }
}

/// Label tables for one graph, keyed by handle identity
///
/// A missing entry is the "none" state. The store does no position checks of
/// its own; the owning graph validates handles before reaching it.
#[derive(Debug, Default, Clone)]
pub(crate) struct LabelStore {
    vertex_labels: FxHashMap<VertexHandle, Label>,
    edge_labels: FxHashMap<EdgeHandle, Label>,
}

impl LabelStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_vertex(&mut self, vertex: VertexHandle, label: Label) -> Option<Label> {
        self.vertex_labels.insert(vertex, label)
    }

    pub(crate) fn vertex(&self, vertex: VertexHandle) -> Option<&Label> {
        self.vertex_labels.get(&vertex)
    }

    pub(crate) fn remove_vertex(&mut self, vertex: VertexHandle) -> Option<Label> {
        self.vertex_labels.remove(&vertex)
    }

    pub(crate) fn set_edge(&mut self, edge: EdgeHandle, label: Label) -> Option<Label> {
        self.edge_labels.insert(edge, label)
    }

    pub(crate) fn edge(&self, edge: EdgeHandle) -> Option<&Label> {
        self.edge_labels.get(&edge)
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeHandle) -> Option<Label> {
        self.edge_labels.remove(&edge)
    }

    /// Reset every vertex label to none
    pub(crate) fn clear_vertices(&mut self) {
        self.vertex_labels.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.vertex_labels.clear();
        self.edge_labels.clear();
    }
}
