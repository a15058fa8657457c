//! Road networks
//!
//! A road network is a `Graph<String, String>`: vertex data is the endpoint
//! name, edge data is the road name, and every edge carries its length as a
//! numeric label. Each undirected road is stored as two directed edges.

pub mod loader;
pub mod route;

use crate::graph::{Graph, GraphError, VertexHandle};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

pub use loader::{LoadOptions, LoadStats, Road};
pub use route::{Route, Segment};

/// Errors surfaced by loading or searching a road network
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Could not find file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid Endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Named endpoints joined by two-way roads
#[derive(Debug, Default)]
pub struct RoadNetwork {
    graph: Graph<String, String>,
    endpoints: FxHashMap<String, VertexHandle>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying graph
    pub fn graph(&self) -> &Graph<String, String> {
        &self.graph
    }

    /// Vertex for a loaded endpoint name
    pub fn endpoint(&self, name: &str) -> Option<VertexHandle> {
        self.endpoints.get(name).copied()
    }

    /// Vertex for a loaded endpoint name, or an unknown-endpoint error
    pub fn require_endpoint(&self, name: &str) -> NetworkResult<VertexHandle> {
        self.endpoint(name)
            .ok_or_else(|| NetworkError::UnknownEndpoint(name.to_string()))
    }

    /// Endpoint names in the order they were first seen
    pub fn endpoint_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .vertices()
            .filter_map(|v| self.graph.vertex(v).ok())
            .map(String::as_str)
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of directed road edges
    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Reuse the vertex for `name` or create it
    fn add_location(&mut self, name: &str) -> VertexHandle {
        if let Some(&vertex) = self.endpoints.get(name) {
            return vertex;
        }
        let vertex = self.graph.insert_vertex(name.to_string());
        self.endpoints.insert(name.to_string(), vertex);
        vertex
    }
}
