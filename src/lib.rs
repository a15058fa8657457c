//! Streetgraph
//!
//! A directed graph addressed through owner-validated position handles, with
//! Dijkstra shortest-path search and a road-network loader built on top.
//!
//! # Architecture
//!
//! - `graph`: handles, incidence-list graph core, label store
//! - `algo`: single-source shortest paths over the graph core
//! - `network`: road files -> graph, named route search
//! - `profile`: caller-owned wall-clock profiler
//!
//! ## Example Usage
//!
//! ```rust
//! use streetgraph::algo::dijkstra;
//! use streetgraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let c = graph.insert_vertex("C");
//!
//! let ab = graph.insert_edge(a, b, "ab").unwrap();
//! let bc = graph.insert_edge(b, c, "bc").unwrap();
//! graph.set_edge_label(ab, 1.0).unwrap();
//! graph.set_edge_label(bc, 2.0).unwrap();
//!
//! let paths = dijkstra(&mut graph, a).unwrap();
//! let path = paths.path_to(&graph, c).unwrap().unwrap();
//! assert_eq!(path.edges, vec![ab, bc]);
//! assert_eq!(path.cost, 3.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod network;
pub mod profile;

// Re-export main types for convenience
pub use graph::{
    EdgeHandle, ErrorKind, Graph, GraphError, GraphId, GraphResult, Label, VertexHandle,
};

pub use algo::{dijkstra, dijkstra_with, shortest_path, Path, SearchConfig, ShortestPaths};

pub use network::{
    LoadOptions, LoadStats, NetworkError, NetworkResult, Road, RoadNetwork, Route, Segment,
};

pub use profile::{ProfileScope, Profiler, ProfilerError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
