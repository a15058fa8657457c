//! Graph algorithms
//!
//! Algorithms run directly against [`Graph`](crate::graph::Graph) and keep
//! their per-vertex bookkeeping in the graph's label slots.

pub mod pathfinding;

pub use pathfinding::{dijkstra, dijkstra_with, shortest_path, Path, SearchConfig, ShortestPaths};
