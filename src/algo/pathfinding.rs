//! Single-source shortest paths (Dijkstra)
//!
//! Tentative distances and the explored set are owned by one search run.
//! The predecessor edge of every improved vertex is written to that vertex's
//! label, and paths are rebuilt by following those labels back to the source.

use crate::graph::{EdgeHandle, Graph, GraphResult, Label, VertexHandle};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use tracing::debug;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Weight of an edge that carries no numeric label
    pub default_weight: f64,
    /// Stop once this vertex is settled (None = explore everything reachable)
    pub stop_at: Option<VertexHandle>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            stop_at: None,
        }
    }
}

/// A path as the sequence of edges from source to target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub edges: Vec<EdgeHandle>,
    pub cost: f64,
}

impl Path {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the trivial path from a vertex to itself
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Outcome of one Dijkstra run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexHandle,
    distance: FxHashMap<VertexHandle, f64>,
    settled: FxHashSet<VertexHandle>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexHandle {
        self.source
    }

    /// Final distance to `vertex`; infinity unless it was settled
    ///
    /// A run that stopped early leaves some vertices with tentative
    /// distances. Those are not reported.
    pub fn distance(&self, vertex: VertexHandle) -> f64 {
        if !self.settled.contains(&vertex) {
            return f64::INFINITY;
        }
        self.distance.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, vertex: VertexHandle) -> bool {
        self.settled.contains(&vertex)
    }

    /// Number of vertices settled before the run ended
    pub fn settled(&self) -> usize {
        self.settled.len()
    }

    /// Rebuild the path to `target` from the predecessor labels
    ///
    /// Returns `None` when `target` was not settled. The labels are those
    /// written by the run that produced `self`; relabelling vertices or running
    /// another search on the same graph invalidates them.
    pub fn path_to<V, E>(
        &self,
        graph: &Graph<V, E>,
        target: VertexHandle,
    ) -> GraphResult<Option<Path>>
    where
        V: Eq + Hash + Clone,
    {
        graph.vertex(target)?;
        if !self.settled.contains(&target) {
            return Ok(None);
        }
        if target == self.source {
            return Ok(Some(Path {
                edges: Vec::new(),
                cost: 0.0,
            }));
        }

        let mut edges = Vec::new();
        let mut current = target;
        while current != self.source {
            // A broken chain or one longer than the graph means no usable path
            let Some(edge) = graph.vertex_label(current)?.and_then(Label::as_edge) else {
                return Ok(None);
            };
            if edges.len() >= graph.vertex_count() {
                return Ok(None);
            }
            edges.push(edge);
            current = graph.from(edge)?;
        }
        edges.reverse();

        Ok(Some(Path {
            edges,
            cost: self.distance(target),
        }))
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexHandle,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `source` over the whole reachable component
pub fn dijkstra<V, E>(graph: &mut Graph<V, E>, source: VertexHandle) -> GraphResult<ShortestPaths>
where
    V: Eq + Hash + Clone,
{
    dijkstra_with(graph, source, &SearchConfig::default())
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Weights are read from numeric edge labels. A decrease-key pushes a fresh
/// queue entry; the superseded one is discarded when popped because its
/// vertex is already explored. Negative weights are not supported.
pub fn dijkstra_with<V, E>(
    graph: &mut Graph<V, E>,
    source: VertexHandle,
    config: &SearchConfig,
) -> GraphResult<ShortestPaths>
where
    V: Eq + Hash + Clone,
{
    graph.vertex(source)?;
    if let Some(target) = config.stop_at {
        graph.vertex(target)?;
    }
    graph.clear_vertex_labels();

    let mut distance = FxHashMap::default();
    let mut explored = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    distance.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if !explored.insert(vertex) {
            continue;
        }
        if config.stop_at == Some(vertex) {
            break;
        }

        let neighbours = graph
            .outgoing(vertex)?
            .map(|edge| -> GraphResult<(EdgeHandle, VertexHandle, f64)> {
                let weight = graph
                    .edge_label(edge)?
                    .and_then(Label::as_number)
                    .unwrap_or(config.default_weight);
                Ok((edge, graph.to(edge)?, weight))
            })
            .collect::<GraphResult<Vec<_>>>()?;

        for (edge, next, weight) in neighbours {
            let next_cost = cost + weight;
            if next_cost < distance.get(&next).copied().unwrap_or(f64::INFINITY) {
                distance.insert(next, next_cost);
                graph.set_vertex_label(next, edge)?;
                heap.push(State {
                    cost: next_cost,
                    vertex: next,
                });
            }
        }
    }

    debug!(%source, settled = explored.len(), reached = distance.len(), "dijkstra finished");
    Ok(ShortestPaths {
        source,
        distance,
        settled: explored,
    })
}

/// Shortest path from `source` to `target`, stopping once `target` is settled
pub fn shortest_path<V, E>(
    graph: &mut Graph<V, E>,
    source: VertexHandle,
    target: VertexHandle,
) -> GraphResult<Option<Path>>
where
    V: Eq + Hash + Clone,
{
    let config = SearchConfig {
        stop_at: Some(target),
        ..SearchConfig::default()
    };
    let paths = dijkstra_with(graph, source, &config)?;
    paths.path_to(graph, target)
}
