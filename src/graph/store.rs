//! In-memory directed graph over incidence lists
//!
//! Vertices and edges live in generation-tagged arenas and are addressed by
//! handles. Membership sets and per-vertex incidence lists are
//! insertion-ordered, so iteration order survives unrelated removals.
//!
//! Index layout:
//! - vertex_order / edge_order: current members in insertion order
//! - value_index: vertex data -> handle (vertices are unique by value)
//! - pair_index: (from, to) -> edge (at most one edge per ordered pair)

use super::arena::Arena;
use super::edge::Edge;
use super::label::{Label, LabelStore};
use super::types::{EdgeHandle, GraphId, VertexHandle};
use super::vertex::{FxIndexSet, Vertex};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use thiserror::Error;
use tracing::debug;

/// Coarse classification of [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A handle is foreign to this graph or no longer a member
    Position,
    /// Edge insertion broke a structural rule
    Insertion,
    /// Vertex removal blocked by incident edges
    Removal,
}

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid position: {0} is not a member of this graph")]
    InvalidVertex(VertexHandle),

    #[error("Invalid position: {0} is not a member of this graph")]
    InvalidEdge(EdgeHandle),

    #[error("Cannot insert edge: self-loop on {0}")]
    SelfLoop(VertexHandle),

    #[error("Cannot insert edge: {from} -> {to} already exists")]
    DuplicateEdge { from: VertexHandle, to: VertexHandle },

    #[error("Cannot store value: already held by {0}")]
    DuplicateVertex(VertexHandle),

    #[error("Cannot remove {vertex}: {outgoing} outgoing and {incoming} incoming edges remain")]
    VertexHasEdges {
        vertex: VertexHandle,
        outgoing: usize,
        incoming: usize,
    },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidVertex(_) | GraphError::InvalidEdge(_) => ErrorKind::Position,
            GraphError::SelfLoop(_)
            | GraphError::DuplicateEdge { .. }
            | GraphError::DuplicateVertex(_) => ErrorKind::Insertion,
            GraphError::VertexHasEdges { .. } => ErrorKind::Removal,
        }
    }

    pub fn is_position(&self) -> bool {
        self.kind() == ErrorKind::Position
    }

    pub fn is_insertion(&self) -> bool {
        self.kind() == ErrorKind::Insertion
    }

    pub fn is_removal(&self) -> bool {
        self.kind() == ErrorKind::Removal
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed graph with vertex data `V` and edge data `E`
///
/// Every handle the graph returns is checked on the way back in: a handle from
/// another graph, or one whose element has been removed, yields a position
/// error from every entry point.
#[derive(Debug)]
pub struct Graph<V, E> {
    id: GraphId,

    vertex_slots: Arena<Vertex<V>>,
    edge_slots: Arena<Edge<E>>,

    vertex_order: FxIndexSet<VertexHandle>,
    edge_order: FxIndexSet<EdgeHandle>,

    value_index: FxHashMap<V, VertexHandle>,
    pair_index: FxHashMap<(VertexHandle, VertexHandle), EdgeHandle>,

    labels: LabelStore,
}

impl<V, E> Default for Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Create a new empty graph with its own identity
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for a known graph size
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Graph {
            id: GraphId::next(),
            vertex_slots: Arena::with_capacity(vertices),
            edge_slots: Arena::with_capacity(edges),
            vertex_order: FxIndexSet::with_capacity_and_hasher(vertices, Default::default()),
            edge_order: FxIndexSet::with_capacity_and_hasher(edges, Default::default()),
            value_index: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            pair_index: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
            labels: LabelStore::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    fn vertex_record(&self, vertex: VertexHandle) -> GraphResult<&Vertex<V>> {
        if vertex.graph() != self.id {
            return Err(GraphError::InvalidVertex(vertex));
        }
        self.vertex_slots
            .get(vertex.index(), vertex.generation())
            .ok_or(GraphError::InvalidVertex(vertex))
    }

    fn vertex_record_mut(&mut self, vertex: VertexHandle) -> GraphResult<&mut Vertex<V>> {
        if vertex.graph() != self.id {
            return Err(GraphError::InvalidVertex(vertex));
        }
        self.vertex_slots
            .get_mut(vertex.index(), vertex.generation())
            .ok_or(GraphError::InvalidVertex(vertex))
    }

    fn edge_record(&self, edge: EdgeHandle) -> GraphResult<&Edge<E>> {
        if edge.graph() != self.id {
            return Err(GraphError::InvalidEdge(edge));
        }
        self.edge_slots
            .get(edge.index(), edge.generation())
            .ok_or(GraphError::InvalidEdge(edge))
    }

    fn edge_record_mut(&mut self, edge: EdgeHandle) -> GraphResult<&mut Edge<E>> {
        if edge.graph() != self.id {
            return Err(GraphError::InvalidEdge(edge));
        }
        self.edge_slots
            .get_mut(edge.index(), edge.generation())
            .ok_or(GraphError::InvalidEdge(edge))
    }

    /// Whether `vertex` is a current member of this graph
    pub fn contains_vertex(&self, vertex: VertexHandle) -> bool {
        self.vertex_record(vertex).is_ok()
    }

    /// Whether `edge` is a current member of this graph
    pub fn contains_edge(&self, edge: EdgeHandle) -> bool {
        self.edge_record(edge).is_ok()
    }

    /// Insert a vertex holding `data`
    ///
    /// Vertices are unique by value: if a member already holds data equal to
    /// `data`, that member's handle is returned and nothing is added.
    pub fn insert_vertex(&mut self, data: V) -> VertexHandle {
        if let Some(&existing) = self.value_index.get(&data) {
            return existing;
        }

        let key = data.clone();
        let (index, generation) = self.vertex_slots.insert(Vertex::new(data));
        let handle = VertexHandle::new(self.id, index, generation);

        self.vertex_order.insert(handle);
        self.value_index.insert(key, handle);
        debug!(vertex = %handle, "inserted vertex");
        handle
    }

    /// Insert a vertex if there is data to insert; `None` inserts nothing
    pub fn insert_optional_vertex(&mut self, data: Option<V>) -> Option<VertexHandle> {
        data.map(|data| self.insert_vertex(data))
    }

    /// Insert a directed edge `from -> to` holding `data`
    ///
    /// Fails with a position error if either endpoint is not a member, and
    /// with an insertion error on a self-loop or when an edge with the same
    /// ordered pair already exists. The reverse pair is a different edge.
    pub fn insert_edge(
        &mut self,
        from: VertexHandle,
        to: VertexHandle,
        data: E,
    ) -> GraphResult<EdgeHandle> {
        self.vertex_record(from)?;
        self.vertex_record(to)?;

        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if self.pair_index.contains_key(&(from, to)) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        let (index, generation) = self.edge_slots.insert(Edge::new(from, to, data));
        let handle = EdgeHandle::new(self.id, index, generation);

        self.vertex_record_mut(from)?.outgoing.insert(handle);
        self.vertex_record_mut(to)?.incoming.insert(handle);
        self.edge_order.insert(handle);
        self.pair_index.insert((from, to), handle);

        debug!(edge = %handle, %from, %to, "inserted edge");
        Ok(handle)
    }

    /// Remove an isolated vertex and return its data
    ///
    /// Fails with a removal error while any edge still enters or leaves it.
    pub fn remove_vertex(&mut self, vertex: VertexHandle) -> GraphResult<V> {
        let record = self.vertex_record(vertex)?;
        if record.is_incident() {
            return Err(GraphError::VertexHasEdges {
                vertex,
                outgoing: record.outgoing.len(),
                incoming: record.incoming.len(),
            });
        }

        let record = self
            .vertex_slots
            .remove(vertex.index(), vertex.generation())
            .ok_or(GraphError::InvalidVertex(vertex))?;

        self.vertex_order.shift_remove(&vertex);
        self.value_index.remove(&record.data);
        self.labels.remove_vertex(vertex);

        debug!(%vertex, "removed vertex");
        Ok(record.data)
    }

    /// Remove an edge, unlinking it from both endpoints, and return its data
    pub fn remove_edge(&mut self, edge: EdgeHandle) -> GraphResult<E> {
        self.edge_record(edge)?;
        let record = self
            .edge_slots
            .remove(edge.index(), edge.generation())
            .ok_or(GraphError::InvalidEdge(edge))?;

        self.vertex_record_mut(record.from)?.unlink(edge);
        self.vertex_record_mut(record.to)?.unlink(edge);
        self.edge_order.shift_remove(&edge);
        self.pair_index.remove(&record.pair());
        self.labels.remove_edge(edge);

        debug!(%edge, "removed edge");
        Ok(record.data)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertex_order.iter().copied()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeHandle> + '_ {
        self.edge_order.iter().copied()
    }

    /// Edges leaving `vertex`, in insertion order
    pub fn outgoing(
        &self,
        vertex: VertexHandle,
    ) -> GraphResult<impl Iterator<Item = EdgeHandle> + '_> {
        Ok(self.vertex_record(vertex)?.outgoing.iter().copied())
    }

    /// Edges entering `vertex`, in insertion order
    pub fn incoming(
        &self,
        vertex: VertexHandle,
    ) -> GraphResult<impl Iterator<Item = EdgeHandle> + '_> {
        Ok(self.vertex_record(vertex)?.incoming.iter().copied())
    }

    pub fn out_degree(&self, vertex: VertexHandle) -> GraphResult<usize> {
        Ok(self.vertex_record(vertex)?.outgoing.len())
    }

    pub fn in_degree(&self, vertex: VertexHandle) -> GraphResult<usize> {
        Ok(self.vertex_record(vertex)?.incoming.len())
    }

    /// `(from, to)` endpoints of an edge
    pub fn endpoints(&self, edge: EdgeHandle) -> GraphResult<(VertexHandle, VertexHandle)> {
        Ok(self.edge_record(edge)?.pair())
    }

    pub fn from(&self, edge: EdgeHandle) -> GraphResult<VertexHandle> {
        Ok(self.edge_record(edge)?.from)
    }

    pub fn to(&self, edge: EdgeHandle) -> GraphResult<VertexHandle> {
        Ok(self.edge_record(edge)?.to)
    }

    /// Data stored at a vertex
    pub fn vertex(&self, vertex: VertexHandle) -> GraphResult<&V> {
        Ok(&self.vertex_record(vertex)?.data)
    }

    /// Data stored at an edge
    pub fn edge(&self, edge: EdgeHandle) -> GraphResult<&E> {
        Ok(&self.edge_record(edge)?.data)
    }

    /// Replace a vertex's data, returning the old value
    ///
    /// Fails with an insertion error if another vertex already holds `data`.
    pub fn replace_vertex(&mut self, vertex: VertexHandle, data: V) -> GraphResult<V> {
        self.vertex_record(vertex)?;
        if let Some(&holder) = self.value_index.get(&data) {
            if holder != vertex {
                return Err(GraphError::DuplicateVertex(holder));
            }
        }

        let key = data.clone();
        let old = std::mem::replace(&mut self.vertex_record_mut(vertex)?.data, data);
        self.value_index.remove(&old);
        self.value_index.insert(key, vertex);
        Ok(old)
    }

    /// Replace an edge's data, returning the old value
    pub fn replace_edge(&mut self, edge: EdgeHandle, data: E) -> GraphResult<E> {
        let record = self.edge_record_mut(edge)?;
        Ok(std::mem::replace(&mut record.data, data))
    }

    /// Handle of the vertex holding a value equal to `data`, if any
    pub fn find_vertex<Q>(&self, data: &Q) -> Option<VertexHandle>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.value_index.get(data).copied()
    }

    /// Handle of the edge `from -> to`, if present
    pub fn find_edge(
        &self,
        from: VertexHandle,
        to: VertexHandle,
    ) -> GraphResult<Option<EdgeHandle>> {
        self.vertex_record(from)?;
        self.vertex_record(to)?;
        Ok(self.pair_index.get(&(from, to)).copied())
    }

    /// Attach a label to a vertex, returning the previous one
    pub fn set_vertex_label(
        &mut self,
        vertex: VertexHandle,
        label: impl Into<Label>,
    ) -> GraphResult<Option<Label>> {
        self.vertex_record(vertex)?;
        Ok(self.labels.set_vertex(vertex, label.into()))
    }

    /// Label attached to a vertex; `None` when unlabelled
    pub fn vertex_label(&self, vertex: VertexHandle) -> GraphResult<Option<&Label>> {
        self.vertex_record(vertex)?;
        Ok(self.labels.vertex(vertex))
    }

    /// Attach a label to an edge, returning the previous one
    pub fn set_edge_label(
        &mut self,
        edge: EdgeHandle,
        label: impl Into<Label>,
    ) -> GraphResult<Option<Label>> {
        self.edge_record(edge)?;
        Ok(self.labels.set_edge(edge, label.into()))
    }

    /// Label attached to an edge; `None` when unlabelled
    pub fn edge_label(&self, edge: EdgeHandle) -> GraphResult<Option<&Label>> {
        self.edge_record(edge)?;
        Ok(self.labels.edge(edge))
    }

    /// Reset every vertex and edge label to none
    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    /// Reset vertex labels only, keeping edge labels such as weights
    pub fn clear_vertex_labels(&mut self) {
        self.labels.clear_vertices();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_slots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> (Graph<&'static str, u32>, [VertexHandle; 4]) {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let d = graph.insert_vertex("D");
        (graph, [a, b, c, d])
    }

    #[test]
    fn test_insert_vertex() {
        let mut graph: Graph<String, ()> = Graph::new();
        let v = graph.insert_vertex("A".to_string());
        assert_eq!(graph.vertex(v).unwrap(), "A");
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.contains_vertex(v));
    }

    #[test]
    fn test_insert_vertex_dedups_by_value() {
        let mut graph: Graph<String, ()> = Graph::new();
        let first = graph.insert_vertex("A".to_string());
        let second = graph.insert_vertex("A".to_string());
        assert_eq!(first, second);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.find_vertex("A"), Some(first));
    }

    #[test]
    fn test_insert_optional_vertex_none() {
        let mut graph: Graph<String, ()> = Graph::new();
        assert!(graph.insert_optional_vertex(None).is_none());
        assert!(graph.is_empty());
        assert!(graph.insert_optional_vertex(Some("A".to_string())).is_some());
    }

    #[test]
    fn test_insert_edge_links_both_endpoints() {
        let (mut graph, [a, b, ..]) = diamond();
        let e = graph.insert_edge(a, b, 7).unwrap();

        assert_eq!(graph.endpoints(e).unwrap(), (a, b));
        assert_eq!(graph.from(e).unwrap(), a);
        assert_eq!(graph.to(e).unwrap(), b);
        assert_eq!(*graph.edge(e).unwrap(), 7);
        assert_eq!(graph.outgoing(a).unwrap().collect::<Vec<_>>(), vec![e]);
        assert_eq!(graph.incoming(b).unwrap().collect::<Vec<_>>(), vec![e]);
        assert_eq!(graph.out_degree(b).unwrap(), 0);
        assert_eq!(graph.in_degree(a).unwrap(), 0);
    }

    #[test]
    fn test_self_loop_rejected() {
        let (mut graph, [a, ..]) = diamond();
        let err = graph.insert_edge(a, a, 1).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop(a));
        assert_eq!(err.kind(), ErrorKind::Insertion);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edge_rejected_reverse_allowed() {
        let (mut graph, [a, b, ..]) = diamond();
        graph.insert_edge(a, b, 1).unwrap();

        let err = graph.insert_edge(a, b, 2).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge { from: a, to: b });
        assert!(err.is_insertion());

        let back = graph.insert_edge(b, a, 2).unwrap();
        assert_eq!(graph.endpoints(back).unwrap(), (b, a));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex_blocked_by_outgoing() {
        let (mut graph, [a, b, ..]) = diamond();
        graph.insert_edge(a, b, 1).unwrap();

        let err = graph.remove_vertex(a).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexHasEdges { vertex: a, outgoing: 1, incoming: 0 }
        );
        assert!(err.is_removal());
    }

    #[test]
    fn test_remove_vertex_blocked_by_incoming() {
        let (mut graph, [a, b, ..]) = diamond();
        graph.insert_edge(a, b, 1).unwrap();
        assert!(graph.remove_vertex(b).unwrap_err().is_removal());
    }

    #[test]
    fn test_remove_vertex() {
        let (mut graph, [a, b, c, d]) = diamond();
        assert_eq!(graph.remove_vertex(b).unwrap(), "B");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![a, c, d]);
        assert!(graph.find_vertex(&"B").is_none());

        // Position is dead even though the value can be inserted again
        assert!(graph.vertex(b).unwrap_err().is_position());
        let b2 = graph.insert_vertex("B");
        assert_ne!(b, b2);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![a, c, d, b2]);
    }

    #[test]
    fn test_remove_edge() {
        let (mut graph, [a, b, c, _]) = diamond();
        let ab = graph.insert_edge(a, b, 1).unwrap();
        let ac = graph.insert_edge(a, c, 2).unwrap();
        let cb = graph.insert_edge(c, b, 3).unwrap();

        assert_eq!(graph.remove_edge(ab).unwrap(), 1);

        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![ac, cb]);
        assert_eq!(graph.outgoing(a).unwrap().collect::<Vec<_>>(), vec![ac]);
        assert_eq!(graph.incoming(b).unwrap().collect::<Vec<_>>(), vec![cb]);
        assert!(graph.endpoints(ab).unwrap_err().is_position());
        assert!(graph.remove_edge(ab).unwrap_err().is_position());

        // The pair is free again
        assert!(graph.insert_edge(a, b, 4).is_ok());
    }

    #[test]
    fn test_remove_vertex_after_its_edges() {
        let (mut graph, [a, b, ..]) = diamond();
        let ab = graph.insert_edge(a, b, 1).unwrap();
        let ba = graph.insert_edge(b, a, 1).unwrap();
        graph.remove_edge(ab).unwrap();
        graph.remove_edge(ba).unwrap();
        assert_eq!(graph.remove_vertex(a).unwrap(), "A");
    }

    #[test]
    fn test_incidence_order_is_insertion_order() {
        let (mut graph, [a, b, c, d]) = diamond();
        let ad = graph.insert_edge(a, d, 0).unwrap();
        let ab = graph.insert_edge(a, b, 0).unwrap();
        let ac = graph.insert_edge(a, c, 0).unwrap();
        let db = graph.insert_edge(d, b, 0).unwrap();

        assert_eq!(graph.outgoing(a).unwrap().collect::<Vec<_>>(), vec![ad, ab, ac]);

        // Unrelated removal does not disturb order elsewhere
        graph.remove_edge(db).unwrap();
        graph.remove_edge(ab).unwrap();
        assert_eq!(graph.outgoing(a).unwrap().collect::<Vec<_>>(), vec![ad, ac]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![ad, ac]);
    }

    #[test]
    fn test_labels() {
        let (mut graph, [a, b, ..]) = diamond();
        let e = graph.insert_edge(a, b, 1).unwrap();

        assert!(graph.vertex_label(a).unwrap().is_none());
        assert!(graph.set_vertex_label(a, true).unwrap().is_none());
        graph.set_edge_label(e, 2.5).unwrap();

        assert_eq!(graph.vertex_label(a).unwrap(), Some(&Label::Flag(true)));
        assert_eq!(graph.edge_label(e).unwrap().and_then(Label::as_number), Some(2.5));

        graph.clear_vertex_labels();
        assert!(graph.vertex_label(a).unwrap().is_none());
        assert!(graph.edge_label(e).unwrap().is_some());

        graph.set_vertex_label(b, e).unwrap();
        graph.clear_labels();
        assert!(graph.vertex_label(b).unwrap().is_none());
        assert!(graph.edge_label(e).unwrap().is_none());
    }

    #[test]
    fn test_label_dropped_with_element() {
        let (mut graph, [a, b, ..]) = diamond();
        let e = graph.insert_edge(a, b, 1).unwrap();
        graph.set_edge_label(e, 1.0).unwrap();
        graph.remove_edge(e).unwrap();

        let again = graph.insert_edge(a, b, 1).unwrap();
        assert!(graph.edge_label(again).unwrap().is_none());
        assert!(graph.edge_label(e).unwrap_err().is_position());
    }

    #[test]
    fn test_foreign_handles_rejected() {
        let (mut first, [a, b, ..]) = diamond();
        let (mut second, [x, y, ..]) = diamond();
        let e = first.insert_edge(a, b, 1).unwrap();

        // Same values, same slots, different graphs
        assert_eq!(second.insert_edge(a, y, 1).unwrap_err(), GraphError::InvalidVertex(a));
        assert_eq!(second.insert_edge(x, b, 1).unwrap_err(), GraphError::InvalidVertex(b));
        assert_eq!(second.remove_edge(e).unwrap_err(), GraphError::InvalidEdge(e));
        assert!(second.remove_vertex(a).unwrap_err().is_position());
        assert!(second.set_vertex_label(a, 1.0).unwrap_err().is_position());
        assert!(second.edge_label(e).unwrap_err().is_position());
        assert!(second.outgoing(a).is_err());
        assert!(second.incoming(a).is_err());
        assert!(!second.contains_vertex(a));
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut graph: Graph<u32, ()> = Graph::new();
        let old = graph.insert_vertex(1);
        graph.remove_vertex(old).unwrap();

        // Same slot, new generation
        let new = graph.insert_vertex(2);
        assert!(graph.contains_vertex(new));
        assert!(!graph.contains_vertex(old));
        assert_eq!(graph.vertex(old).unwrap_err(), GraphError::InvalidVertex(old));
    }

    #[test]
    fn test_replace_vertex() {
        let (mut graph, [a, b, ..]) = diamond();
        assert_eq!(graph.replace_vertex(a, "Z").unwrap(), "A");
        assert_eq!(graph.find_vertex(&"Z"), Some(a));
        assert!(graph.find_vertex(&"A").is_none());

        let err = graph.replace_vertex(a, "B").unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex(b));

        // Storing the value a vertex already holds is fine
        assert_eq!(graph.replace_vertex(b, "B").unwrap(), "B");
    }

    #[test]
    fn test_replace_edge() {
        let (mut graph, [a, b, ..]) = diamond();
        let e = graph.insert_edge(a, b, 1).unwrap();
        assert_eq!(graph.replace_edge(e, 9).unwrap(), 1);
        assert_eq!(*graph.edge(e).unwrap(), 9);
    }

    #[test]
    fn test_find_edge() {
        let (mut graph, [a, b, c, _]) = diamond();
        let e = graph.insert_edge(a, b, 1).unwrap();
        assert_eq!(graph.find_edge(a, b).unwrap(), Some(e));
        assert_eq!(graph.find_edge(b, a).unwrap(), None);
        assert_eq!(graph.find_edge(a, c).unwrap(), None);
    }

    #[test]
    fn test_error_messages() {
        let (mut graph, [a, ..]) = diamond();
        let err = graph.insert_edge(a, a, 1).unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }
}
