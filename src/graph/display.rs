//! Graphviz DOT rendering
//!
//! `Display` writes the graph as a `digraph`: one quoted line per vertex,
//! then one `"from" -> "to" [label="data"];` line per edge, both in
//! insertion order.

use super::store::Graph;
use std::fmt;
use std::hash::Hash;

impl<V, E> fmt::Display for Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for vertex in self.vertices() {
            let data = self.vertex(vertex).map_err(|_| fmt::Error)?;
            writeln!(f, "  \"{}\"", data)?;
        }
        for edge in self.edges() {
            let (from, to) = self.endpoints(edge).map_err(|_| fmt::Error)?;
            let from = self.vertex(from).map_err(|_| fmt::Error)?;
            let to = self.vertex(to).map_err(|_| fmt::Error)?;
            let data = self.edge(edge).map_err(|_| fmt::Error)?;
            writeln!(f, "  \"{}\" -> \"{}\" [label=\"{}\"];", from, to, data)?;
        }
        write!(f, "}}")
    }
}
