//! Route search between named endpoints

use super::{NetworkResult, RoadNetwork};
use crate::algo::dijkstra;
use crate::graph::Label;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// One road traversed by a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub road: String,
    pub length: f64,
}

/// Shortest route between two endpoints, segments ordered start to end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub segments: Vec<Segment>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Distance: {}", self.distance)?;
        for segment in &self.segments {
            write!(f, "\n{} {}", segment.road, segment.length)?;
        }
        Ok(())
    }
}

impl RoadNetwork {
    /// Shortest route from `start` to `end`
    ///
    /// Both names must have been loaded; otherwise the search is rejected with
    /// an unknown-endpoint error. `Ok(None)` means no route connects them.
    pub fn shortest_route(&mut self, start: &str, end: &str) -> NetworkResult<Option<Route>> {
        let source = self.require_endpoint(start)?;
        let target = self.require_endpoint(end)?;

        let paths = dijkstra(&mut self.graph, source)?;
        let Some(path) = paths.path_to(&self.graph, target)? else {
            info!(start, end, settled = paths.settled(), "no route found");
            return Ok(None);
        };

        let mut segments = Vec::with_capacity(path.len());
        for edge in &path.edges {
            let road = self.graph.edge(*edge)?.clone();
            let length = self
                .graph
                .edge_label(*edge)?
                .and_then(Label::as_number)
                .unwrap_or_default();
            segments.push(Segment { road, length });
        }

        info!(start, end, distance = path.cost, segments = segments.len(), "route found");
        Ok(Some(Route {
            from: start.to_string(),
            to: end.to_string(),
            distance: path.cost,
            segments,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{LoadOptions, NetworkError};
    use std::io::Cursor;

    fn network(data: &str) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        network
            .load_reader(Cursor::new(data), &LoadOptions::default())
            .unwrap();
        network
    }

    #[test]
    fn test_route_follows_roads_in_order() {
        let mut network = network("X Y 4 Main\nY Z 3 Oak\n");
        let route = network.shortest_route("X", "Z").unwrap().unwrap();

        assert_eq!(route.distance, 7.0);
        assert_eq!(
            route.segments,
            vec![
                Segment { road: "Main".to_string(), length: 4.0 },
                Segment { road: "Oak".to_string(), length: 3.0 },
            ]
        );
    }

    #[test]
    fn test_route_is_symmetric_on_two_way_roads() {
        let mut network = network("X Y 4 Main\nY Z 3 Oak\n");
        let route = network.shortest_route("Z", "X").unwrap().unwrap();
        assert_eq!(route.distance, 7.0);
        assert_eq!(route.segments[0].road, "Oak");
        assert_eq!(route.segments[1].road, "Main");
    }

    #[test]
    fn test_shorter_detour_wins() {
        let mut network = network("A B 10 Highway\nA C 2 Elm\nC B 3 Pine\n");
        let route = network.shortest_route("A", "B").unwrap().unwrap();
        assert_eq!(route.distance, 5.0);
        let roads: Vec<_> = route.segments.iter().map(|s| s.road.as_str()).collect();
        assert_eq!(roads, vec!["Elm", "Pine"]);
    }

    #[test]
    fn test_no_route() {
        let mut network = network("A B 1 First\nC D 1 Second\n");
        assert!(network.shortest_route("A", "D").unwrap().is_none());
    }

    #[test]
    fn test_same_start_and_end() {
        let mut network = network("A B 1 First\n");
        let route = network.shortest_route("A", "A").unwrap().unwrap();
        assert_eq!(route.distance, 0.0);
        assert!(route.segments.is_empty());
    }

    #[test]
    fn test_unknown_endpoint() {
        let mut network = network("A B 1 First\n");
        let err = network.shortest_route("A", "Q").unwrap_err();
        assert!(matches!(err, NetworkError::UnknownEndpoint(ref name) if name == "Q"));
    }

    #[test]
    fn test_display() {
        let mut network = network("X Y 4 Main\nY Z 3 Oak\n");
        let route = network.shortest_route("X", "Z").unwrap().unwrap();
        assert_eq!(route.to_string(), "Total Distance: 7\nMain 4\nOak 3");
    }
}
