//! Road network file loading
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! fromName toName length roadName
//! ```
//!
//! Each record becomes two directed edges sharing the road name and length.
//! A record whose edges already exist is skipped rather than failing the load.

use super::{NetworkError, NetworkResult, RoadNetwork};
use crate::graph::{GraphError, VertexHandle};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Insert the reverse edge for every record
    pub two_way: bool,
    /// Log and skip malformed lines instead of failing the load
    pub skip_malformed: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            two_way: true,
            skip_malformed: false,
        }
    }
}

/// Counters for one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Directed road edges added
    pub roads: usize,
    /// Distinct endpoints in the network after the load
    pub endpoints: usize,
    /// Records whose edges were already present
    pub skipped: usize,
    /// Malformed lines ignored under `skip_malformed`
    pub malformed: usize,
}

/// One parsed record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub length: f64,
    pub name: String,
}

impl Road {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        length: f64,
        name: impl Into<String>,
    ) -> Self {
        Road {
            from: from.into(),
            to: to.into(),
            length,
            name: name.into(),
        }
    }

    /// Parse `fromName toName length roadName`; fields past the fourth are ignored
    pub fn parse(record: &str) -> Result<Road, String> {
        let mut fields = record.split_whitespace();
        let (Some(from), Some(to), Some(length), Some(name)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(format!("expected 4 fields, got {}", record.split_whitespace().count()));
        };

        let length: f64 = length
            .parse()
            .map_err(|_| format!("invalid road length '{}'", length))?;
        if !length.is_finite() || length < 0.0 {
            return Err(format!("road length must be a non-negative number, got {}", length));
        }

        Ok(Road::new(from, to, length, name))
    }
}

impl RoadNetwork {
    /// Load records from a file
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> NetworkResult<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NetworkError::FileNotFound(path.to_path_buf()),
            _ => NetworkError::Io(e),
        })?;
        let stats = self.load_reader(BufReader::new(file), options)?;
        info!(
            path = %path.display(),
            roads = stats.roads,
            endpoints = stats.endpoints,
            "Network loaded"
        );
        Ok(stats)
    }

    /// Load records from any buffered reader; blank lines are ignored
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        options: &LoadOptions,
    ) -> NetworkResult<LoadStats> {
        let mut stats = LoadStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let road = match Road::parse(&line) {
                Ok(road) => road,
                Err(reason) if options.skip_malformed => {
                    warn!(line = index + 1, %reason, "skipping malformed record");
                    stats.malformed += 1;
                    continue;
                }
                Err(reason) => {
                    return Err(NetworkError::Parse {
                        line: index + 1,
                        reason,
                    })
                }
            };

            let expected = if options.two_way { 2 } else { 1 };
            let added = self.add_road(&road, options.two_way)?;
            if added < expected {
                stats.skipped += 1;
            }
            stats.roads += added;
        }

        stats.endpoints = self.endpoint_count();
        Ok(stats)
    }

    /// Add one road, returning how many directed edges were new
    ///
    /// Endpoints are created on first sight. An edge that collides with an
    /// existing one (or would be a self-loop) counts as already present.
    pub fn add_road(&mut self, road: &Road, two_way: bool) -> NetworkResult<usize> {
        let from = self.add_location(&road.from);
        let to = self.add_location(&road.to);

        let mut added = 0;
        if self.add_directed(from, to, road)? {
            added += 1;
        }
        if two_way && self.add_directed(to, from, road)? {
            added += 1;
        }
        Ok(added)
    }

    fn add_directed(
        &mut self,
        from: VertexHandle,
        to: VertexHandle,
        road: &Road,
    ) -> NetworkResult<bool> {
        match self.graph.insert_edge(from, to, road.name.clone()) {
            Ok(edge) => {
                self.graph.set_edge_label(edge, road.length)?;
                Ok(true)
            }
            Err(err @ (GraphError::SelfLoop(_) | GraphError::DuplicateEdge { .. })) => {
                debug!(road = %road.name, %err, "road already present");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
