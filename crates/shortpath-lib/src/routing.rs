use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::path::dijkstra;

/// Ordered vertex sequence through a graph together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    vertices: Vec<String>,
    distance: u64,
}

impl Path {
    /// Build a path from vertex labels, summing the weight of every
    /// consecutive edge in `graph`.
    pub fn new<S: AsRef<str>>(graph: &Graph, labels: &[S]) -> Result<Self> {
        let ids = labels
            .iter()
            .map(|label| graph.resolve(label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_ids(graph, &ids)
    }

    pub(crate) fn from_ids(graph: &Graph, ids: &[VertexId]) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::EmptyPath);
        }

        let distance = calculate_distance(graph, ids)?;
        Ok(Self {
            vertices: ids
                .iter()
                .map(|&id| graph.label_of(id).to_string())
                .collect(),
            distance,
        })
    }

    /// Replace the vertex sequence and recompute the distance from scratch.
    /// On error the path is left untouched.
    pub fn set_path<S: AsRef<str>>(&mut self, graph: &Graph, labels: &[S]) -> Result<()> {
        *self = Self::new(graph, labels)?;
        Ok(())
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Sum of the edge weights along the path.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn source(&self) -> &str {
        &self.vertices[0]
    }

    pub fn destination(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vertices.join(" -> "))
    }
}

fn calculate_distance(graph: &Graph, ids: &[VertexId]) -> Result<u64> {
    ids.windows(2).try_fold(0u64, |total, pair| {
        let weight = graph
            .weight_between(pair[0], pair[1])
            .ok_or_else(|| Error::MissingEdge {
                from: graph.label_of(pair[0]).to_string(),
                to: graph.label_of(pair[1]).to_string(),
            })?;
        Ok(total.saturating_add(u64::from(weight)))
    })
}

/// Compute the shortest path between two labelled vertices.
///
/// Runs the solver once for this query; nothing is cached between calls.
pub fn shortest_path_between(graph: &Graph, source: &str, destination: &str) -> Result<Path> {
    graph.resolve(source)?;
    graph.resolve(destination)?;

    let table = dijkstra(graph, source)?;
    let path = table.path_to(destination)?;
    debug!(
        source,
        destination,
        hops = path.hop_count(),
        distance = path.distance(),
        "planned path"
    );
    Ok(path)
}
