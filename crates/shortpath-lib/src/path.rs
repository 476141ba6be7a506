use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::routing::Path;

/// Distance/predecessor table produced by one run of [`dijkstra`].
///
/// The table borrows the graph it was computed from, so the graph cannot be
/// edited while results derived from it are still in use.
#[derive(Debug, Clone)]
pub struct DijkstraTable<'g> {
    graph: &'g Graph,
    source: VertexId,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<VertexId>>,
}

/// Row of a [`DijkstraTable`] resolved to labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry<'g> {
    pub label: &'g str,
    /// `None` when the vertex is unreachable from the source.
    pub distance: Option<u64>,
    /// The source is its own predecessor; unreachable vertices have none.
    pub predecessor: Option<&'g str>,
}

impl<'g> DijkstraTable<'g> {
    /// Graph the table was computed over.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Label of the vertex the run started from.
    pub fn source(&self) -> &'g str {
        self.graph.label_of(self.source)
    }

    pub fn source_id(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source to `label`, `None` if unreachable.
    pub fn distance(&self, label: &str) -> Result<Option<u64>> {
        let id = self.graph.resolve(label)?;
        Ok(self.distances[id])
    }

    /// Shortest distance by vertex identifier.
    pub fn distance_to(&self, id: VertexId) -> Option<u64> {
        self.distances.get(id).copied().flatten()
    }

    /// Vertex immediately before `label` on its shortest path.
    pub fn predecessor(&self, label: &str) -> Result<Option<&'g str>> {
        let id = self.graph.resolve(label)?;
        Ok(self.predecessors[id].map(|prev| self.graph.label_of(prev)))
    }

    pub fn is_reachable(&self, label: &str) -> Result<bool> {
        Ok(self.distance(label)?.is_some())
    }

    /// Every row of the table in vertex insertion order.
    pub fn entries(&self) -> impl Iterator<Item = TableEntry<'g>> + '_ {
        let graph = self.graph;
        self.distances
            .iter()
            .zip(&self.predecessors)
            .enumerate()
            .map(move |(id, (&distance, &predecessor))| TableEntry {
                label: graph.label_of(id),
                distance,
                predecessor: predecessor.map(|prev| graph.label_of(prev)),
            })
    }

    /// Reachable vertices and their distances in insertion order.
    pub fn reachable(&self) -> impl Iterator<Item = (&'g str, u64)> + '_ {
        self.entries()
            .filter_map(|entry| entry.distance.map(|distance| (entry.label, distance)))
    }

    /// Reconstruct the shortest path from the source to `destination`.
    ///
    /// The total distance of the returned [`Path`] is summed from the graph's
    /// edge weights and always equals [`DijkstraTable::distance`] for
    /// `destination`.
    pub fn path_to(&self, destination: &str) -> Result<Path> {
        let goal = self.graph.resolve(destination)?;
        let Some(steps) = self.reconstruct_path(goal) else {
            return Err(Error::NoPathExists {
                from: self.source().to_string(),
                to: destination.to_string(),
            });
        };

        let path = Path::from_ids(self.graph, &steps)?;
        debug_assert_eq!(Some(path.distance()), self.distances[goal]);
        Ok(path)
    }

    /// Walk predecessors back from `goal`. The walk is bounded by the vertex
    /// count, so a broken chain yields `None` instead of looping.
    fn reconstruct_path(&self, goal: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![goal];
        let mut current = goal;
        for _ in 0..self.predecessors.len() {
            if current == self.source {
                path.reverse();
                return Some(path);
            }
            current = self.predecessors[current]?;
            path.push(current);
        }
        None
    }
}

/// Run Dijkstra's algorithm from `source` and return the full table.
///
/// Selection is a linear scan over the unvisited set, which keeps the solver
/// O(V²) without a priority queue. Among equally distant candidates the vertex
/// inserted first wins; unreachable vertices are drained last and never relax
/// their edges.
pub fn dijkstra<'g>(graph: &'g Graph, source: &str) -> Result<DijkstraTable<'g>> {
    let source_id = graph.resolve(source)?;
    let count = graph.vertex_count();

    let mut distances: Vec<Option<u64>> = vec![None; count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; count];
    let mut visited = vec![false; count];

    distances[source_id] = Some(0);
    predecessors[source_id] = Some(source_id);

    while let Some(current) = closest_unvisited(&distances, &visited) {
        visited[current] = true;

        let Some(current_distance) = distances[current] else {
            continue;
        };

        for edge in graph.edges_of(current) {
            let next = edge.target();
            let candidate = current_distance.saturating_add(u64::from(edge.weight()));
            if distances[next].map_or(true, |known| candidate < known) {
                distances[next] = Some(candidate);
                predecessors[next] = Some(current);
            }
        }
    }

    debug!(
        source,
        vertices = count,
        reachable = distances.iter().filter(|d| d.is_some()).count(),
        "computed shortest-path table"
    );

    Ok(DijkstraTable {
        graph,
        source: source_id,
        distances,
        predecessors,
    })
}

/// Unvisited vertex with the smallest distance; reachable before unreachable,
/// lower id first on ties.
fn closest_unvisited(distances: &[Option<u64>], visited: &[bool]) -> Option<VertexId> {
    distances
        .iter()
        .enumerate()
        .filter(|(id, _)| !visited[*id])
        .min_by_key(|(id, distance)| (distance.is_none(), **distance, *id))
        .map(|(id, _)| id)
}
