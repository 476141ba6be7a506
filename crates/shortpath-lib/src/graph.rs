use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::path::{dijkstra, DijkstraTable};
use crate::routing::{shortest_path_between, Path};

/// Dense identifier assigned to a vertex when it is inserted.
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Number of suggestions attached to [`Error::UnknownVertex`].
const MAX_SUGGESTIONS: usize = 3;

/// Directed, weighted arc owned by its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Identifier of the vertex this edge points to.
    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Named node together with its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    label: String,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(label: String) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edge to `target`, if one exists.
    pub fn edge_to(&self, target: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.target == target)
    }

    /// Insert an edge to `target` or overwrite the weight of the existing one.
    /// Returns `true` when a new edge was created.
    fn upsert_edge(&mut self, target: VertexId, weight: Weight) -> bool {
        if let Some(existing) = self.edges.iter_mut().find(|edge| edge.target == target) {
            existing.weight = weight;
            return false;
        }
        self.edges.push(Edge { target, weight });
        true
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({})", self.label)
    }
}

/// In-memory graph of labelled vertices stored in a single arena.
///
/// Labels are resolved to dense [`VertexId`]s at the API boundary; edges refer
/// to their destination by id. Iteration always follows insertion order so
/// solver results are reproducible.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Graph {
    /// Create an empty graph.
    ///
    /// When `directed` is `false` every edge insertion also writes the mirrored
    /// reverse edge. When `weighted` is `false` every edge weight is forced to 1.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a graph pre-populated with `labels`.
    pub fn with_vertices<I, S>(directed: bool, weighted: bool, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new(directed, weighted);
        graph.set_vertices(labels);
        graph
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Insert a vertex unless one with the same label already exists.
    /// Returns the identifier of the (new or existing) vertex.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.vertices.len();
        trace!(label = %label, id, "added vertex");
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(label));
        id
    }

    /// Replace every vertex (and therefore every edge) with fresh vertices.
    pub fn set_vertices<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices.clear();
        self.index.clear();
        for label in labels {
            self.add_vertex(label);
        }
        debug!(vertices = self.vertices.len(), "replaced vertex set");
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Lookup a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id])
    }

    /// Lookup a vertex identifier by label.
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Lookup a vertex by identifier.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of stored arcs. An undirected connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges.len()).sum()
    }

    /// `true` iff `from` has an outgoing edge to `to`.
    pub fn are_neighbors(&self, from: &str, to: &str) -> Result<bool> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        Ok(self.vertices[from].edge_to(to).is_some())
    }

    /// Labels of the vertices reachable over one outgoing edge of `label`.
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>> {
        let id = self.resolve(label)?;
        Ok(self.vertices[id]
            .edges
            .iter()
            .map(|edge| self.label_of(edge.target))
            .collect())
    }

    /// Insert an edge from `from` to `to`, or update its weight if it exists.
    ///
    /// Undirected graphs upsert the reverse edge with the same weight.
    /// Unweighted graphs store every edge with weight 1.
    pub fn set_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        self.set_edge_by_id(from_id, to_id, weight);
        Ok(())
    }

    /// Insert or update an edge with weight 1.
    pub fn set_unit_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.set_edge(from, to, 1)
    }

    /// Weight of the edge from `from` to `to`, or `None` when they are not neighbours.
    pub fn weight_of_edge(&self, from: &str, to: &str) -> Result<Option<Weight>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        Ok(self.weight_between(from, to))
    }

    /// Run Dijkstra's algorithm from `source` over the whole graph.
    pub fn dijkstras(&self, source: &str) -> Result<DijkstraTable<'_>> {
        dijkstra(self, source)
    }

    /// Shortest path from `source` to `destination`.
    pub fn shortest_path_between(&self, source: &str, destination: &str) -> Result<Path> {
        shortest_path_between(self, source, destination)
    }

    /// Labels similar to `label`, best match first, at most `limit` entries.
    pub fn fuzzy_vertex_matches(&self, label: &str, limit: usize) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .vertices
            .iter()
            .map(|vertex| {
                let score = strsim::jaro_winkler(&needle, &vertex.label.to_lowercase());
                (score, vertex.label.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    /// Upsert between two identifiers already known to be valid.
    pub(crate) fn set_edge_by_id(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        let weight = if self.weighted { weight } else { 1 };

        let inserted = self.vertices[from].upsert_edge(to, weight);
        if !self.directed {
            self.vertices[to].upsert_edge(from, weight);
        }

        trace!(from, to, weight, inserted, "set edge");
    }

    pub(crate) fn resolve(&self, label: &str) -> Result<VertexId> {
        self.vertex_id(label).ok_or_else(|| Error::UnknownVertex {
            label: label.to_string(),
            suggestions: self.fuzzy_vertex_matches(label, MAX_SUGGESTIONS),
        })
    }

    pub(crate) fn label_of(&self, id: VertexId) -> &str {
        &self.vertices[id].label
    }

    pub(crate) fn edges_of(&self, id: VertexId) -> &[Edge] {
        &self.vertices[id].edges
    }

    pub(crate) fn weight_between(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.vertices[from].edge_to(to).map(Edge::weight)
    }
}
