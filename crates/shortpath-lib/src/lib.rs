//! Shortpath library entry points.
//!
//! This crate exposes an in-memory graph of labelled vertices, a
//! single-source Dijkstra solver that produces a distance/predecessor table,
//! and path reconstruction on top of that table. Higher-level consumers (the
//! CLI) should only depend on the items exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, Weight};
pub use output::{DistanceRow, DistanceTableSummary, PathRenderMode, PathStep, PathSummary};
pub use path::{dijkstra, DijkstraTable, TableEntry};
pub use routing::{shortest_path_between, Path};

/// Build the five-vertex demonstration graph: `A-B (1)`, `B-C (3)`,
/// `C-D (1)`, `D-E (2)` and `B-E (8)`.
pub fn sample_graph(directed: bool, weighted: bool) -> Graph {
    let mut graph = Graph::with_vertices(directed, weighted, ["A", "B", "C", "D", "E"]);
    for (from, to, weight) in SAMPLE_EDGES {
        let from = graph.add_vertex(from);
        let to = graph.add_vertex(to);
        graph.set_edge_by_id(from, to, weight);
    }
    graph
}

const SAMPLE_EDGES: [(&str, &str, Weight); 5] = [
    ("A", "B", 1),
    ("B", "C", 3),
    ("C", "D", 1),
    ("D", "E", 2),
    ("B", "E", 8),
];
