//! Graph construction from command-line flags.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use shortpath_lib::{sample_graph, Graph, Weight};

/// Edge given on the command line as `FROM:TO` or `FROM:TO:WEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// Defaults to 1 when omitted.
    pub weight: Option<Weight>,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(':').collect();
        let (from, to, weight) = match parts.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, weight] => {
                let weight = weight
                    .trim()
                    .parse::<Weight>()
                    .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;
                (*from, *to, Some(weight))
            }
            _ => {
                return Err(format!(
                    "expected FROM:TO or FROM:TO:WEIGHT, got '{}'",
                    value
                ))
            }
        };

        let from = from.trim();
        let to = to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(format!("edge '{}' has an empty endpoint", value));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(weight) => write!(f, "{}:{}:{}", self.from, self.to, weight),
            None => write!(f, "{}:{}", self.from, self.to),
        }
    }
}

/// Flags describing the graph a command runs against.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Mirror every edge so it can be walked in both directions.
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Ignore edge weights; every edge costs 1.
    #[arg(long, global = true)]
    pub unweighted: bool,

    /// Add a vertex (repeatable). Edge endpoints are added implicitly.
    #[arg(long = "vertex", value_name = "LABEL", global = true)]
    pub vertices: Vec<String>,

    /// Add or update an edge as FROM:TO[:WEIGHT] (repeatable).
    #[arg(long = "edge", value_name = "FROM:TO[:WEIGHT]", global = true)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphArgs {
    /// `true` when no vertices or edges were supplied on the command line.
    pub fn uses_sample_graph(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Build the requested graph, falling back to the demonstration graph.
    pub fn build(&self) -> Result<Graph> {
        let directed = !self.undirected;
        let weighted = !self.unweighted;

        if self.uses_sample_graph() {
            debug!(directed, weighted, "using demonstration graph");
            return Ok(sample_graph(directed, weighted));
        }

        let mut graph = Graph::new(directed, weighted);
        for label in &self.vertices {
            graph.add_vertex(label.as_str());
        }
        for edge in &self.edges {
            graph.add_vertex(edge.from.as_str());
            graph.add_vertex(edge.to.as_str());
            graph
                .set_edge(&edge.from, &edge.to, edge.weight.unwrap_or(1))
                .with_context(|| format!("failed to add edge {}", edge))?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            directed,
            weighted,
            "built graph from arguments"
        );
        Ok(graph)
    }
}
