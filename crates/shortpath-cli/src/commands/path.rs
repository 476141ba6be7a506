//! Path command handler for computing the shortest path between two vertices.

use anyhow::{Context, Result};
use tracing::info;

use shortpath_lib::{sample_graph, PathSummary};

use crate::commands::handle_query_failure;
use shortpath_cli::graph_args::GraphArgs;
use shortpath_cli::output::OutputFormat;

/// Source and destination of the demonstration query.
const DEMO_QUERY: (&str, &str) = ("B", "E");

/// Handle the path subcommand.
///
/// Builds the graph described by `graph_args`, runs the solver from `from` and
/// renders the reconstructed path to `to`.
pub fn handle_path_command(
    graph_args: &GraphArgs,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<String> {
    let graph = graph_args.build()?;

    let path = graph
        .shortest_path_between(from, to)
        .map_err(|err| handle_query_failure(&graph, err))?;
    info!(from, to, distance = path.distance(), "found shortest path");

    let summary =
        PathSummary::from_path(&graph, &path).context("failed to build path summary for display")?;
    format.render_path(&summary)
}

/// Handle the demo subcommand: the B -> E query on the five-vertex sample graph.
pub fn handle_demo_command(graph_args: &GraphArgs, format: OutputFormat) -> Result<String> {
    let graph = sample_graph(!graph_args.undirected, !graph_args.unweighted);
    let (from, to) = DEMO_QUERY;

    let path = graph
        .shortest_path_between(from, to)
        .map_err(|err| handle_query_failure(&graph, err))?;
    let summary =
        PathSummary::from_path(&graph, &path).context("failed to build path summary for display")?;
    format.render_path(&summary)
}
