//! Table command handler for printing a full single-source distance table.

use anyhow::Result;
use tracing::info;

use shortpath_lib::DistanceTableSummary;

use crate::commands::handle_query_failure;
use shortpath_cli::graph_args::GraphArgs;
use shortpath_cli::output::OutputFormat;

/// Handle the table subcommand.
pub fn handle_table_command(
    graph_args: &GraphArgs,
    format: OutputFormat,
    source: &str,
) -> Result<String> {
    let graph = graph_args.build()?;
    let table = graph
        .dijkstras(source)
        .map_err(|err| handle_query_failure(&graph, err))?;

    let summary = DistanceTableSummary::from_table(&table);
    info!(
        source,
        reachable = summary.reachable,
        vertices = summary.rows.len(),
        "computed distance table"
    );
    format.render_table(&summary)
}
