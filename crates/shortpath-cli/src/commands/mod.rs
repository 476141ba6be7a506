// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod path;
pub mod table;

use shortpath_lib::{Error as GraphError, Graph};

/// Turn library errors into messages that point at the offending flag.
pub(crate) fn handle_query_failure(graph: &Graph, err: GraphError) -> anyhow::Error {
    match err {
        GraphError::UnknownVertex { label, suggestions } => {
            anyhow::anyhow!(format_unknown_vertex_message(&label, &suggestions))
        }
        GraphError::NoPathExists { from, to } => {
            anyhow::anyhow!(format_no_path_message(graph, &from, &to))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_vertex_message(label: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown vertex '{}'.", label);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        _ => {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_no_path_message(graph: &Graph, from: &str, to: &str) -> String {
    let mut message = format!("No path exists from {} to {}.", from, to);
    if graph.directed() {
        message.push_str(
            " Edges are directed; try --undirected or add the missing edge with --edge.",
        );
    } else {
        message.push_str(" Add an edge connecting the two components with --edge.");
    }
    message
}
