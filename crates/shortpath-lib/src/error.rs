use thiserror::Error;

/// Convenient result alias for the shortpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when an operation references a vertex label absent from the graph.
    #[error("unknown vertex: {label}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when the destination cannot be reached from the source.
    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// Raised when a path is built over two consecutive vertices that share no edge.
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    /// Raised when a path is built from an empty vertex sequence.
    #[error("path was empty")]
    EmptyPath,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
