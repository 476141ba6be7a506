//! Output formatting for path and distance-table rendering.
//!
//! Every renderer returns a `String` so command handlers decide where it goes
//! and tests can inspect it directly.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use shortpath_lib::{DistanceTableSummary, PathRenderMode, PathSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header line followed by one numbered line per vertex.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Single `A -> B -> C` line.
    Arrow,
    /// `+`/`|`/`-` prefixed vertex list.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a path summary in this format.
    pub fn render_path(self, summary: &PathSummary) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(summary.render(PathRenderMode::PlainText)),
            OutputFormat::Rich => Ok(summary.render(PathRenderMode::RichText)),
            OutputFormat::Arrow => Ok(summary.render(PathRenderMode::Arrow)),
            OutputFormat::Basic => Ok(render_basic(summary)),
            OutputFormat::Json => render_json(summary),
        }
    }

    /// Render a distance table in this format. Only JSON differs from the
    /// plain table.
    pub fn render_table(self, summary: &DistanceTableSummary) -> Result<String> {
        match self {
            OutputFormat::Json => render_json(summary),
            _ => Ok(summary.render()),
        }
    }
}

/// Render a path in basic format.
///
/// Uses `+`/`|`/`-` prefixes for first/middle/last steps.
pub fn render_basic(summary: &PathSummary) -> String {
    let len = summary.steps.len();
    let mut lines: Vec<String> = summary
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            format!("{} {}", prefix, step.label)
        })
        .collect();
    lines.push(format!("total distance {}", summary.distance));
    let mut buffer = lines.join("\n");
    buffer.push('\n');
    buffer
}

/// Render any summary as pretty-printed JSON.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    buffer.push('\n');
    Ok(buffer)
}
