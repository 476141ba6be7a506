use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use crate::path::DijkstraTable;
use crate::routing::Path;

/// Presentation style for turning a [`PathSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRenderMode {
    PlainText,
    RichText,
    /// Single line in the `A -> B -> C` form.
    Arrow,
}

/// Vertex visited while traversing a path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub label: String,
    /// Weight of the edge used to reach this vertex; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_weight: Option<Weight>,
    pub cumulative: u64,
}

/// Structured representation of a path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub source: String,
    pub destination: String,
    pub hops: usize,
    pub distance: u64,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`Path`] into a summary with per-hop weights taken from `graph`.
    pub fn from_path(graph: &Graph, path: &Path) -> Result<Self> {
        let mut steps = Vec::with_capacity(path.vertices().len());
        let mut cumulative = 0u64;
        let mut previous: Option<&str> = None;

        for (index, label) in path.vertices().iter().enumerate() {
            let hop_weight = match previous {
                Some(from) => {
                    let weight =
                        graph
                            .weight_of_edge(from, label)?
                            .ok_or_else(|| Error::MissingEdge {
                                from: from.to_string(),
                                to: label.clone(),
                            })?;
                    cumulative = cumulative.saturating_add(u64::from(weight));
                    Some(weight)
                }
                None => None,
            };

            steps.push(PathStep {
                index,
                label: label.clone(),
                hop_weight,
                cumulative,
            });
            previous = Some(label.as_str());
        }

        Ok(Self {
            source: path.source().to_string(),
            destination: path.destination().to_string(),
            hops: path.hop_count(),
            distance: cumulative,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PathRenderMode) -> String {
        match mode {
            PathRenderMode::PlainText => self.render_plain(),
            PathRenderMode::RichText => self.render_rich(),
            PathRenderMode::Arrow => self.render_arrow(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path: {} -> {} ({} hops, distance: {})",
            self.source, self.destination, self.hops, self.distance
        );
        for step in &self.steps {
            match step.hop_weight {
                Some(weight) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{}, total {})",
                        step.index, step.label, weight, step.cumulative
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.label);
                }
            }
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Path** _{} → {}_ ({} hops, distance: `{}`)",
            self.source, self.destination, self.hops, self.distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index, step.label, step.cumulative
            );
        }
        buffer
    }

    fn render_arrow(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.label.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined}\n")
    }
}

/// One row of a rendered distance table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistanceRow {
    pub label: String,
    /// `None` when the vertex is unreachable.
    pub distance: Option<u64>,
    pub predecessor: Option<String>,
}

/// Serialisable snapshot of a [`DijkstraTable`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistanceTableSummary {
    pub source: String,
    pub reachable: usize,
    pub rows: Vec<DistanceRow>,
}

impl DistanceTableSummary {
    pub fn from_table(table: &DijkstraTable<'_>) -> Self {
        let rows: Vec<DistanceRow> = table
            .entries()
            .map(|entry| DistanceRow {
                label: entry.label.to_string(),
                distance: entry.distance,
                predecessor: entry.predecessor.map(str::to_string),
            })
            .collect();

        Self {
            source: table.source().to_string(),
            reachable: rows.iter().filter(|row| row.distance.is_some()).count(),
            rows,
        }
    }

    /// Plain-text table, one vertex per line.
    pub fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or(0);

        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Distances from {} ({} of {} reachable):",
            self.source,
            self.reachable,
            self.rows.len()
        );
        for row in &self.rows {
            match (row.distance, row.predecessor.as_deref()) {
                (Some(distance), Some(previous)) => {
                    let _ = writeln!(
                        buffer,
                        "  {:<width$}  {:>6}  via {}",
                        row.label, distance, previous
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "  {:<width$}  unreachable", row.label);
                }
            }
        }
        buffer
    }
}
