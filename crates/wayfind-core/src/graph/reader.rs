//! Edge-list parsing
//!
//! Line format: `u v weight`, or `u v` for an implicit weight of 1. A line
//! consisting of a single `-1` terminates input early; blank lines are
//! skipped. Malformed lines are handled per `ParsePolicy`; negative weights
//! are rejected regardless of policy.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, WayfindError};
use crate::graph::store::{Graph, VertexId};

/// What to do with a line that cannot be parsed as an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip malformed lines (reference behavior)
    #[default]
    Skip,
    /// Abort on the first malformed line
    Strict,
}

/// Parse an edge list from any buffered reader
pub fn read_graph<R: BufRead>(reader: R, policy: ParsePolicy) -> Result<Graph> {
    let mut graph = Graph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.is_empty() {
            continue;
        }
        // End-of-input marker
        if fields == ["-1"] {
            break;
        }

        match parse_edge(&fields) {
            Ok((u, v, weight)) => graph.add_edge(u, v, weight)?,
            Err(reason) => match policy {
                ParsePolicy::Strict => {
                    return Err(WayfindError::MalformedLine {
                        line: line_no,
                        reason,
                    })
                }
                ParsePolicy::Skip => {
                    tracing::warn!(line = line_no, %reason, "skipping malformed edge list line");
                }
            },
        }
    }

    Ok(graph)
}

/// Parse an edge list held in a string
pub fn parse_graph(text: &str, policy: ParsePolicy) -> Result<Graph> {
    read_graph(text.as_bytes(), policy)
}

/// Load an edge list from a file. Fails if the file is missing or if the
/// parsed graph contains no vertices.
pub fn load_graph(path: &Path, policy: ParsePolicy) -> Result<Graph> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            WayfindError::GraphFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WayfindError::Io(err)
        }
    })?;

    let graph = read_graph(BufReader::new(file), policy)?;
    if graph.is_empty() {
        return Err(WayfindError::EmptyGraph {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        path = %path.display(),
        "graph loaded"
    );
    Ok(graph)
}

fn parse_edge(fields: &[&str]) -> std::result::Result<(VertexId, VertexId, i64), String> {
    if fields.len() < 2 || fields.len() > 3 {
        return Err(format!(
            "expected 'u v [weight]', got {} field(s)",
            fields.len()
        ));
    }

    let u = parse_vertex(fields[0])?;
    let v = parse_vertex(fields[1])?;
    let weight = match fields.get(2) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| format!("invalid weight '{}'", raw))?,
        None => 1,
    };

    Ok((u, v, weight))
}

fn parse_vertex(raw: &str) -> std::result::Result<VertexId, String> {
    raw.parse::<VertexId>()
        .map_err(|_| format!("invalid vertex '{}'", raw))
}
