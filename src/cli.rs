//! CLI argument parsing for wayfind
//!
//! Uses clap derive parsing. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use wayfind_core::format::OutputFormat;
use wayfind_core::graph::VertexId;

/// Wayfind - shortest-path CLI for weighted undirected graphs
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths from a source vertex
    Route {
        /// Edge list file (lines of 'u v weight' or 'u v', '-1' terminates)
        file: PathBuf,

        /// Source vertex
        #[arg(long, short)]
        source: VertexId,

        /// Report only the path to this vertex
        #[arg(long, short)]
        target: Option<VertexId>,

        /// Abort on malformed edge list lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Display a graph as adjacency list (and optionally matrix)
    Show {
        /// Edge list file
        file: PathBuf,

        /// Also display the dense adjacency matrix
        #[arg(long)]
        matrix: bool,

        /// Abort on malformed edge list lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Check whether two vertices are adjacent
    Adjacent {
        /// Edge list file
        file: PathBuf,

        /// First vertex
        u: VertexId,

        /// Second vertex
        v: VertexId,

        /// Abort on malformed edge list lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
