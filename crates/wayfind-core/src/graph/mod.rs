//! Graph representation and shortest-path operations
//!
//! Provides the data structures and algorithms of the wayfind core:
//! - Adjacency-list graph store with a dense matrix view
//! - Edge-list parsing with a configurable malformed-line policy
//! - Dijkstra shortest paths with predecessor-based path reconstruction

pub mod algos;
pub mod reader;
pub mod store;

pub use algos::{shortest_paths, ShortestPaths};
pub use reader::{load_graph, parse_graph, ParsePolicy};
pub use store::{AdjacencyMatrix, Graph, VertexId, Weight};
