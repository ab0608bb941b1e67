//! Graph algorithms
//!
//! Currently a single engine: Dijkstra single-source shortest paths over the
//! weighted undirected graph store.

pub mod dijkstra;

pub use dijkstra::{shortest_paths, HeapEntry, ShortestPaths};
