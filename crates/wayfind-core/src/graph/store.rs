//! Weighted undirected graph store
//!
//! Two representations, as in the classic adjacency exercise:
//! - `Graph`: adjacency map, efficient neighbor traversal (O(degree))
//! - `AdjacencyMatrix`: dense 0/1 view, O(1) adjacency checks and display

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, WayfindError};

/// Vertex identifier. The reference inputs use small non-negative integers.
pub type VertexId = u32;

/// Non-negative edge weight. Stored unsigned; the insertion API takes `i64`
/// so a negative weight is rejected explicitly rather than being
/// unrepresentable.
pub type Weight = u64;

/// Weighted undirected graph backed by a symmetric adjacency map.
///
/// Invariant: for every stored edge `{u, v, w}`, `v` appears in `u`'s
/// neighbor map with weight `w` and vice versa. BTreeMap keeps vertex and
/// neighbor iteration deterministic, which makes predecessor tie-breaks in
/// the shortest-path engine stable for a fixed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, Weight>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, rejecting the first negative weight
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, i64)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Insert an undirected edge between `u` and `v`.
    ///
    /// Creates vertex entries for `u` and `v` if absent. Re-inserting an
    /// unordered pair overwrites its weight (last write wins). Self-loops
    /// are stored but never shorten a path.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(WayfindError::NegativeWeight { u, v, weight });
        }
        let weight = weight as Weight;

        self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        Ok(())
    }

    /// Iterate over `(neighbor, weight)` pairs of `u` in ascending neighbor
    /// order. An absent vertex behaves as isolated (empty iterator).
    pub fn neighbors(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency
            .get(&u)
            .into_iter()
            .flatten()
            .map(|(&v, &w)| (v, w))
    }

    /// Iterate over all known vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Whether `u` appears in the graph
    pub fn contains(&self, u: VertexId) -> bool {
        self.adjacency.contains_key(&u)
    }

    /// Weight of the edge `{u, v}`, if present
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.adjacency.get(&u).and_then(|n| n.get(&v)).copied()
    }

    /// Whether `u` and `v` are connected by an edge
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Number of known vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges (unordered pairs, self-loops counted once)
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(&u, neighbors)| neighbors.keys().filter(|&&v| v >= u).count())
            .sum()
    }

    /// Largest vertex identifier, if the graph is non-empty
    pub fn max_vertex(&self) -> Option<VertexId> {
        self.adjacency.keys().next_back().copied()
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Dense adjacency matrix over vertices `0..order`.
///
/// Built on demand from a `Graph`; the order is `max_vertex + 1`, so vertex
/// identifiers index rows and columns directly.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Largest vertex count the dense view will materialize. Vertex ids
    /// index rows directly, so a single large id inflates the allocation
    /// quadratically.
    pub const MAX_ORDER: usize = 4096;

    /// Build the dense matrix view of a graph.
    ///
    /// Fails with a data error when the order (`max_vertex + 1`) exceeds
    /// `MAX_ORDER`; sparse queries via `Graph::are_adjacent` have no such
    /// limit.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let order = graph.max_vertex().map_or(0, |max| max as usize + 1);
        if order > Self::MAX_ORDER {
            return Err(WayfindError::MatrixTooLarge {
                order,
                limit: Self::MAX_ORDER,
            });
        }
        let mut cells = vec![0u8; order * order];
        for u in graph.vertices() {
            for (v, _) in graph.neighbors(u) {
                cells[u as usize * order + v as usize] = 1;
            }
        }
        Ok(Self { order, cells })
    }

    /// Number of rows/columns
    pub fn order(&self) -> usize {
        self.order
    }

    /// O(1) adjacency check; out-of-range vertices are never adjacent
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        let (u, v) = (u as usize, v as usize);
        if u >= self.order || v >= self.order {
            return false;
        }
        self.cells[u * self.order + v] == 1
    }

    /// Row `i` of the matrix, for display
    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.order..(i + 1) * self.order]
    }
}
