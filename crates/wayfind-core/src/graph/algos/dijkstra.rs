//! Single-source shortest paths (Dijkstra)
//!
//! Priority-first relaxation with a binary-heap frontier and lazy deletion:
//! a vertex may sit in the heap several times with decreasing keys, and
//! stale entries are discarded via the visited set when popped. Requires
//! non-negative edge weights, which the graph store guarantees.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use serde::Serialize;

use crate::error::{Result, WayfindError};
use crate::graph::store::{Graph, VertexId, Weight};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Weight,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Result of a shortest-path computation.
///
/// Both tables contain an entry for every vertex known to the graph at the
/// time of the run. Unreachable vertices carry `None` in both tables; they
/// are a fact of the graph, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// The source vertex the run started from
    pub source: VertexId,
    /// Minimum total edge weight from the source; `None` = unreachable
    pub distances: BTreeMap<VertexId, Option<Weight>>,
    /// Previous vertex on a shortest path; `None` for the source and for
    /// unreached vertices
    pub predecessors: BTreeMap<VertexId, Option<VertexId>>,
}

impl ShortestPaths {
    /// Shortest distance to `vertex`, or `None` if unreachable or unknown
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(&vertex).copied().flatten()
    }

    /// Whether a finite path from the source to `vertex` exists
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reconstruct the shortest path from the source to `target` by walking
    /// predecessor links backward.
    ///
    /// Returns `None` when no path exists: the target is unreachable,
    /// unknown, or the predecessor chain does not terminate at the source.
    /// When `target` equals the source the path is the single-element
    /// sequence containing the source.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(vertex) = current {
            path.push(vertex);
            // Bound the walk: an inconsistent table could contain a cycle
            if path.len() > self.predecessors.len() + 1 {
                return None;
            }
            current = self.predecessors.get(&vertex).copied().flatten();
        }
        path.reverse();

        if path.first() == Some(&self.source) {
            Some(path)
        } else {
            None
        }
    }
}

/// Compute shortest distances and predecessors from `source` to every vertex
/// in the graph.
///
/// Fails with an invalid-input error if `source` is not a known vertex; no
/// partial tables are produced in that case.
#[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.vertex_count()))]
pub fn shortest_paths(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    if !graph.contains(source) {
        return Err(WayfindError::VertexNotFound { vertex: source });
    }

    let mut distances: BTreeMap<VertexId, Option<Weight>> =
        graph.vertices().map(|v| (v, None)).collect();
    let mut predecessors: BTreeMap<VertexId, Option<VertexId>> =
        graph.vertices().map(|v| (v, None)).collect();
    distances.insert(source, Some(0));

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0,
    }));
    let mut visited: HashSet<VertexId> = HashSet::new();

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        // Lazy deletion: stale entries are discarded here
        if !visited.insert(vertex) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(vertex) {
            // A total beyond u64 cannot improve any representable path
            let Some(candidate) = distance.checked_add(weight) else {
                continue;
            };
            let improves = match distances.get(&neighbor).copied().flatten() {
                Some(best) => candidate < best,
                None => true,
            };
            // Strict improvement only: ties keep the first-discovered
            // predecessor
            if improves {
                distances.insert(neighbor, Some(candidate));
                predecessors.insert(neighbor, Some(vertex));
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        reached = distances.values().filter(|d| d.is_some()).count(),
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests;
