use super::*;

/// The worked example from the course notes: five vertices, seven edges.
/// From vertex 1 the best routes go through vertex 3.
fn sample_graph() -> Graph {
    Graph::from_edges([
        (1, 2, 4),
        (1, 3, 2),
        (2, 3, 1),
        (2, 4, 5),
        (3, 4, 8),
        (3, 5, 10),
        (4, 5, 2),
    ])
    .unwrap()
}

/// Two components: 0-1-3 / 0-2-4-5 connected, 6-7 isolated from vertex 0.
fn disconnected_graph() -> Graph {
    let mut g = Graph::new();
    for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 4), (4, 5), (6, 7)] {
        g.add_edge(u, v, 1).unwrap();
    }
    g
}

#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: 7,
        distance: 1,
    };
    let entry2 = HeapEntry {
        vertex: 2,
        distance: 5,
    };
    let entry3 = HeapEntry {
        vertex: 9,
        distance: 1,
    };

    // Lower distance compares as less (normal ordering; Reverse makes the
    // heap a min-heap)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to vertex order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
    assert_ne!(entry1, entry3);
}

#[test]
fn test_source_not_in_graph() {
    let g = sample_graph();
    let err = shortest_paths(&g, 99).unwrap_err();
    assert!(matches!(err, WayfindError::VertexNotFound { vertex: 99 }));
}

#[test]
fn test_sample_distances() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    assert_eq!(result.distance(1), Some(0));
    assert_eq!(result.distance(2), Some(3)); // via 1-3-2, beats direct 1-2
    assert_eq!(result.distance(3), Some(2));
    assert_eq!(result.distance(4), Some(8)); // via 1-3-2-4
    assert_eq!(result.distance(5), Some(10)); // via 1-3-2-4-5
}

#[test]
fn test_sample_path_reconstruction() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    assert_eq!(result.path_to(5), Some(vec![1, 3, 2, 4, 5]));
    assert_eq!(result.path_to(2), Some(vec![1, 3, 2]));
}

#[test]
fn test_source_distance_zero_predecessor_none() {
    let g = sample_graph();
    let result = shortest_paths(&g, 3).unwrap();

    assert_eq!(result.distance(3), Some(0));
    assert_eq!(result.predecessors[&3], None);
    assert_eq!(result.path_to(3), Some(vec![3]));
}

#[test]
fn test_triangle_inequality_at_fixpoint() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    for u in g.vertices() {
        for (v, w) in g.neighbors(u) {
            let du = result.distance(u).unwrap();
            let dv = result.distance(v).unwrap();
            assert!(dv <= du + w, "d({v}) > d({u}) + w({u},{v})");
        }
    }
}

#[test]
fn test_path_weights_sum_to_distance() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    for v in g.vertices() {
        let path = result.path_to(v).unwrap();
        let total: Weight = path
            .windows(2)
            .map(|pair| g.weight(pair[0], pair[1]).unwrap())
            .sum();
        assert_eq!(total, result.distance(v).unwrap());
    }
}

#[test]
fn test_predecessor_walk_reaches_source() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    for v in g.vertices() {
        let path = result.path_to(v).unwrap();
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&v));

        // One predecessor step per edge on the reconstructed path
        let mut steps = 0;
        let mut current = v;
        while let Some(prev) = result.predecessors[&current] {
            steps += 1;
            current = prev;
        }
        assert_eq!(current, 1);
        assert_eq!(steps, path.len() - 1);
    }
}

#[test]
fn test_disconnected_vertices_unreachable() {
    let g = disconnected_graph();
    let result = shortest_paths(&g, 0).unwrap();

    assert_eq!(result.distance(5), Some(3)); // 0-2-4-5
    assert_eq!(result.distance(6), None);
    assert_eq!(result.distance(7), None);
    assert!(!result.is_reachable(6));
    assert_eq!(result.predecessors[&6], None);
    assert_eq!(result.path_to(7), None);

    // Unreachable vertices still appear in both tables
    assert!(result.distances.contains_key(&6));
    assert!(result.predecessors.contains_key(&7));
}

#[test]
fn test_idempotent_for_fixed_input() {
    let g = sample_graph();
    let first = shortest_paths(&g, 1).unwrap();
    let second = shortest_paths(&g, 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tie_break_keeps_first_discovered_predecessor() {
    // Two equal-weight routes 1-2-4 and 1-3-4; vertex 2 is finalized first,
    // so the later tie must not steal the predecessor.
    let mut g = Graph::new();
    for (u, v) in [(1, 2), (1, 3), (2, 4), (3, 4)] {
        g.add_edge(u, v, 1).unwrap();
    }

    let result = shortest_paths(&g, 1).unwrap();
    assert_eq!(result.distance(4), Some(2));
    assert_eq!(result.predecessors[&4], Some(2));
    assert_eq!(result.path_to(4), Some(vec![1, 2, 4]));
}

#[test]
fn test_self_loop_never_chosen() {
    let mut g = Graph::new();
    g.add_edge(1, 1, 0).unwrap();
    g.add_edge(1, 2, 3).unwrap();

    let result = shortest_paths(&g, 1).unwrap();
    assert_eq!(result.distance(1), Some(0));
    assert_eq!(result.distance(2), Some(3));
    assert_eq!(result.path_to(2), Some(vec![1, 2]));
}

#[test]
fn test_unknown_target_reports_no_path() {
    let g = sample_graph();
    let result = shortest_paths(&g, 1).unwrap();

    assert_eq!(result.distance(42), None);
    assert_eq!(result.path_to(42), None);
}

#[test]
fn test_broken_predecessor_chain_reports_no_path() {
    let g = sample_graph();
    let mut result = shortest_paths(&g, 1).unwrap();

    // Sever the chain below vertex 4: the walk from 5 now stops at 4
    // instead of the source.
    result.predecessors.insert(4, None);
    assert_eq!(result.path_to(5), None);
}

#[test]
fn test_cyclic_predecessor_chain_terminates() {
    let g = sample_graph();
    let mut result = shortest_paths(&g, 1).unwrap();

    result.predecessors.insert(4, Some(5));
    result.predecessors.insert(5, Some(4));
    assert_eq!(result.path_to(5), None);
}

#[test]
fn test_huge_weights_do_not_overflow() {
    // Chain of maximum-weight edges: two fit in u64, the third would wrap.
    let g = Graph::from_edges([
        (1, 2, i64::MAX),
        (2, 3, i64::MAX),
        (3, 4, i64::MAX),
    ])
    .unwrap();

    let result = shortest_paths(&g, 1).unwrap();
    assert_eq!(result.distance(2), Some(i64::MAX as u64));
    assert_eq!(result.distance(3), Some(i64::MAX as u64 * 2));
    // A total beyond u64 is not representable; the vertex stays unreached
    assert_eq!(result.distance(4), None);
    assert_eq!(result.path_to(4), None);
}

#[test]
fn test_zero_weight_edges() {
    let mut g = Graph::new();
    g.add_edge(1, 2, 0).unwrap();
    g.add_edge(2, 3, 5).unwrap();

    let result = shortest_paths(&g, 1).unwrap();
    assert_eq!(result.distance(2), Some(0));
    assert_eq!(result.distance(3), Some(5));
}
