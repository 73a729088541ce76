use rgraph_graphs::{greedy_bipartite, greedy_directed, greedy_multi_hypergraph, greedy_simple};

#[test]
fn bipartite_builder_matches_degrees_exactly() {
    let cases: Vec<(Vec<usize>, Vec<usize>)> = vec![
        (vec![1, 1], vec![1, 1]),
        (vec![2, 2, 2], vec![3, 3]),
        (vec![3, 2, 1], vec![2, 2, 2]),
        (vec![0, 0], vec![0]),
        (vec![4, 1, 1], vec![2, 2, 1, 1]),
    ];
    for (dx, dy) in cases {
        let graph = greedy_bipartite(&dx, &dy).unwrap();
        let (got_dx, got_dy) = graph.degree_sequence();
        assert_eq!(got_dx, &dx[..], "dx mismatch for {dx:?} / {dy:?}");
        assert_eq!(got_dy, &dy[..], "dy mismatch for {dx:?} / {dy:?}");
        assert_eq!(graph.edges().len(), dx.iter().sum::<usize>());
    }
}

#[test]
fn bipartite_builder_rejects_sum_mismatch() {
    let err = greedy_bipartite(&[2, 1], &[1, 1]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn bipartite_builder_rejects_unsatisfiable_placement() {
    // the single X vertex would need two distinct neighbours in a
    // one-vertex Y partition
    let err = greedy_bipartite(&[2], &[2]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn simple_builder_matches_degrees_exactly() {
    for degrees in [vec![2, 2, 2], vec![3, 3, 3, 3], vec![1, 1], vec![2, 1, 1]] {
        let graph = greedy_simple(&degrees).unwrap();
        assert_eq!(graph.degree_sequence(), &degrees[..]);
        assert_eq!(graph.edge_count(), degrees.iter().sum::<usize>() / 2);
    }
}

#[test]
fn empty_degree_sequences_build_empty_graphs() {
    let bipartite = greedy_bipartite(&[], &[]).unwrap();
    assert_eq!(bipartite.edge_count(), 0);

    let simple = greedy_simple(&[]).unwrap();
    assert_eq!(simple.n(), 0);
    assert_eq!(simple.edge_count(), 0);

    let directed = greedy_directed(&[]).unwrap();
    assert_eq!(directed.edge_count(), 0);

    let hypergraph = greedy_multi_hypergraph(&[], &[]).unwrap();
    assert_eq!(hypergraph.n(), 0);
    assert!(hypergraph.hyperedges().is_empty());
}

#[test]
fn all_zero_degree_sequences_build_edgeless_graphs() {
    let simple = greedy_simple(&[0, 0, 0]).unwrap();
    assert_eq!(simple.degree_sequence(), &[0, 0, 0]);
    assert_eq!(simple.edge_count(), 0);

    let directed = greedy_directed(&[(0, 0), (0, 0)]).unwrap();
    assert_eq!(directed.edge_count(), 0);
}

#[test]
fn simple_builder_rejects_odd_sum() {
    let err = greedy_simple(&[2, 1]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn simple_builder_rejects_unsatisfiable_placement() {
    // even sum, but vertex 0 needs three distinct neighbours out of one
    let err = greedy_simple(&[3, 1]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn directed_builder_matches_degrees_exactly() {
    let cases: Vec<Vec<(usize, usize)>> = vec![
        vec![(1, 1), (1, 1), (1, 1)],
        vec![(2, 0), (0, 1), (0, 1)],
        vec![(2, 1), (1, 2), (1, 1)],
    ];
    for degrees in cases {
        let graph = greedy_directed(&degrees).unwrap();
        assert_eq!(graph.degree_sequence(), &degrees[..], "for {degrees:?}");
        for &(from, to) in &graph.edges() {
            assert_ne!(from, to, "builder placed a loop");
        }
    }
}

#[test]
fn directed_builder_rejects_sum_mismatch() {
    let err = greedy_directed(&[(2, 0), (0, 1)]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn directed_builder_rejects_unsatisfiable_placement() {
    // both in-edges of vertex 1 would have to come from vertex 0
    let err = greedy_directed(&[(2, 0), (0, 2)]).unwrap_err();
    assert_eq!(err.code(), "infeasible-degree-sequence");
}

#[test]
fn hypergraph_builder_matches_degrees_and_sizes() {
    let degrees = vec![2, 2, 1, 1];
    let edge_sizes = vec![3, 2, 1];
    let graph = greedy_multi_hypergraph(&degrees, &edge_sizes).unwrap();
    assert_eq!(graph.degree_sequence(), &degrees[..]);
    assert_eq!(graph.edge_sizes(), &edge_sizes[..]);

    let hyperedges = graph.hyperedges();
    assert_eq!(hyperedges.len(), 3);
    for (edge, &size) in hyperedges.iter().zip(edge_sizes.iter()) {
        assert_eq!(edge.len(), size);
    }
}
