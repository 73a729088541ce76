use rgraph_core::{ChainRng, SwitchState};
use rgraph_graphs::{canonical_hash, graph_from_json, graph_to_json, SwitchBipartiteGraph};

#[test]
fn json_roundtrip_restores_an_equal_graph() {
    let mut graph =
        SwitchBipartiteGraph::from_edges(4, 4, [(0, 0), (0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    let mut rng = ChainRng::from_seed(11);
    for _ in 0..50 {
        graph.switch(&mut rng);
    }

    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();
    assert_eq!(restored, graph);
    assert_eq!(canonical_hash(&restored), canonical_hash(&graph));
}

#[test]
fn corrupted_payloads_fail_cleanly() {
    let err = graph_from_json("{not json").unwrap_err();
    assert_eq!(err.code(), "deserialize-json");

    // well-formed JSON, but the edge list is inconsistent with nx
    let err =
        graph_from_json(r#"{"nx": 1, "ny": 2, "edges": [[0, 0], [3, 1]]}"#).unwrap_err();
    assert_eq!(err.code(), "vertex-out-of-bounds");

    let err =
        graph_from_json(r#"{"nx": 2, "ny": 2, "edges": [[0, 0], [0, 0]]}"#).unwrap_err();
    assert_eq!(err.code(), "duplicate-edge");
}

#[test]
fn hash_is_independent_of_input_order() {
    let forward = SwitchBipartiteGraph::from_edges(3, 3, [(0, 0), (1, 1), (2, 2)]).unwrap();
    let backward = SwitchBipartiteGraph::from_edges(3, 3, [(2, 2), (0, 0), (1, 1)]).unwrap();
    assert_eq!(canonical_hash(&forward), canonical_hash(&backward));
}

#[test]
fn hash_distinguishes_structure_and_shape() {
    let base = SwitchBipartiteGraph::from_edges(3, 3, [(0, 0), (1, 1)]).unwrap();

    let other_edges = SwitchBipartiteGraph::from_edges(3, 3, [(0, 0), (1, 2)]).unwrap();
    assert_ne!(canonical_hash(&base), canonical_hash(&other_edges));

    // same edges, one extra isolated vertex
    let other_shape = SwitchBipartiteGraph::from_edges(3, 4, [(0, 0), (1, 1)]).unwrap();
    assert_ne!(canonical_hash(&base), canonical_hash(&other_shape));
}
