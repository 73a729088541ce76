use sha2::{Digest, Sha256};

use crate::bipartite::SwitchBipartiteGraph;

/// Computes the canonical structural hash of a bipartite graph state.
///
/// The hash covers the partition sizes and the sorted edge list, so it is
/// independent of input order and mutation history: two states compare
/// equal exactly when their hashes match.
pub fn canonical_hash(graph: &SwitchBipartiteGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.nx() as u64).to_le_bytes());
    hasher.update((graph.ny() as u64).to_le_bytes());
    let edges = graph.edges();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (x, y) in edges {
        hasher.update(x.to_le_bytes());
        hasher.update(y.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
