use std::collections::BTreeSet;

use rgraph_core::{ChainRng, RgError, SwitchState};

use crate::bipartite::{Partition, SwitchBipartiteGraph};

/// Multi-hypergraph state for switch-chain sampling.
///
/// The canonical representation is the bipartite incidence graph: X
/// vertices are the hypergraph vertices, every Y vertex is one hyperedge,
/// and an incidence `(x, y)` means `x in y`. The bipartite switch then
/// preserves both the vertex degree sequence and the hyperedge sizes. Each
/// hyperedge is a set of vertices, but identical hyperedges may repeat
/// (hence "multi").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchMultiHypergraph {
    incidence: SwitchBipartiteGraph,
}

impl SwitchMultiHypergraph {
    /// Builds a multi-hypergraph from a vertex count and hyperedge list.
    ///
    /// Fails with `vertex-out-of-bounds` if a hyperedge mentions a vertex
    /// outside `[0, n)`.
    pub fn from_hyperedges(n: usize, hyperedges: &[BTreeSet<u32>]) -> Result<Self, RgError> {
        let incidences = hyperedges
            .iter()
            .enumerate()
            .flat_map(|(e, members)| members.iter().map(move |&x| (x, e as u32)))
            .collect::<Vec<_>>();
        let incidence = SwitchBipartiteGraph::from_edges(n, hyperedges.len(), incidences)?;
        Ok(Self { incidence })
    }

    /// Wraps an existing incidence graph.
    pub(crate) fn from_incidence(incidence: SwitchBipartiteGraph) -> Self {
        Self { incidence }
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.incidence.nx()
    }

    /// Number of hyperedges.
    pub fn m(&self) -> usize {
        self.incidence.ny()
    }

    /// The fixed per-vertex degree sequence.
    pub fn degree_sequence(&self) -> &[usize] {
        self.incidence.degree_sequence().0
    }

    /// The fixed hyperedge sizes.
    pub fn edge_sizes(&self) -> &[usize] {
        self.incidence.degree_sequence().1
    }

    /// Snapshot of the current hyperedges, in hyperedge-index order.
    pub fn hyperedges(&self) -> Vec<BTreeSet<u32>> {
        (0..self.m())
            .map(|e| {
                self.incidence
                    .neighbourhood(Partition::Y, e)
                    .map(|members| members.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Tests simplicity: no two hyperedges are identical.
    pub fn is_simple(&self) -> bool {
        self.incidence.is_vertex_simple()
    }

    /// Read-only view of the underlying bipartite incidence graph.
    pub fn incidence_graph(&self) -> &SwitchBipartiteGraph {
        &self.incidence
    }
}

impl SwitchState for SwitchMultiHypergraph {
    /// Delegates to the bipartite incidence switch: move one vertex from
    /// each of two hyperedges into the other, rejecting moves that would
    /// duplicate a membership.
    fn switch(&mut self, rng: &mut ChainRng) -> bool {
        self.incidence.switch(rng)
    }
}
