use std::collections::BTreeSet;

use rgraph_core::errors::{ErrorInfo, RgError};
use rgraph_core::{ChainRng, SampleSet, SwitchState};

/// Directed graph state for switch-chain sampling.
///
/// Edges are ordered `(from, to)` pairs over one vertex set; the graph is
/// kept loop-free and simple. Each vertex has a fixed `(out, in)` degree
/// pair, cached at construction.
#[derive(Debug, Clone)]
pub struct SwitchDirectedGraph {
    n: usize,
    successors: Vec<BTreeSet<u32>>,
    predecessors: Vec<BTreeSet<u32>>,
    edge_set: SampleSet<(u32, u32)>,
    degrees: Vec<(usize, usize)>,
}

impl SwitchDirectedGraph {
    /// Builds a directed graph from a vertex count and an edge list.
    ///
    /// Fails with `vertex-out-of-bounds`, `self-loop`, or `duplicate-edge`.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, RgError> {
        let mut successors = vec![BTreeSet::new(); n];
        let mut predecessors = vec![BTreeSet::new(); n];
        let mut edge_set = SampleSet::new();
        for (from, to) in edges {
            if (from as usize) >= n || (to as usize) >= n {
                return Err(construction_error(
                    "vertex-out-of-bounds",
                    "edge endpoint outside the vertex set",
                )
                .with_context("edge", format!("({from}, {to})"))
                .with_context("n", n));
            }
            if from == to {
                return Err(construction_error("self-loop", "loops are not permitted")
                    .with_context("vertex", from));
            }
            if !successors[from as usize].insert(to) {
                return Err(construction_error(
                    "duplicate-edge",
                    "edge appears twice in the input",
                )
                .with_context("edge", format!("({from}, {to})")));
            }
            predecessors[to as usize].insert(from);
            edge_set
                .insert((from, to))
                .map_err(|_| construction_error("duplicate-edge", "edge appears twice in the input"))?;
        }
        let degrees = (0..n)
            .map(|v| (successors[v].len(), predecessors[v].len()))
            .collect();
        Ok(Self {
            n,
            successors,
            predecessors,
            edge_set,
            degrees,
        })
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of edges; invariant across switches.
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Snapshot of the current edge set as sorted `(from, to)` pairs.
    pub fn edges(&self) -> BTreeSet<(u32, u32)> {
        self.edge_set.iter().copied().collect()
    }

    /// The fixed `(out, in)` degree pairs.
    pub fn degree_sequence(&self) -> &[(usize, usize)] {
        &self.degrees
    }

    fn has_edge(&self, from: u32, to: u32) -> bool {
        self.successors
            .get(from as usize)
            .is_some_and(|succ| succ.contains(&to))
    }
}

impl PartialEq for SwitchDirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.degrees == other.degrees && self.edges() == other.edges()
    }
}

impl Eq for SwitchDirectedGraph {}

impl SwitchState for SwitchDirectedGraph {
    /// Swaps the heads of two distinct edges `(x1, y1)`, `(x2, y2)` into
    /// `(x1, y2)` and `(x2, y1)`. Rejected when tails or heads coincide,
    /// when a swapped edge would be a loop, or when it already exists.
    fn switch(&mut self, rng: &mut ChainRng) -> bool {
        let Ok(((x1, y1), (x2, y2))) = self.edge_set.pick_distinct_pair(rng) else {
            return false;
        };
        if x1 == x2 || y1 == y2 {
            return false;
        }
        if x1 == y2 || x2 == y1 {
            return false;
        }
        if self.has_edge(x1, y2) || self.has_edge(x2, y1) {
            return false;
        }

        self.successors[x1 as usize].remove(&y1);
        self.successors[x1 as usize].insert(y2);
        self.successors[x2 as usize].remove(&y2);
        self.successors[x2 as usize].insert(y1);
        self.predecessors[y1 as usize].remove(&x1);
        self.predecessors[y1 as usize].insert(x2);
        self.predecessors[y2 as usize].remove(&x2);
        self.predecessors[y2 as usize].insert(x1);

        let replaced = self
            .edge_set
            .replace(&(x1, y1), (x1, y2))
            .and_then(|()| self.edge_set.replace(&(x2, y2), (x2, y1)));
        debug_assert!(replaced.is_ok(), "edge mirror diverged from adjacency");
        true
    }
}

fn construction_error(code: &str, message: &str) -> RgError {
    RgError::Construction(ErrorInfo::new(code, message))
}
