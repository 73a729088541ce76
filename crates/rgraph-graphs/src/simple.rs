use std::collections::BTreeSet;

use rand::Rng;
use rgraph_core::errors::{ErrorInfo, RgError};
use rgraph_core::{ChainRng, SampleSet, SwitchState};

/// Undirected simple graph state for switch-chain sampling.
///
/// Each unordered edge is stored once in the edge mirror, canonicalised as
/// `(lo, hi)`; the adjacency sets hold both directions. Loop-free and
/// duplicate-free by construction, with the degree sequence fixed for the
/// lifetime of the graph.
#[derive(Debug, Clone)]
pub struct SwitchSimpleGraph {
    n: usize,
    neighbours: Vec<BTreeSet<u32>>,
    edge_set: SampleSet<(u32, u32)>,
    degrees: Vec<usize>,
}

impl SwitchSimpleGraph {
    /// Builds a simple graph from a vertex count and unordered edges.
    ///
    /// Pairs may be given in either orientation; they are canonicalised
    /// before the duplicate check. Fails with `vertex-out-of-bounds`,
    /// `self-loop`, or `duplicate-edge`.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, RgError> {
        let mut neighbours = vec![BTreeSet::new(); n];
        let mut edge_set = SampleSet::new();
        for (a, b) in edges {
            if (a as usize) >= n || (b as usize) >= n {
                return Err(construction_error(
                    "vertex-out-of-bounds",
                    "edge endpoint outside the vertex set",
                )
                .with_context("edge", format!("({a}, {b})"))
                .with_context("n", n));
            }
            if a == b {
                return Err(construction_error("self-loop", "loops are not permitted")
                    .with_context("vertex", a));
            }
            let (lo, hi) = (a.min(b), a.max(b));
            if !neighbours[lo as usize].insert(hi) {
                return Err(construction_error(
                    "duplicate-edge",
                    "edge appears twice in the input",
                )
                .with_context("edge", format!("({lo}, {hi})")));
            }
            neighbours[hi as usize].insert(lo);
            edge_set
                .insert((lo, hi))
                .map_err(|_| construction_error("duplicate-edge", "edge appears twice in the input"))?;
        }
        let degrees = neighbours.iter().map(BTreeSet::len).collect();
        Ok(Self {
            n,
            neighbours,
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

    /// Snapshot of the current edges as canonical sorted `(lo, hi)` pairs.
    pub fn edges(&self) -> BTreeSet<(u32, u32)> {
        self.edge_set.iter().copied().collect()
    }

    /// The fixed degree sequence.
    pub fn degree_sequence(&self) -> &[usize] {
        &self.degrees
    }

    fn adjacent(&self, a: u32, b: u32) -> bool {
        self.neighbours
            .get(a as usize)
            .is_some_and(|set| set.contains(&b))
    }

    fn swap_neighbour(&mut self, vertex: u32, old: u32, new: u32) {
        self.neighbours[vertex as usize].remove(&old);
        self.neighbours[vertex as usize].insert(new);
    }
}

impl PartialEq for SwitchSimpleGraph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.degrees == other.degrees && self.edges() == other.edges()
    }
}

impl Eq for SwitchSimpleGraph {}

impl SwitchState for SwitchSimpleGraph {
    /// Draws two distinct edges and one orientation bit, then swaps one
    /// endpoint of each. The orientation bit makes the two possible
    /// pairings equally likely, keeping the proposal symmetric. Rejected
    /// when the edges share a vertex or a swapped edge already exists.
    fn switch(&mut self, rng: &mut ChainRng) -> bool {
        let Ok(((a, b), (c, d))) = self.edge_set.pick_distinct_pair(rng) else {
            return false;
        };
        let (x1, y1) = (a, b);
        let (x2, y2) = if rng.gen::<bool>() { (c, d) } else { (d, c) };
        if x1 == x2 || x1 == y2 || y1 == x2 || y1 == y2 {
            return false;
        }
        if self.adjacent(x1, y2) || self.adjacent(x2, y1) {
            return false;
        }

        self.swap_neighbour(x1, y1, y2);
        self.swap_neighbour(y1, x1, x2);
        self.swap_neighbour(x2, y2, y1);
        self.swap_neighbour(y2, x2, x1);

        let replaced = self
            .edge_set
            .replace(&(a, b), canonical(x1, y2))
            .and_then(|()| self.edge_set.replace(&(c, d), canonical(x2, y1)));
        debug_assert!(replaced.is_ok(), "edge mirror diverged from adjacency");
        true
    }
}

fn canonical(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

fn construction_error(code: &str, message: &str) -> RgError {
    RgError::Construction(ErrorInfo::new(code, message))
}
