use std::collections::BTreeSet;

use rgraph_core::errors::{ErrorInfo, RgError};
use rgraph_core::{ChainRng, SampleSet, SwitchState};

/// Selects one side of the bipartition in queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Partition {
    /// The X side, vertices `0..nx`.
    X,
    /// The Y side, vertices `0..ny`.
    Y,
}

/// Bipartite graph state optimised for switch-chain mutation.
///
/// Vertices are integers scoped to their partition. Neighbourhoods are kept
/// as sets on both sides, so simplicity (no duplicate edge) is structural,
/// and the full edge set is mirrored in a [`SampleSet`] for O(1) uniform
/// edge draws. The degree sequence is computed once at construction and is
/// invariant for the lifetime of the graph: a switch either changes nothing
/// or trades two edges for two new edges on the same four vertices.
#[derive(Debug, Clone)]
pub struct SwitchBipartiteGraph {
    nx: usize,
    ny: usize,
    neighbours_x: Vec<BTreeSet<u32>>,
    neighbours_y: Vec<BTreeSet<u32>>,
    edge_set: SampleSet<(u32, u32)>,
    degrees_x: Vec<usize>,
    degrees_y: Vec<usize>,
}

impl SwitchBipartiteGraph {
    /// Builds a graph from partition sizes and an edge list.
    ///
    /// Fails with `vertex-out-of-bounds` if any edge leaves
    /// `[0, nx) x [0, ny)` and with `duplicate-edge` if the same pair
    /// appears twice. Nothing is observable on failure.
    pub fn from_edges(
        nx: usize,
        ny: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, RgError> {
        let mut neighbours_x = vec![BTreeSet::new(); nx];
        let mut neighbours_y = vec![BTreeSet::new(); ny];
        let mut edge_set = SampleSet::new();
        for (x, y) in edges {
            if (x as usize) >= nx || (y as usize) >= ny {
                return Err(construction_error(
                    "vertex-out-of-bounds",
                    "edge endpoint outside the declared partitions",
                )
                .with_context("edge", format!("({x}, {y})"))
                .with_context("nx", nx)
                .with_context("ny", ny));
            }
            if !neighbours_x[x as usize].insert(y) {
                return Err(construction_error(
                    "duplicate-edge",
                    "edge appears twice in the input",
                )
                .with_context("edge", format!("({x}, {y})")));
            }
            neighbours_y[y as usize].insert(x);
            edge_set
                .insert((x, y))
                .map_err(|_| construction_error("duplicate-edge", "edge appears twice in the input"))?;
        }
        let degrees_x = neighbours_x.iter().map(BTreeSet::len).collect();
        let degrees_y = neighbours_y.iter().map(BTreeSet::len).collect();
        Ok(Self {
            nx,
            ny,
            neighbours_x,
            neighbours_y,
            edge_set,
            degrees_x,
            degrees_y,
        })
    }

    /// Number of vertices in the X partition.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of vertices in the Y partition.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Number of edges in the graph; invariant across switches.
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Snapshot of the current edge set as sorted `(x, y)` pairs.
    pub fn edges(&self) -> BTreeSet<(u32, u32)> {
        self.edge_set.iter().copied().collect()
    }

    /// The fixed degree sequences for both partitions.
    pub fn degree_sequence(&self) -> (&[usize], &[usize]) {
        (&self.degrees_x, &self.degrees_y)
    }

    /// Current neighbour set of a vertex, across the partition boundary.
    pub fn neighbourhood(&self, partition: Partition, vertex: usize) -> Result<&BTreeSet<u32>, RgError> {
        let (neighbours, size) = match partition {
            Partition::X => (&self.neighbours_x, self.nx),
            Partition::Y => (&self.neighbours_y, self.ny),
        };
        neighbours.get(vertex).ok_or_else(|| {
            construction_error("vertex-out-of-bounds", "vertex outside its partition")
                .with_context("vertex", vertex)
                .with_context("partition_size", size)
        })
    }

    /// Tests H-simplicity: interpreting every Y vertex as a hyperedge over
    /// X, no two hyperedges may have identical X-neighbourhoods.
    pub fn is_vertex_simple(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.neighbours_y
            .iter()
            .all(|neighbourhood| seen.insert(neighbourhood.iter().copied().collect::<Vec<u32>>()))
    }

    pub(crate) fn contains_edge(&self, x: u32, y: u32) -> bool {
        self.neighbours_x
            .get(x as usize)
            .is_some_and(|neighbours| neighbours.contains(&y))
    }
}

impl PartialEq for SwitchBipartiteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nx == other.nx
            && self.ny == other.ny
            && self.degrees_x == other.degrees_x
            && self.degrees_y == other.degrees_y
            && self.edges() == other.edges()
    }
}

impl Eq for SwitchBipartiteGraph {}

impl SwitchState for SwitchBipartiteGraph {
    /// Attempts one switch: draw two distinct edges `(x1, y1)`, `(x2, y2)`
    /// uniformly without replacement, reject when `x1 == x2` or `y1 == y2`
    /// or when either swapped edge already exists, otherwise install
    /// `(x1, y2)` and `(x2, y1)`. Rejection is a self-loop step of the
    /// chain, never an error.
    fn switch(&mut self, rng: &mut ChainRng) -> bool {
        let Ok(((x1, y1), (x2, y2))) = self.edge_set.pick_distinct_pair(rng) else {
            return false;
        };
        if x1 == x2 || y1 == y2 {
            return false;
        }
        if self.contains_edge(x1, y2) || self.contains_edge(x2, y1) {
            return false;
        }

        self.neighbours_x[x1 as usize].remove(&y1);
        self.neighbours_x[x1 as usize].insert(y2);
        self.neighbours_x[x2 as usize].remove(&y2);
        self.neighbours_x[x2 as usize].insert(y1);
        self.neighbours_y[y1 as usize].remove(&x1);
        self.neighbours_y[y1 as usize].insert(x2);
        self.neighbours_y[y2 as usize].remove(&x2);
        self.neighbours_y[y2 as usize].insert(x1);

        let replaced = self
            .edge_set
            .replace(&(x1, y1), (x1, y2))
            .and_then(|()| self.edge_set.replace(&(x2, y2), (x2, y1)));
        debug_assert!(replaced.is_ok(), "edge mirror diverged from neighbourhoods");
        true
    }
}

fn construction_error(code: &str, message: &str) -> RgError {
    RgError::Construction(ErrorInfo::new(code, message))
}
