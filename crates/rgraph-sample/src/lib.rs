#![deny(missing_docs)]

//! One-call samplers for random graphs with a prescribed degree sequence.
//!
//! Each sampler builds a deterministic greedy initial state, runs exactly
//! `n_iter` switch steps with no callback, and returns the final edge
//! structure. The number of iterations needed for convergence is the
//! caller's responsibility; it grows with the size of the graph.

use std::collections::BTreeSet;

use rgraph_core::{ChainRng, RgError};
use rgraph_graphs::{greedy_bipartite, greedy_directed, greedy_multi_hypergraph, greedy_simple};
use rgraph_mcmc::run_switches;

/// Samples a bipartite graph with the given degree sequences approximately
/// uniformly at random. Returns the sampled `(x, y)` edge pairs.
pub fn sample_bipartite_graph(
    dx: &[usize],
    dy: &[usize],
    n_iter: usize,
    seed: u64,
) -> Result<Vec<(u32, u32)>, RgError> {
    let mut graph = greedy_bipartite(dx, dy)?;
    let mut rng = ChainRng::from_seed(seed);
    run_switches(&mut graph, &mut rng, n_iter);
    Ok(graph.edges().into_iter().collect())
}

/// Samples a loop-free simple directed graph with the given `(out, in)`
/// degree pairs. Returns the sampled `(from, to)` edge pairs.
pub fn sample_directed_graph(
    degrees: &[(usize, usize)],
    n_iter: usize,
    seed: u64,
) -> Result<Vec<(u32, u32)>, RgError> {
    let mut graph = greedy_directed(degrees)?;
    let mut rng = ChainRng::from_seed(seed);
    run_switches(&mut graph, &mut rng, n_iter);
    Ok(graph.edges().into_iter().collect())
}

/// Samples a simple undirected graph with the given degree sequence.
/// Returns the sampled edges as canonical `(lo, hi)` pairs.
pub fn sample_simple_graph(
    degrees: &[usize],
    n_iter: usize,
    seed: u64,
) -> Result<Vec<(u32, u32)>, RgError> {
    let mut graph = greedy_simple(degrees)?;
    let mut rng = ChainRng::from_seed(seed);
    run_switches(&mut graph, &mut rng, n_iter);
    Ok(graph.edges().into_iter().collect())
}

/// Samples a multi-hypergraph with the given vertex degrees and hyperedge
/// sizes. Returns one vertex set per hyperedge, in hyperedge order.
pub fn sample_multi_hypergraph(
    degrees: &[usize],
    edge_sizes: &[usize],
    n_iter: usize,
    seed: u64,
) -> Result<Vec<BTreeSet<u32>>, RgError> {
    let mut graph = greedy_multi_hypergraph(degrees, edge_sizes)?;
    let mut rng = ChainRng::from_seed(seed);
    run_switches(&mut graph, &mut rng, n_iter);
    Ok(graph.hyperedges())
}
