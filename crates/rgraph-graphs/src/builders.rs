//! Greedy degree-sequence builders used to seed switch chains.
//!
//! Each builder places edges deterministically, largest remaining degree
//! first with ties broken by lowest vertex index, and reports
//! `infeasible-degree-sequence` when a placement cannot be satisfied. No
//! graphicality pre-validation is performed; infeasibility is detected as a
//! side effect of failing to place edges.

use std::collections::BTreeSet;

use rgraph_core::errors::{ErrorInfo, RgError};

use crate::bipartite::SwitchBipartiteGraph;
use crate::directed::SwitchDirectedGraph;
use crate::hypergraph::SwitchMultiHypergraph;
use crate::simple::SwitchSimpleGraph;

/// Builds a simple bipartite graph matching `dx` and `dy` exactly.
///
/// Gale-Ryser style greedy placement: the X vertex with the largest
/// remaining degree is connected to the largest-remaining non-adjacent Y
/// vertices, until every X degree is satisfied.
pub fn greedy_bipartite(dx: &[usize], dy: &[usize]) -> Result<SwitchBipartiteGraph, RgError> {
    if dx.iter().sum::<usize>() != dy.iter().sum::<usize>() {
        return Err(infeasible("degree sums of the two partitions differ")
            .with_context("sum_dx", dx.iter().sum::<usize>())
            .with_context("sum_dy", dy.iter().sum::<usize>()));
    }

    let mut remaining_x = dx.to_vec();
    let mut remaining_y = dy.to_vec();
    let mut placed: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); dx.len()];
    let mut edges = Vec::new();

    while let Some(x) = argmax(&remaining_x) {
        let need = remaining_x[x];
        let mut candidates: Vec<usize> = (0..dy.len())
            .filter(|&y| remaining_y[y] > 0 && !placed[x].contains(&(y as u32)))
            .collect();
        candidates.sort_by(|&a, &b| remaining_y[b].cmp(&remaining_y[a]).then(a.cmp(&b)));
        if candidates.len() < need {
            return Err(infeasible("no placement satisfies the remaining degrees")
                .with_context("vertex_x", x)
                .with_context("required", need)
                .with_context("available", candidates.len()));
        }
        for &y in candidates.iter().take(need) {
            placed[x].insert(y as u32);
            remaining_y[y] -= 1;
            edges.push((x as u32, y as u32));
        }
        remaining_x[x] = 0;
    }

    SwitchBipartiteGraph::from_edges(dx.len(), dy.len(), edges)
}

/// Builds a simple undirected graph matching the degree sequence exactly,
/// via Havel-Hakimi greedy placement.
pub fn greedy_simple(degrees: &[usize]) -> Result<SwitchSimpleGraph, RgError> {
    if degrees.iter().sum::<usize>() % 2 != 0 {
        return Err(infeasible("degree sum must be even")
            .with_context("sum", degrees.iter().sum::<usize>()));
    }

    let mut stubs: Vec<(usize, usize)> = degrees.iter().enumerate().map(|(v, &d)| (d, v)).collect();
    let mut edges = Vec::new();
    loop {
        stubs.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        let Some(&(need, vertex)) = stubs.first() else {
            break;
        };
        if need == 0 {
            break;
        }
        if need >= stubs.len() || stubs[need].0 == 0 {
            return Err(infeasible("no placement satisfies the remaining degrees")
                .with_context("vertex", vertex)
                .with_context("required", need));
        }
        for slot in 1..=need {
            edges.push((vertex as u32, stubs[slot].1 as u32));
            stubs[slot].0 -= 1;
        }
        stubs[0].0 = 0;
    }

    SwitchSimpleGraph::from_edges(degrees.len(), edges)
}

/// Builds a loop-free simple directed graph matching the `(out, in)` degree
/// pairs exactly, via Kleitman-Wang greedy placement.
pub fn greedy_directed(degrees: &[(usize, usize)]) -> Result<SwitchDirectedGraph, RgError> {
    let sum_out: usize = degrees.iter().map(|d| d.0).sum();
    let sum_in: usize = degrees.iter().map(|d| d.1).sum();
    if sum_out != sum_in {
        return Err(infeasible("out-degree and in-degree sums differ")
            .with_context("sum_out", sum_out)
            .with_context("sum_in", sum_in));
    }

    let mut stubs: Vec<(usize, usize, usize)> = degrees
        .iter()
        .enumerate()
        .map(|(v, &(out, inn))| (out, inn, v))
        .collect();
    let mut edges = Vec::new();
    loop {
        stubs.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));
        let Some(pick) = stubs.iter().position(|stub| stub.1 > 0) else {
            break;
        };
        let (_, need, target) = stubs[pick];
        stubs[pick].1 = 0;

        let mut cursor = 0;
        for _ in 0..need {
            while cursor < stubs.len() && (stubs[cursor].2 == target || stubs[cursor].0 == 0) {
                cursor += 1;
            }
            if cursor >= stubs.len() {
                return Err(infeasible("no placement satisfies the remaining degrees")
                    .with_context("vertex", target)
                    .with_context("required", need));
            }
            edges.push((stubs[cursor].2 as u32, target as u32));
            stubs[cursor].0 -= 1;
            cursor += 1;
        }
    }

    SwitchDirectedGraph::from_edges(degrees.len(), edges)
}

/// Builds a multi-hypergraph with the given vertex degrees and hyperedge
/// sizes, through the bipartite incidence construction.
pub fn greedy_multi_hypergraph(
    degrees: &[usize],
    edge_sizes: &[usize],
) -> Result<SwitchMultiHypergraph, RgError> {
    let incidence = greedy_bipartite(degrees, edge_sizes)?;
    Ok(SwitchMultiHypergraph::from_incidence(incidence))
}

/// Index of the largest positive entry, ties broken by lowest index.
fn argmax(remaining: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &value) in remaining.iter().enumerate() {
        if value == 0 {
            continue;
        }
        match best {
            Some(current) if remaining[current] >= value => {}
            _ => best = Some(index),
        }
    }
    best
}

fn infeasible(message: &str) -> RgError {
    RgError::Construction(ErrorInfo::new("infeasible-degree-sequence", message))
}
