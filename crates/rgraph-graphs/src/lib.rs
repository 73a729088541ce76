#![deny(missing_docs)]

//! Graph states for switch-chain sampling with a prescribed degree sequence.
//!
//! The bipartite state is the core engine; the directed, simple, and
//! multi-hypergraph states follow the same degree-preservation and
//! simplicity-preservation contracts with their own switch rules.

mod bipartite;
mod builders;
mod directed;
mod hash;
mod hypergraph;
mod serialization;
mod simple;

pub use bipartite::{Partition, SwitchBipartiteGraph};
pub use builders::{greedy_bipartite, greedy_directed, greedy_multi_hypergraph, greedy_simple};
pub use directed::SwitchDirectedGraph;
pub use hash::canonical_hash;
pub use hypergraph::SwitchMultiHypergraph;
pub use serialization::{graph_from_json, graph_to_json};
pub use simple::SwitchSimpleGraph;
