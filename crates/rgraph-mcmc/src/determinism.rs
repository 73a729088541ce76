use rgraph_core::derive_substream_seed;

/// Derives the deterministic seed for one chain in a family of independent
/// chains sharing a master seed.
pub fn chain_seed(master_seed: u64, chain_index: usize) -> u64 {
    derive_substream_seed(master_seed, chain_index as u64)
}
