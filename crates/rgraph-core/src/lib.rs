#![deny(missing_docs)]

//! Shared foundation for the rgraph switch-chain sampling engine: structured
//! errors, the deterministic RNG handle, and the constant-time random
//! selectable set that every chain state is built on.

pub mod errors;
pub mod rng;
pub mod sample_set;

pub use errors::{ErrorInfo, RgError};
pub use rng::{derive_substream_seed, ChainRng};
pub use sample_set::SampleSet;

/// Contract implemented by every graph state driven by the switch chain.
///
/// A switch either leaves the state untouched (a rejected proposal, which is
/// still a genuine chain step) or swaps the endpoints of two edges while
/// preserving the degree sequence and simplicity of the state.
pub trait SwitchState {
    /// Attempts a single switch move, returning whether the state changed.
    fn switch(&mut self, rng: &mut ChainRng) -> bool;
}
