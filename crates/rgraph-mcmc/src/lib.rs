#![deny(missing_docs)]

//! Markov chain driver for switch-chain graph sampling.
//!
//! The driver is a stateless loop over a borrowed [`SwitchState`] and an
//! owned random source: it sequences switch proposals and periodically
//! reads the state through a caller-supplied callback, under a burn-in and
//! stride policy. One chain runs strictly sequentially; parallelism is only
//! sanctioned as independent chains on independently owned states, seeded
//! through [`chain_seed`].

mod chain;
mod determinism;

pub use chain::{mcmc, run_switches, ChainOptions};
pub use determinism::chain_seed;
