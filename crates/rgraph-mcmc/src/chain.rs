use rgraph_core::errors::{ErrorInfo, RgError};
use rgraph_core::{ChainRng, SwitchState};
use serde::{Deserialize, Serialize};

/// Iteration and sampling policy for one chain run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOptions {
    /// Total number of switch proposals to execute.
    pub iterations: usize,
    /// Stride between callback invocations after burn-in. Must be positive.
    pub call_every: usize,
    /// Leading iterations excluded from sampling.
    pub burn_in: usize,
}

impl ChainOptions {
    /// Options that sample after every iteration with no burn-in.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            call_every: 1,
            burn_in: 0,
        }
    }

    /// Sets the sampling stride.
    pub fn with_call_every(mut self, call_every: usize) -> Self {
        self.call_every = call_every;
        self
    }

    /// Sets the burn-in length.
    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    fn validate(&self) -> Result<(), RgError> {
        if self.call_every == 0 {
            return Err(RgError::Argument(
                ErrorInfo::new("invalid-call-every", "call_every must be positive")
                    .with_context("call_every", self.call_every)
                    .with_hint("use call_every = 1 to sample after every iteration"),
            ));
        }
        Ok(())
    }
}

/// Runs the switch chain, sampling the state through `callback`.
///
/// Executes exactly `options.iterations` switch calls, numbered
/// `1..=iterations`. After call `i`, the callback observes the state when
/// `i > burn_in` and `(i - burn_in) % call_every == 0`; its results are
/// returned in call order. When `burn_in >= iterations` the result is
/// empty. A callback error aborts the run immediately and discards any
/// partial results; rejected switches are normal chain steps, never errors.
///
/// The callback receives a shared reference and must not mutate the state
/// through interior channels.
pub fn mcmc<S, R, C>(
    state: &mut S,
    rng: &mut ChainRng,
    options: &ChainOptions,
    mut callback: C,
) -> Result<Vec<R>, RgError>
where
    S: SwitchState,
    C: FnMut(&S) -> Result<R, RgError>,
{
    options.validate()?;
    let mut history = Vec::new();
    for iteration in 1..=options.iterations {
        state.switch(rng);
        if iteration > options.burn_in && (iteration - options.burn_in) % options.call_every == 0 {
            history.push(callback(&*state)?);
        }
    }
    Ok(history)
}

/// Runs `iterations` switch proposals without sampling.
///
/// Returns the number of accepted proposals; the rejected remainder are
/// self-loop steps of the chain.
pub fn run_switches<S: SwitchState>(
    state: &mut S,
    rng: &mut ChainRng,
    iterations: usize,
) -> usize {
    let mut accepted = 0;
    for _ in 0..iterations {
        if state.switch(rng) {
            accepted += 1;
        }
    }
    accepted
}
