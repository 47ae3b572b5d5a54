use std::{num::NonZeroUsize, time::Duration};

use crate::Measurement;

/// Auxiliary options forwarded to every evaluator invocation.
///
/// These control verbosity and resource use of the underlying simulation and
/// have no effect on the semantics of the returned measurement. Enforcement
/// is the evaluator's responsibility; a blown time budget should surface as
/// the evaluator's own error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOptions {
    /// Suppress the simulation's own console output.
    pub quiet: bool,
    /// Wall-clock budget for a single evaluation.
    pub time_limit: Option<Duration>,
    /// Cap on evaluator-internal parallelism.
    pub threads: Option<NonZeroUsize>,
}

/// A model whose scalar response is estimated at a given guess.
///
/// This is the injected capability a search drives: typically an expensive
/// stochastic simulation, monotonic (or assumed monotonic) in the guess over
/// the search domain. The driver calls it strictly sequentially and makes as
/// few calls as the method allows.
pub trait Evaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model response at the given guess.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails.
    fn evaluate(&self, guess: f64, run: &RunOptions) -> Result<Measurement, Self::Error>;
}
