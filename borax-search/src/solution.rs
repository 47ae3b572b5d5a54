use borax_core::Measurement;

use crate::History;

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A measurement satisfied the residual tolerance.
    Converged,
    /// The evaluation budget ran out before convergence.
    ///
    /// Not an error: the solution carries the best evaluation so far and the
    /// full history, and the caller decides whether that is acceptable.
    MaxIterations,
    /// An observer requested an early stop.
    StoppedByObserver,
}

/// The result of a criticality search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the search terminated.
    pub status: Status,
    /// Best root estimate: the guess with the smallest residual magnitude
    /// over all evaluations, earliest on ties.
    pub guess: f64,
    /// Measurement at the reported estimate.
    pub measurement: Measurement,
    /// Residual at the reported estimate.
    pub residual: f64,
    /// Every evaluator invocation, in call order.
    pub history: History,
    /// Total evaluator invocations, equal to `history.len()`.
    pub iterations: usize,
}

impl Solution {
    /// Returns true if the search met the residual tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
