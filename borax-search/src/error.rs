use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a criticality search.
///
/// Exhausting the iteration budget is not among them: that outcome returns a
/// [`Solution`](crate::Solution) with [`Status::MaxIterations`](crate::Status)
/// so the completed evaluations are never discarded.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("initial guess is non-finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error(
        "bracket does not straddle the target {target}: \
         f({left}) = {left_value}, f({right}) = {right_value}"
    )]
    InvalidBracket {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
        target: f64,
    },

    #[error(
        "no straddling bracket found from {start} after {evaluations} evaluations \
         (probed [{left}, {right}])"
    )]
    BracketNotFound {
        start: f64,
        left: f64,
        right: f64,
        evaluations: usize,
    },

    #[error("evaluation failed at guess {guess}")]
    Evaluation {
        guess: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("invalid measurement at guess {guess}: value {value} +/- {uncertainty}")]
    InvalidMeasurement {
        guess: f64,
        value: f64,
        uncertainty: f64,
    },

    #[error(
        "bracket collapsed to [{left}, {right}] with residual {residual} still above tolerance; \
         the evaluator is likely non-monotonic or its noise exceeds the tolerance"
    )]
    DegenerateBracket { left: f64, right: f64, residual: f64 },

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,
}
