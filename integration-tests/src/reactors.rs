//! Fixture evaluators for integration scenarios.

use std::cell::Cell;
use std::convert::Infallible;

use borax_core::{Evaluator, Measurement, RunOptions};
use thiserror::Error;

/// Replays the measurement table from the published boron-dilution search.
///
/// Guesses are matched to tabulated runs within half a ppm; anything else is
/// an error, which doubles as a check that the driver proposes exactly the
/// expected trajectory.
pub struct BoronReplay {
    table: Vec<(f64, f64, f64)>,
}

impl BoronReplay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: vec![
                (1000.0, 1.08971, 0.00425),
                (2500.0, 0.95309, 0.00389),
                (1750.0, 1.01511, 0.00313),
                (2125.0, 0.98400, 0.00368),
                (1937.5, 0.99913, 0.00381),
            ],
        }
    }
}

impl Default for BoronReplay {
    fn default() -> Self {
        Self::new()
    }
}

/// A guess with no tabulated run.
#[derive(Debug, Error)]
#[error("no tabulated run for guess {guess}")]
pub struct UnknownGuess {
    pub guess: f64,
}

impl Evaluator for BoronReplay {
    type Error = UnknownGuess;

    fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
        self.table
            .iter()
            .find(|(g, ..)| (g - guess).abs() < 0.5)
            .map(|&(_, value, uncertainty)| Measurement::new(value, uncertainty))
            .ok_or(UnknownGuess { guess })
    }
}

/// Deterministic linear response `a * x + b`.
pub struct Linear {
    pub a: f64,
    pub b: f64,
}

impl Evaluator for Linear {
    type Error = Infallible;

    fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
        Ok(Measurement::exact(self.a * guess + self.b))
    }
}

/// Counts invocations of an inner evaluator.
pub struct Counting<Ev> {
    inner: Ev,
    calls: Cell<usize>,
}

impl<Ev> Counting<Ev> {
    pub fn new(inner: Ev) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<Ev: Evaluator> Evaluator for Counting<Ev> {
    type Error = Ev::Error;

    fn evaluate(&self, guess: f64, run: &RunOptions) -> Result<Measurement, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(guess, run)
    }
}

/// The simulation failed.
#[derive(Debug, Error)]
#[error("transport run aborted")]
pub struct Aborted;

/// Evaluator that always fails, as a crashed simulation would.
pub struct Failing;

impl Evaluator for Failing {
    type Error = Aborted;

    fn evaluate(&self, _guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
        Err(Aborted)
    }
}
