//! Root-finding search driver for expensive, noisy, black-box evaluators.
//!
//! [`search`] finds the scalar input that drives an evaluator's response to a
//! target value. The caller supplies either a bracket believed to straddle
//! the target or a single initial guess, in which case the driver probes
//! outward until it finds a straddling bracket on its own. Refinement is
//! bracketed bisection or a bracketed secant hybrid that falls back to the
//! midpoint whenever the interpolant is unusable or escapes the bracket.
//!
//! Every evaluator invocation is recorded in an append-only [`History`] that
//! is returned with the solution, so exhausting the iteration budget loses no
//! completed work: the solution reports the best evaluation seen so far with
//! status [`Status::MaxIterations`] rather than an error.
//!
//! # Example
//!
//! ```
//! use borax_core::{Evaluator, Measurement, RunOptions};
//! use borax_search::{Config, Start, search_unobserved};
//!
//! /// A deterministic calibration curve with its root at 400.
//! struct Calibration;
//!
//! impl Evaluator for Calibration {
//!     type Error = std::convert::Infallible;
//!
//!     fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
//!         Ok(Measurement::exact(1.2 - guess / 2000.0))
//!     }
//! }
//!
//! # fn main() -> Result<(), borax_search::Error> {
//! let solution = search_unobserved(&Calibration, 1.0, Start::Bracket([0.0, 1000.0]), &Config::default())?;
//!
//! assert!(solution.converged());
//! assert!((solution.guess - 400.0).abs() < 5.0);
//! # Ok(())
//! # }
//! ```

mod bracket;
mod config;
mod context;
mod driver;
mod error;
mod evaluate;
mod event;
mod expand;
mod history;
mod solution;

pub use config::{Config, Method};
pub use driver::{Start, search, search_unobserved};
pub use error::Error;
pub use event::{Action, Event};
pub use history::History;
pub use solution::{Solution, Status};
