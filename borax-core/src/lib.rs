//! Shared abstractions for the Borax criticality-search toolkit.
//!
//! This crate defines the boundary between a search driver and the model it
//! searches: the [`Evaluator`] capability, the [`Measurement`] and [`Sample`]
//! records it produces, the [`RunOptions`] forwarded to every evaluation, and
//! the [`Observer`] trait used to monitor or steer a running search.

mod evaluator;
mod measurement;
mod observer;

pub use evaluator::{Evaluator, RunOptions};
pub use measurement::{Measurement, Sample};
pub use observer::Observer;
