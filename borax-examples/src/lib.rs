//! Synthetic reactor models for demonstrating the criticality search.
//!
//! Real criticality searches drive a Monte Carlo transport code; these models
//! stand in for one with an analytic dilution curve and a seeded-noise
//! wrapper, so the demos and tests run in microseconds and reproduce exactly.

mod dilution;

pub use dilution::{DilutionCurve, NoisyReactor};
