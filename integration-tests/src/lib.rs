//! Shared fixtures for cross-crate search scenarios.

pub mod reactors;
