//! Reusable observers for Borax criticality searches.
//!
//! Observers plug into [`borax_search::search`] to watch or steer a running
//! search without changing its API:
//!
//! - [`IterationLogger`] prints one line per evaluator invocation.
//! - [`NoiseFloorGuard`] stops a search early once measurement noise makes
//!   the convergence tolerance unreachable.

mod logger;
mod noise_floor;

pub use logger::IterationLogger;
pub use noise_floor::NoiseFloorGuard;
