//! Boron-dilution criticality search, end to end.
//!
//! Finds the boron concentration that makes a simulated assembly exactly
//! critical (k-effective = 1.0). The "simulation" is a noisy analytic
//! dilution curve; swap in any [`borax_core::Evaluator`] backed by a real
//! transport code and the search is unchanged.

use borax_examples::{DilutionCurve, NoisyReactor};
use borax_observers::IterationLogger;
use borax_search::{Config, Method, Start, search};

fn main() -> Result<(), borax_search::Error> {
    let reactor = NoisyReactor::new(DilutionCurve::boron(), 3.0e-3, 42);

    let config = Config {
        residual_tol: 1e-2,
        ..Config::default()
    };

    println!("Bisection search, bracket [1000, 2500] ppm:");
    let solution = search(
        &reactor,
        1.0,
        Start::Bracket([1000.0, 2500.0]),
        &config,
        IterationLogger::stdout(),
    )?;
    println!(
        "Critical concentration: {:.0} ppm (keff {:.5} +/- {:.5}, {} evaluations, converged: {})",
        solution.guess,
        solution.measurement.value,
        solution.measurement.uncertainty,
        solution.iterations,
        solution.converged(),
    );

    println!();
    println!("Secant search from a single guess of 1000 ppm:");
    let secant_config = Config {
        method: Method::Secant,
        ..config
    };
    let solution = search(
        &reactor,
        1.0,
        Start::InitialGuess(1000.0),
        &secant_config,
        IterationLogger::stdout(),
    )?;
    println!(
        "Critical concentration: {:.0} ppm (keff {:.5} +/- {:.5}, {} evaluations, converged: {})",
        solution.guess,
        solution.measurement.value,
        solution.measurement.uncertainty,
        solution.iterations,
        solution.converged(),
    );

    Ok(())
}
