use std::cell::RefCell;
use std::convert::Infallible;

use borax_core::{Evaluator, Measurement, RunOptions};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// Analytic stand-in for a borated-water critical assembly.
///
/// The reactivity worth of a dissolved absorber is close to linear in its
/// concentration, so reciprocal multiplication is modeled as linear:
/// `k(c) = k0 / (1 + w * c)` with `c` in ppm.
#[derive(Debug, Clone, Copy)]
pub struct DilutionCurve {
    /// Multiplication factor at zero absorber.
    pub k0: f64,
    /// Absorber worth per ppm.
    pub worth_per_ppm: f64,
}

impl DilutionCurve {
    /// Curve fitted to the published boron-dilution search, which measured
    /// k-effective near 1.0897 at 1000 ppm and 0.9531 at 2500 ppm.
    #[must_use]
    pub fn boron() -> Self {
        Self {
            k0: 1.2048,
            worth_per_ppm: 1.0565e-4,
        }
    }

    /// Multiplication factor at the given absorber concentration.
    #[must_use]
    pub fn keff(&self, ppm: f64) -> f64 {
        self.k0 / (1.0 + self.worth_per_ppm * ppm)
    }

    /// Concentration at which the assembly is exactly critical.
    #[must_use]
    pub fn critical_ppm(&self) -> f64 {
        (self.k0 - 1.0) / self.worth_per_ppm
    }
}

impl Evaluator for DilutionCurve {
    type Error = Infallible;

    fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
        Ok(Measurement::exact(self.keff(guess)))
    }
}

/// A dilution curve with seeded Gaussian counting noise.
///
/// Stands in for a Monte Carlo eigenvalue estimate: each evaluation draws a
/// fresh noise term and reports `sigma` as the uncertainty. Seeded, so a
/// given search trajectory reproduces exactly.
#[derive(Debug)]
pub struct NoisyReactor {
    curve: DilutionCurve,
    sigma: f64,
    rng: RefCell<StdRng>,
}

impl NoisyReactor {
    /// Wraps a curve with noise of the given standard deviation.
    #[must_use]
    pub fn new(curve: DilutionCurve, sigma: f64, seed: u64) -> Self {
        Self {
            curve,
            sigma,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The underlying noise-free curve.
    #[must_use]
    pub fn curve(&self) -> DilutionCurve {
        self.curve
    }
}

impl Evaluator for NoisyReactor {
    type Error = Infallible;

    fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
        let z: f64 = self.rng.borrow_mut().sample(StandardNormal);
        let value = self.curve.keff(guess) + self.sigma * z;
        Ok(Measurement::new(value, self.sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn boron_curve_matches_the_published_measurements() {
        let curve = DilutionCurve::boron();
        assert_relative_eq!(curve.keff(1000.0), 1.0897, epsilon = 2e-4);
        assert_relative_eq!(curve.keff(2500.0), 0.9531, epsilon = 2e-4);
    }

    #[test]
    fn critical_concentration_inverts_the_curve() {
        let curve = DilutionCurve::boron();
        let critical = curve.critical_ppm();
        assert_relative_eq!(curve.keff(critical), 1.0, epsilon = 1e-12);
        assert!((1900.0..2000.0).contains(&critical));
    }

    #[test]
    fn noisy_reactor_reproduces_under_the_same_seed() {
        let a = NoisyReactor::new(DilutionCurve::boron(), 3e-3, 7);
        let b = NoisyReactor::new(DilutionCurve::boron(), 3e-3, 7);
        let run = RunOptions::default();

        for guess in [1000.0, 1750.0, 2500.0] {
            let ma = a.evaluate(guess, &run).expect("infallible");
            let mb = b.evaluate(guess, &run).expect("infallible");
            assert_relative_eq!(ma.value, mb.value);
            assert_relative_eq!(ma.uncertainty, 3e-3);
        }
    }

    #[test]
    fn noise_scatters_around_the_curve() {
        let curve = DilutionCurve::boron();
        let reactor = NoisyReactor::new(curve, 3e-3, 42);
        let run = RunOptions::default();

        let m = reactor.evaluate(1750.0, &run).expect("infallible");
        assert_relative_eq!(m.value, curve.keff(1750.0), epsilon = 5.0 * 3e-3);
    }
}
