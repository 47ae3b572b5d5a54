use borax_core::Observer;
use borax_search::{Action, Event};

/// Stops a search once measurement noise makes the tolerance unreachable.
///
/// The driver itself never consults uncertainty; this guard is the opt-in
/// noise-aware stopping rule. It requests an early stop when the reported
/// uncertainty, scaled by a caller-chosen multiple, meets or exceeds the
/// convergence tolerance, since further refinement would mostly resolve
/// noise rather than the root.
#[derive(Debug, Clone, Copy)]
pub struct NoiseFloorGuard {
    tolerance: f64,
    multiple: f64,
}

impl NoiseFloorGuard {
    /// Guards a search converging on `tolerance`.
    ///
    /// Iteration continues only while `multiple * uncertainty < tolerance`.
    /// A `multiple` of 2 or 3 is a reasonable starting point for
    /// one-standard-deviation uncertainties.
    #[must_use]
    pub fn new(tolerance: f64, multiple: f64) -> Self {
        Self {
            tolerance,
            multiple,
        }
    }

    fn should_stop(&self, uncertainty: f64) -> bool {
        self.multiple * uncertainty >= self.tolerance
    }
}

impl<'a> Observer<Event<'a>, Action> for NoiseFloorGuard {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        let uncertainty = event.sample().measurement.uncertainty;
        self.should_stop(uncertainty).then_some(Action::StopEarly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use borax_core::{Evaluator, Measurement, RunOptions};
    use borax_search::{Config, Solution, Status, search};

    #[test]
    fn stops_when_scaled_noise_reaches_tolerance() {
        let guard = NoiseFloorGuard::new(1e-2, 3.0);
        assert!(!guard.should_stop(1e-3));
        assert!(guard.should_stop(4e-3));
        assert!(guard.should_stop(1e-2 / 3.0));
    }

    /// Linear response whose reported uncertainty dwarfs the tolerance.
    struct NoisyLinear;
    impl Evaluator for NoisyLinear {
        type Error = std::convert::Infallible;

        fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
            Ok(Measurement::new(guess, 0.5))
        }
    }

    #[test]
    fn guard_halts_a_search_dominated_by_noise() {
        let config = Config {
            residual_tol: 1e-3,
            ..Config::default()
        };
        let guard = NoiseFloorGuard::new(config.residual_tol, 2.0);

        let solution: Solution =
            search(&NoisyLinear, 0.3, [0.0, 1.0], &config, guard).expect("stops cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        // The very first endpoint evaluation already trips the guard.
        assert_eq!(solution.iterations, 1);
    }
}
