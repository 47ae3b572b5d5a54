use borax_core::{Evaluator, Observer, RunOptions, Sample};

use crate::{
    Error,
    evaluate::evaluate,
    event::{Action, Event},
    history::History,
    solution::{Solution, Status},
};

/// Which part of the search produced an evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Phase {
    Endpoint,
    Expansion,
    Step([f64; 2]),
}

/// One recorded evaluation, as seen by the driver.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Observed {
    pub(crate) sample: Sample,
    pub(crate) residual: f64,
    /// The observer asked to stop after this evaluation.
    pub(crate) stop: bool,
}

/// Best evaluation so far, by residual magnitude.
#[derive(Debug, Clone, Copy)]
struct Best {
    sample: Sample,
    residual: f64,
}

/// State owned by a single search invocation.
///
/// Every evaluation flows through [`Context::evaluate`], which records the
/// sample, emits exactly one event, and updates the best-so-far tracking.
/// That single choke point is what makes the history length equal the
/// invocation count.
pub(crate) struct Context<'a, Ev, Obs> {
    evaluator: &'a Ev,
    target: f64,
    run: RunOptions,
    observer: Obs,
    history: History,
    best: Option<Best>,
}

impl<'a, Ev, Obs> Context<'a, Ev, Obs>
where
    Ev: Evaluator,
    Obs: for<'e> Observer<Event<'e>, Action>,
{
    pub(crate) fn new(evaluator: &'a Ev, target: f64, run: RunOptions, observer: Obs) -> Self {
        Self {
            evaluator,
            target,
            run,
            observer,
            history: History::new(),
            best: None,
        }
    }

    pub(crate) fn target(&self) -> f64 {
        self.target
    }

    /// Returns the number of evaluator invocations so far.
    pub(crate) fn iterations(&self) -> usize {
        self.history.len()
    }

    /// Returns the two most recent samples, oldest first.
    pub(crate) fn recent_pair(&self) -> Option<[Sample; 2]> {
        let samples = self.history.samples();
        match samples {
            [.., a, b] => Some([*a, *b]),
            _ => None,
        }
    }

    /// Evaluates a guess, records the sample, and notifies the observer.
    pub(crate) fn evaluate(&mut self, guess: f64, phase: Phase) -> Result<Observed, Error> {
        let sample = evaluate(self.evaluator, guess, &self.run)?;
        let residual = sample.residual(self.target);

        self.history.record(sample);
        let iteration = self.history.len();

        let event = match phase {
            Phase::Endpoint => Event::Endpoint {
                iteration,
                sample: &sample,
                residual,
            },
            Phase::Expansion => Event::Expansion {
                iteration,
                sample: &sample,
                residual,
            },
            Phase::Step(bracket) => Event::Step {
                iteration,
                sample: &sample,
                residual,
                bracket,
            },
        };
        let stop = matches!(self.observer.observe(&event), Some(Action::StopEarly));

        self.update_best(sample, residual);

        Ok(Observed {
            sample,
            residual,
            stop,
        })
    }

    fn update_best(&mut self, sample: Sample, residual: f64) {
        if let Some(best) = &self.best
            && residual.abs() >= best.residual.abs()
        {
            return;
        }
        self.best = Some(Best { sample, residual });
    }

    /// Builds the solution from the best evaluation and the full history.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if nothing was evaluated;
    /// unreachable through the public entry points, which always evaluate at
    /// least once before finishing.
    pub(crate) fn finish(self, status: Status) -> Result<Solution, Error> {
        let best = self.best.ok_or(Error::NoSuccessfulEvaluation)?;
        let iterations = self.history.len();

        Ok(Solution {
            status,
            guess: best.sample.guess,
            measurement: best.sample.measurement,
            residual: best.residual,
            history: self.history,
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use borax_core::Measurement;

    /// Evaluator that reflects the guess back as the measured value.
    struct Echo;
    impl Evaluator for Echo {
        type Error = std::convert::Infallible;

        fn evaluate(&self, guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
            Ok(Measurement::exact(guess))
        }
    }

    #[test]
    fn best_keeps_smallest_residual() {
        let mut ctx = Context::new(&Echo, 1.0, RunOptions::default(), ());
        ctx.evaluate(3.0, Phase::Endpoint).expect("evaluates");
        ctx.evaluate(1.5, Phase::Endpoint).expect("evaluates");
        ctx.evaluate(2.5, Phase::Step([1.0, 3.0])).expect("evaluates");

        let solution = ctx.finish(Status::MaxIterations).expect("has evaluations");
        assert_relative_eq!(solution.guess, 1.5);
        assert_relative_eq!(solution.residual, 0.5);
        assert_eq!(solution.iterations, 3);
        assert_eq!(solution.history.len(), 3);
    }

    #[test]
    fn best_ties_keep_the_earliest() {
        let mut ctx = Context::new(&Echo, 1.0, RunOptions::default(), ());
        ctx.evaluate(0.5, Phase::Endpoint).expect("evaluates");
        ctx.evaluate(1.5, Phase::Endpoint).expect("evaluates");

        let solution = ctx.finish(Status::MaxIterations).expect("has evaluations");
        assert_relative_eq!(solution.guess, 0.5);
    }

    #[test]
    fn recent_pair_is_oldest_first() {
        let mut ctx = Context::new(&Echo, 0.0, RunOptions::default(), ());
        assert!(ctx.recent_pair().is_none());

        ctx.evaluate(1.0, Phase::Endpoint).expect("evaluates");
        assert!(ctx.recent_pair().is_none());

        ctx.evaluate(2.0, Phase::Endpoint).expect("evaluates");
        ctx.evaluate(3.0, Phase::Expansion).expect("evaluates");
        let [a, b] = ctx.recent_pair().expect("two samples");
        assert_relative_eq!(a.guess, 2.0);
        assert_relative_eq!(b.guess, 3.0);
    }

    #[test]
    fn finish_without_evaluations_is_an_error() {
        let ctx = Context::new(&Echo, 0.0, RunOptions::default(), ());
        assert!(matches!(
            ctx.finish(Status::Converged),
            Err(Error::NoSuccessfulEvaluation)
        ));
    }
}
