use borax_core::Sample;

/// Event emitted once per evaluator invocation.
///
/// `iteration` is 1-based and equals the history length at emission, so an
/// observer can count invocations without its own bookkeeping.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A caller-supplied bracket endpoint was evaluated.
    Endpoint {
        iteration: usize,
        sample: &'a Sample,
        residual: f64,
    },
    /// An automatic bracket-search probe was evaluated.
    Expansion {
        iteration: usize,
        sample: &'a Sample,
        residual: f64,
    },
    /// An in-bracket refinement step was evaluated.
    Step {
        iteration: usize,
        sample: &'a Sample,
        residual: f64,
        /// The bracket as it stood when the step was proposed.
        bracket: [f64; 2],
    },
}

impl<'a> Event<'a> {
    /// Returns the 1-based evaluator invocation count.
    #[must_use]
    pub fn iteration(&self) -> usize {
        match self {
            Event::Endpoint { iteration, .. }
            | Event::Expansion { iteration, .. }
            | Event::Step { iteration, .. } => *iteration,
        }
    }

    /// Returns the recorded sample.
    #[must_use]
    pub fn sample(&self) -> &'a Sample {
        match self {
            Event::Endpoint { sample, .. }
            | Event::Expansion { sample, .. }
            | Event::Step { sample, .. } => sample,
        }
    }

    /// Returns the residual of the sample against the search target.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Event::Endpoint { residual, .. }
            | Event::Expansion { residual, .. }
            | Event::Step { residual, .. } => *residual,
        }
    }
}

/// Control actions an observer may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best solution found so far.
    StopEarly,
}

#[cfg(test)]
mod tests {
    use super::*;

    use borax_core::Measurement;

    #[test]
    fn accessors_cover_all_variants() {
        let sample = Sample::new(1750.0, Measurement::new(1.01511, 0.00313));

        let endpoint = Event::Endpoint {
            iteration: 1,
            sample: &sample,
            residual: 0.01511,
        };
        let expansion = Event::Expansion {
            iteration: 2,
            sample: &sample,
            residual: 0.01511,
        };
        let step = Event::Step {
            iteration: 3,
            sample: &sample,
            residual: 0.01511,
            bracket: [1000.0, 2500.0],
        };

        for (event, iteration) in [(endpoint, 1), (expansion, 2), (step, 3)] {
            assert_eq!(event.iteration(), iteration);
            assert_eq!(event.sample().guess, 1750.0);
            assert_eq!(event.residual(), 0.01511);
        }
    }
}
