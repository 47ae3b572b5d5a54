use std::io::{self, Write};

use borax_core::Observer;
use borax_search::{Action, Event};

/// Logs one line per evaluator invocation.
///
/// The line mirrors the classic criticality-search printout:
///
/// ```text
/// Iteration: 3; Guess of 1.75e3 produced a value of 1.01511 +/- 0.00313
/// ```
///
/// Write failures are swallowed: a broken log sink never aborts a search.
pub struct IterationLogger<W> {
    writer: W,
}

impl IterationLogger<io::Stdout> {
    /// Logs to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> IterationLogger<W> {
    /// Logs to the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the logger and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<'a, W: Write> Observer<Event<'a>, Action> for IterationLogger<W> {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        let sample = event.sample();
        let _ = writeln!(
            self.writer,
            "Iteration: {}; Guess of {:e} produced a value of {:.5} +/- {:.5}",
            event.iteration(),
            sample.guess,
            sample.measurement.value,
            sample.measurement.uncertainty,
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use borax_core::{Measurement, Sample};

    #[test]
    fn formats_the_iteration_line() {
        let sample = Sample::new(1750.0, Measurement::new(1.01511, 0.00313));
        let event = Event::Step {
            iteration: 3,
            sample: &sample,
            residual: 0.01511,
            bracket: [1000.0, 2500.0],
        };

        let mut logger = IterationLogger::new(Vec::new());
        assert!(logger.observe(&event).is_none());

        let line = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(
            line,
            "Iteration: 3; Guess of 1.75e3 produced a value of 1.01511 +/- 0.00313\n"
        );
    }

    #[test]
    fn logs_every_event_kind() {
        let sample = Sample::new(1000.0, Measurement::new(1.08971, 0.00425));
        let endpoint = Event::Endpoint {
            iteration: 1,
            sample: &sample,
            residual: 0.08971,
        };
        let expansion = Event::Expansion {
            iteration: 2,
            sample: &sample,
            residual: 0.08971,
        };

        let mut logger = IterationLogger::new(Vec::new());
        logger.observe(&endpoint);
        logger.observe(&expansion);

        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("Iteration: 1; Guess of 1e3"));
    }
}
