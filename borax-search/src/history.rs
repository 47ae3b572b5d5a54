use borax_core::{Measurement, Sample};

/// Append-only record of every evaluator invocation, in call order.
///
/// Recording is crate-private, so a history handed to the caller can no
/// longer change. It holds exactly one entry per invocation: endpoints,
/// expansion probes, and refinement steps alike.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Returns all recorded samples in call order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the guesses in call order.
    #[must_use]
    pub fn guesses(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.guess).collect()
    }

    /// Returns the measurements in call order.
    #[must_use]
    pub fn measurements(&self) -> Vec<Measurement> {
        self.samples.iter().map(|s| s.measurement).collect()
    }

    /// Returns the number of recorded evaluator invocations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn records_in_call_order() {
        let mut history = History::new();
        history.record(Sample::new(1000.0, Measurement::exact(1.1)));
        history.record(Sample::new(2500.0, Measurement::exact(0.95)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.guesses(), vec![1000.0, 2500.0]);
        assert_relative_eq!(history.measurements()[1].value, 0.95);
        assert_relative_eq!(history.last().expect("non-empty").guess, 2500.0);
    }

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn iterates_over_samples() {
        let mut history = History::new();
        history.record(Sample::new(1.0, Measurement::exact(0.5)));
        history.record(Sample::new(2.0, Measurement::exact(0.6)));

        let guesses: Vec<f64> = (&history).into_iter().map(|s| s.guess).collect();
        assert_eq!(guesses, vec![1.0, 2.0]);
    }
}
