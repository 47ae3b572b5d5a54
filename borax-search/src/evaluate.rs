use borax_core::{Evaluator, RunOptions, Sample};

use crate::Error;

/// Calls the evaluator at a guess and normalizes failures.
///
/// This is the one place the evaluator is invoked. Evaluator errors come back
/// with the offending guess attached, and measurements with a non-finite
/// value or an invalid uncertainty are rejected before they can poison the
/// bracket logic.
pub(crate) fn evaluate<Ev>(evaluator: &Ev, guess: f64, run: &RunOptions) -> Result<Sample, Error>
where
    Ev: Evaluator,
{
    let measurement = evaluator
        .evaluate(guess, run)
        .map_err(|source| Error::Evaluation {
            guess,
            source: Box::new(source),
        })?;

    if !measurement.is_valid() {
        return Err(Error::InvalidMeasurement {
            guess,
            value: measurement.value,
            uncertainty: measurement.uncertainty,
        });
    }

    Ok(Sample::new(guess, measurement))
}

#[cfg(test)]
mod tests {
    use super::*;

    use borax_core::Measurement;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("simulation crashed")]
    struct Crashed;

    /// Evaluator that always fails.
    struct Failing;
    impl Evaluator for Failing {
        type Error = Crashed;

        fn evaluate(&self, _guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
            Err(Crashed)
        }
    }

    /// Evaluator that returns a fixed measurement.
    struct Fixed(Measurement);
    impl Evaluator for Fixed {
        type Error = std::convert::Infallible;

        fn evaluate(&self, _guess: f64, _run: &RunOptions) -> Result<Measurement, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn failure_carries_the_guess() {
        let err = evaluate(&Failing, 1250.0, &RunOptions::default()).unwrap_err();
        match err {
            Error::Evaluation { guess, source } => {
                assert_eq!(guess, 1250.0);
                assert_eq!(source.to_string(), "simulation crashed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_finite_value() {
        let err = evaluate(&Fixed(Measurement::exact(f64::NAN)), 1.0, &RunOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { guess, .. } if guess == 1.0));
    }

    #[test]
    fn rejects_negative_uncertainty() {
        let err = evaluate(
            &Fixed(Measurement::new(1.0, -0.5)),
            2.0,
            &RunOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { guess, .. } if guess == 2.0));
    }

    #[test]
    fn success_pairs_guess_and_measurement() {
        let sample = evaluate(
            &Fixed(Measurement::new(1.015, 0.003)),
            1750.0,
            &RunOptions::default(),
        )
        .expect("valid measurement");
        assert_eq!(sample.guess, 1750.0);
        assert_eq!(sample.measurement.value, 1.015);
    }
}
