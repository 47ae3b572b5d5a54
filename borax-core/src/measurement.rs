/// A noisy point estimate of the model response at a single guess.
///
/// The uncertainty is a standard-deviation-like spread. It is carried through
/// the search history for reporting and is never used as a stopping rule by
/// the driver itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Point estimate of the response.
    pub value: f64,
    /// Spread of the estimate.
    pub uncertainty: f64,
}

impl Measurement {
    /// Creates a measurement from a value and its uncertainty.
    #[must_use]
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self { value, uncertainty }
    }

    /// Creates a measurement with zero uncertainty.
    ///
    /// Useful for deterministic models and test fixtures.
    #[must_use]
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            uncertainty: 0.0,
        }
    }

    /// Returns true if the value is finite and the uncertainty is finite and
    /// non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.value.is_finite() && self.uncertainty.is_finite() && self.uncertainty >= 0.0
    }
}

/// A captured guess/measurement pair from one evaluator invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub guess: f64,
    pub measurement: Measurement,
}

impl Sample {
    /// Creates a sample from a guess and its measurement.
    #[must_use]
    pub fn new(guess: f64, measurement: Measurement) -> Self {
        Self { guess, measurement }
    }

    /// Returns the residual of this sample against a target response.
    #[must_use]
    pub fn residual(&self, target: f64) -> f64 {
        self.measurement.value - target
    }
}
