use borax_core::RunOptions;

/// Root-finding method used to propose the next guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Halve the bracket each step.
    ///
    /// Guaranteed to converge when the evaluator is monotonic and the bracket
    /// straddles the target.
    #[default]
    Bisection,
    /// Linear interpolation through the two most recent samples.
    ///
    /// Faster on near-linear responses. Any step whose interpolant has an
    /// unusable slope or falls outside the current bracket uses the midpoint
    /// instead, so the bracket containment guarantee is never given up.
    Secant,
}

/// Configuration for a criticality search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// How the next guess is proposed.
    pub method: Method,
    /// Convergence test: `|value - target| < residual_tol`.
    ///
    /// The default suits noisy Monte Carlo estimates; tighten it for
    /// deterministic evaluators.
    pub residual_tol: f64,
    /// Absolute term of the bracket-width floor.
    pub x_abs_tol: f64,
    /// Relative term of the bracket-width floor.
    pub x_rel_tol: f64,
    /// Evaluation budget per phase: bounds the outward expansion probes and,
    /// separately, the in-bracket refinement steps.
    pub max_iters: usize,
    /// Geometric growth of the outward step during automatic bracket search.
    pub expand_factor: f64,
    /// Options forwarded verbatim to every evaluator call.
    pub run: RunOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::Bisection,
            residual_tol: 1e-3,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            max_iters: 100,
            expand_factor: 2.0,
            run: RunOptions::default(),
        }
    }
}

impl Config {
    /// Validates tolerances and limits.
    ///
    /// Runs before any evaluator call so a bad configuration never costs an
    /// expensive evaluation.
    ///
    /// # Errors
    ///
    /// Returns the reason if any field is out of range.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err("residual_tol must be finite and positive");
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err("x_rel_tol must be finite and non-negative");
        }
        if !self.expand_factor.is_finite() || self.expand_factor <= 1.0 {
            return Err("expand_factor must be finite and greater than one");
        }
        Ok(())
    }
}
