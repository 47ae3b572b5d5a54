use borax_core::{Evaluator, Observer, Sample};

use crate::{
    Error,
    bracket::{Bounds, Bracket, Sign},
    config::{Config, Method},
    context::{Context, Phase},
    event::{Action, Event},
    expand,
    solution::{Solution, Status},
};

/// Where a search starts.
///
/// Exactly one of the two starting modes exists by construction: either a
/// bracket believed to straddle the target, or a single guess from which a
/// straddling bracket is found automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Start {
    /// A pair of guesses believed to straddle the target.
    Bracket([f64; 2]),
    /// A single guess; the driver probes outward for a bracket.
    InitialGuess(f64),
}

impl From<[f64; 2]> for Start {
    fn from(bracket: [f64; 2]) -> Self {
        Start::Bracket(bracket)
    }
}

impl From<f64> for Start {
    fn from(guess: f64) -> Self {
        Start::InitialGuess(guess)
    }
}

/// Searches for the guess that drives the evaluator's response to `target`.
///
/// The observer sees one event per evaluator invocation and may return
/// [`Action::StopEarly`] to finish with the best solution so far.
///
/// Convergence is `|value - target| < residual_tol`. Exhausting the
/// evaluation budget is not an error: the solution carries the best
/// evaluation and the full history with [`Status::MaxIterations`].
///
/// # Errors
///
/// Returns an error if the configuration or starting point is invalid, the
/// caller's bracket does not straddle the target, no bracket is found within
/// the budget, an evaluation fails, or the bracket collapses below the width
/// floor without meeting tolerance.
pub fn search<Ev, Obs>(
    evaluator: &Ev,
    target: f64,
    start: impl Into<Start>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Ev: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !target.is_finite() {
        return Err(Error::InvalidConfig {
            reason: "target must be finite",
        });
    }

    let mut ctx = Context::new(evaluator, target, config.run, observer);

    let bracket = match start.into() {
        Start::Bracket(raw) => {
            let bounds = Bounds::new(raw)?;
            match evaluate_endpoints(&mut ctx, bounds, config)? {
                Startup::Bracketed(bracket) => bracket,
                Startup::Finished(status) => return ctx.finish(status),
            }
        }
        Start::InitialGuess(seed) => {
            if !seed.is_finite() {
                return Err(Error::NonFiniteGuess { value: seed });
            }
            match expand::expand(&mut ctx, seed, config)? {
                expand::Outcome::Bracketed(bracket) => bracket,
                expand::Outcome::Finished(status) => return ctx.finish(status),
            }
        }
    };

    let status = refine(&mut ctx, bracket, config)?;
    ctx.finish(status)
}

/// Runs a search without observation.
///
/// # Errors
///
/// Same conditions as [`search`].
pub fn search_unobserved<Ev>(
    evaluator: &Ev,
    target: f64,
    start: impl Into<Start>,
    config: &Config,
) -> Result<Solution, Error>
where
    Ev: Evaluator,
{
    search(evaluator, target, start, config, ())
}

enum Startup {
    Bracketed(Bracket),
    Finished(Status),
}

/// Evaluates both endpoints of a caller-supplied bracket.
///
/// An endpoint already within tolerance converges immediately, saving the
/// refinement phase entirely. If both residual signs match, the bracket does
/// not straddle the target and the search fails after exactly these two
/// evaluations.
fn evaluate_endpoints<Ev, Obs>(
    ctx: &mut Context<'_, Ev, Obs>,
    bounds: Bounds,
    config: &Config,
) -> Result<Startup, Error>
where
    Ev: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let left = ctx.evaluate(bounds.left(), Phase::Endpoint)?;
    if left.stop {
        return Ok(Startup::Finished(Status::StoppedByObserver));
    }
    if left.residual.abs() < config.residual_tol {
        return Ok(Startup::Finished(Status::Converged));
    }

    let right = ctx.evaluate(bounds.right(), Phase::Endpoint)?;
    if right.stop {
        return Ok(Startup::Finished(Status::StoppedByObserver));
    }
    if right.residual.abs() < config.residual_tol {
        return Ok(Startup::Finished(Status::Converged));
    }

    Bracket::new(
        (bounds.left(), Sign::of(left.residual)),
        (bounds.right(), Sign::of(right.residual)),
    )
    .map(Startup::Bracketed)
    .ok_or(Error::InvalidBracket {
        left: bounds.left(),
        right: bounds.right(),
        left_value: left.sample.measurement.value,
        right_value: right.sample.measurement.value,
        target: ctx.target(),
    })
}

/// Shrinks the bracket until a measurement meets the residual tolerance.
fn refine<Ev, Obs>(
    ctx: &mut Context<'_, Ev, Obs>,
    mut bracket: Bracket,
    config: &Config,
) -> Result<Status, Error>
where
    Ev: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    for _ in 0..config.max_iters {
        let guess = propose(config.method, &bracket, ctx.recent_pair(), ctx.target());

        let observed = ctx.evaluate(guess, Phase::Step(bracket.as_array()))?;
        if observed.stop {
            return Ok(Status::StoppedByObserver);
        }
        if observed.residual.abs() < config.residual_tol {
            return Ok(Status::Converged);
        }

        bracket.shrink(guess, Sign::of(observed.residual));
        if bracket.is_below_floor(config.x_abs_tol, config.x_rel_tol) {
            let [left, right] = bracket.as_array();
            return Err(Error::DegenerateBracket {
                left,
                right,
                residual: observed.residual,
            });
        }
    }

    Ok(Status::MaxIterations)
}

/// Proposes the next guess inside the bracket.
fn propose(method: Method, bracket: &Bracket, recent: Option<[Sample; 2]>, target: f64) -> f64 {
    match method {
        Method::Bisection => bracket.midpoint(),
        Method::Secant => secant_or_midpoint(bracket, recent, target),
    }
}

/// Linear interpolation through the two most recent samples, guarded.
///
/// Falls back to the bracket midpoint when fewer than two samples exist, the
/// slope is zero, or the interpolant is non-finite or outside the open
/// bracket interval. The fallback is what keeps the hybrid convergent on
/// evaluators where pure secant would wander.
fn secant_or_midpoint(bracket: &Bracket, recent: Option<[Sample; 2]>, target: f64) -> f64 {
    let Some([a, b]) = recent else {
        return bracket.midpoint();
    };

    let (g1, v1) = (a.guess, a.measurement.value);
    let (g2, v2) = (b.guess, b.measurement.value);

    #[allow(clippy::float_cmp)]
    if v1 == v2 {
        return bracket.midpoint();
    }

    let x = g1 + (target - v1) * (g2 - g1) / (v2 - v1);
    if !x.is_finite() || !bracket.contains_interior(x) {
        return bracket.midpoint();
    }
    x
}
