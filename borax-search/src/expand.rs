use borax_core::{Evaluator, Observer};

use crate::{
    Error,
    bracket::{Bracket, Sign},
    config::Config,
    context::{Context, Phase},
    event::{Action, Event},
    solution::Status,
};

/// What the outward bracket search produced.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// A straddling bracket, ready for refinement.
    Bracketed(Bracket),
    /// The search already finished during expansion.
    Finished(Status),
}

/// Searches outward from a seed guess for a bracket that straddles the target.
///
/// Probes alternate below and above the seed, starting half the seed's
/// magnitude away (at least half a unit) and growing geometrically by
/// `expand_factor` after each round. The direction of the root is unknown, so
/// both sides are probed. When a probe's residual sign flips, the returned
/// bracket is the tight one: the flip probe paired with the most recent probe
/// on the same side of the seed.
///
/// Budget: `max_iters` probes beyond the seed. Exhaustion, or a probe
/// overflowing to a non-finite value, yields `Error::BracketNotFound` with
/// the outermost probed span attached.
pub(crate) fn expand<Ev, Obs>(
    ctx: &mut Context<'_, Ev, Obs>,
    seed: f64,
    config: &Config,
) -> Result<Outcome, Error>
where
    Ev: Evaluator,
    Obs: for<'e> Observer<Event<'e>, Action>,
{
    let observed = ctx.evaluate(seed, Phase::Expansion)?;
    if observed.stop {
        return Ok(Outcome::Finished(Status::StoppedByObserver));
    }
    if observed.residual.abs() < config.residual_tol {
        return Ok(Outcome::Finished(Status::Converged));
    }
    let seed_sign = Sign::of(observed.residual);

    // Most recent probe on each side of the seed; the seed anchors both.
    let mut below = (seed, seed_sign);
    let mut above = (seed, seed_sign);

    let mut step = seed.abs().max(1.0) / 2.0;
    let mut lowest = seed;
    let mut highest = seed;
    let mut side_below = true;

    for _ in 0..config.max_iters {
        let x = if side_below { seed - step } else { seed + step };
        if !x.is_finite() {
            break;
        }

        let observed = ctx.evaluate(x, Phase::Expansion)?;
        if observed.stop {
            return Ok(Outcome::Finished(Status::StoppedByObserver));
        }
        if observed.residual.abs() < config.residual_tol {
            return Ok(Outcome::Finished(Status::Converged));
        }

        lowest = lowest.min(x);
        highest = highest.max(x);

        let sign = Sign::of(observed.residual);
        let anchor = if side_below { below } else { above };
        if let Some(bracket) = Bracket::new((x, sign), anchor) {
            return Ok(Outcome::Bracketed(bracket));
        }

        if side_below {
            below = (x, sign);
        } else {
            above = (x, sign);
            step *= config.expand_factor;
        }
        side_below = !side_below;
    }

    Err(Error::BracketNotFound {
        start: seed,
        left: lowest,
        right: highest,
        evaluations: ctx.iterations(),
    })
}
