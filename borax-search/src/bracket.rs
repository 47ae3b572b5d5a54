use crate::Error;

/// The sign of a residual for bracket bookkeeping.
///
/// A residual of exactly zero counts as positive, though in practice a zero
/// residual converges before any sign logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds for a caller-supplied bracket.
///
/// Validation happens here, before any evaluator call, so a malformed bracket
/// never costs an expensive evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;

        if !left.is_finite() {
            return Err(Error::NonFiniteBracket { value: left });
        }
        if !right.is_finite() {
            return Err(Error::NonFiniteBracket { value: right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(Error::ZeroWidthBracket { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(crate) fn left(&self) -> f64 {
        self.left
    }

    pub(crate) fn right(&self) -> f64 {
        self.right
    }
}

/// A straddling bracket: ordered bounds plus the residual sign at each bound.
///
/// Invariant: the two signs differ for the bracket's whole lifetime, so the
/// interval always contains a sign change of the residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
    right_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from two endpoints with known residual signs.
    ///
    /// Returns `None` if the signs match, i.e. the points do not straddle.
    pub(crate) fn new(a: (f64, Sign), b: (f64, Sign)) -> Option<Self> {
        let ((left, left_sign), (right, right_sign)) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        if left_sign == right_sign {
            return None;
        }

        Some(Self {
            left,
            right,
            left_sign,
            right_sign,
        })
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if the guess lies strictly inside the bracket.
    pub(crate) fn contains_interior(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Returns true if the bracket is narrower than the configured floor.
    ///
    /// A bracket below the floor that still fails the residual test points at
    /// a non-monotonic evaluator or noise above the tolerance.
    pub(crate) fn is_below_floor(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        self.width() <= x_abs_tol + x_rel_tol * self.midpoint().abs()
    }

    /// Shrinks the bracket using a new interior point and its residual sign.
    ///
    /// The endpoint whose sign matches is replaced, so the straddle invariant
    /// is preserved.
    pub(crate) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}
