//! Linear band constraint on a (scale, offset) pair.

use std::cmp::Ordering;
use std::fmt;

use super::DEFAULT_TOLERANCE;

/// The requirement `lower <= slope * s + dx <= upper`.
///
/// `s` is the scale shared by every constraint in a set and `dx` the offset
/// shared along one axis. Construction does not validate the bounds; a
/// constraint with `lower > upper` can be built and is reported by
/// [`Constraint::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    slope: f64,
    lower: f64,
    upper: f64,
}

impl Constraint {
    /// Create a constraint `lower <= slope * s + dx <= upper`.
    pub const fn new(slope: f64, lower: f64, upper: f64) -> Self {
        Self {
            slope,
            lower,
            upper,
        }
    }

    /// Coefficient of the scale.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Lower bound of `slope * s + dx`.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of `slope * s + dx`.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Check that the band is non-empty.
    pub fn is_valid(&self) -> bool {
        self.lower <= self.upper
    }

    /// Check that slope and both bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.lower.is_finite() && self.upper.is_finite()
    }

    /// Smallest admissible offset at scale `s`.
    pub fn bottom(&self, s: f64) -> f64 {
        -self.slope * s + self.lower
    }

    /// Largest admissible offset at scale `s`.
    pub fn top(&self, s: f64) -> f64 {
        -self.slope * s + self.upper
    }

    /// Admissible offsets at scale `s` as `(bottom, top)`.
    pub fn interval(&self, s: f64) -> (f64, f64) {
        (self.bottom(s), self.top(s))
    }

    /// Check `(s, dx)` against the band with the default tolerance.
    pub fn verify(&self, s: f64, dx: f64) -> bool {
        self.verify_with_tolerance(s, dx, DEFAULT_TOLERANCE)
    }

    /// Check `(s, dx)` against the band widened by `tolerance` on both sides.
    pub fn verify_with_tolerance(&self, s: f64, dx: f64, tolerance: f64) -> bool {
        let value = self.slope * s + dx;
        self.upper + tolerance >= value && value >= self.lower - tolerance
    }

    /// Total order on `(slope, lower, upper)`, used to break ties between
    /// otherwise equivalent sweep candidates.
    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        self.slope
            .total_cmp(&other.slope)
            .then_with(|| self.lower.total_cmp(&other.lower))
            .then_with(|| self.upper.total_cmp(&other.upper))
    }
}

impl From<(f64, f64, f64)> for Constraint {
    fn from((slope, lower, upper): (f64, f64, f64)) -> Self {
        Self::new(slope, lower, upper)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.slope, self.lower, self.upper)
    }
}
