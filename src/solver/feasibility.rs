//! Set-level predicates and offset intervals.

use crate::error::{FitError, Result};

use super::Constraint;

/// Check that every constraint in the set has `lower <= upper`.
pub fn all_valid(constraints: &[Constraint]) -> bool {
    constraints.iter().all(Constraint::is_valid)
}

/// Like [`all_valid`], but names the first offending constraint. Infinite
/// or NaN coefficients are rejected too, since the sweep divides by slope
/// differences and subtracts bounds.
pub fn validate(constraints: &[Constraint]) -> Result<()> {
    for (index, c) in constraints.iter().enumerate() {
        if !c.is_finite() {
            return Err(FitError::NonFiniteConstraint {
                index,
                slope: c.slope(),
                lower: c.lower(),
                upper: c.upper(),
            });
        }
        if !c.is_valid() {
            return Err(FitError::InvalidConstraint {
                index,
                lower: c.lower(),
                upper: c.upper(),
            });
        }
    }
    Ok(())
}

/// Check that the tightest lower bound does not exceed the tightest upper
/// bound, i.e. the set is satisfiable at `s = 0`.
///
/// An empty set has nothing to satisfy and is reported as `false`, so that
/// [`solve`](super::solve) treats it as having no solution.
pub fn has_finite_feasible_set(constraints: &[Constraint]) -> bool {
    if constraints.is_empty() {
        return false;
    }
    let max_lower = constraints
        .iter()
        .map(Constraint::lower)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_upper = constraints
        .iter()
        .map(Constraint::upper)
        .fold(f64::INFINITY, f64::min);
    max_lower <= min_upper
}

/// Check whether all constraints share the same slope.
///
/// Parallel bands never narrow as `s` grows, so the scale has no maximum.
/// Empty and single-constraint sets qualify trivially.
pub fn has_unbounded_scale(constraints: &[Constraint]) -> bool {
    match constraints.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.slope() == first.slope()),
        None => true,
    }
}

/// Check `(s, dx)` against every constraint with the default tolerance.
pub fn verify(constraints: &[Constraint], s: f64, dx: f64) -> bool {
    constraints.iter().all(|c| c.verify(s, dx))
}

/// Exact range of admissible offsets at a fixed scale.
///
/// Returns `(max bottom(s), min top(s))`. The range is empty when the first
/// element exceeds the second; an empty set yields `(-inf, +inf)`.
pub fn dx_interval(constraints: &[Constraint], s: f64) -> (f64, f64) {
    constraints
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(lo, hi), c| {
            let (bottom, top) = c.interval(s);
            (lo.max(bottom), hi.min(top))
        })
}

/// Midpoint of [`dx_interval`], the most centred offset at scale `s`.
pub fn dx_interval_mid(constraints: &[Constraint], s: f64) -> f64 {
    let (lo, hi) = dx_interval(constraints, s);
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> Vec<Constraint> {
        vec![
            Constraint::new(-1.0, -5.0, 2.0),
            Constraint::new(-1.0 / 3.0, -2.0, 5.0),
            Constraint::new(-1.0 / 2.0, -4.0, 3.0),
            Constraint::new(-3.0 / 2.0, -7.0, 1.0),
        ]
    }

    #[test]
    fn test_all_valid() {
        assert!(all_valid(&[]));
        assert!(all_valid(&table()));

        let mut bad = table();
        bad.push(Constraint::new(0.0, 1.0, 0.0));
        assert!(!all_valid(&bad));
    }

    #[test]
    fn test_validate_reports_first_offender() {
        let set = vec![
            Constraint::new(0.0, 0.0, 1.0),
            Constraint::new(1.0, 5.0, 4.0),
            Constraint::new(2.0, 9.0, 3.0),
        ];
        match validate(&set) {
            Err(FitError::InvalidConstraint { index, lower, upper }) => {
                assert_eq!(index, 1);
                assert_eq!(lower, 5.0);
                assert_eq!(upper, 4.0);
            }
            other => panic!("expected invalid constraint, got {:?}", other),
        }
        assert!(validate(&table()).is_ok());
    }

    #[test]
    fn test_validate_rejects_infinite_bounds() {
        let set = vec![
            Constraint::new(0.0, 0.0, f64::INFINITY),
            Constraint::new(1.0, 0.0, f64::INFINITY),
        ];
        assert!(all_valid(&set));
        assert!(matches!(
            validate(&set),
            Err(FitError::NonFiniteConstraint { index: 0, .. })
        ));

        let nan_slope = vec![Constraint::new(0.0, 0.0, 1.0), Constraint::new(f64::NAN, 0.0, 1.0)];
        assert!(matches!(
            validate(&nan_slope),
            Err(FitError::NonFiniteConstraint { index: 1, .. })
        ));
    }

    #[test]
    fn test_feasible_set() {
        assert!(!has_finite_feasible_set(&[]));
        assert!(has_finite_feasible_set(&table()));
        assert!(has_finite_feasible_set(&[
            Constraint::new(1.0, 0.0, 2.0),
            Constraint::new(-1.0, 2.0, 3.0),
        ]));
        assert!(!has_finite_feasible_set(&[
            Constraint::new(1.0, 0.0, 1.0),
            Constraint::new(-1.0, 2.0, 3.0),
        ]));
    }

    #[test]
    fn test_unbounded_scale() {
        assert!(has_unbounded_scale(&[]));
        assert!(has_unbounded_scale(&[Constraint::new(1.0, 2.0, 3.0)]));
        assert!(has_unbounded_scale(&[
            Constraint::new(0.5, 0.0, 3.0),
            Constraint::new(0.5, -1.0, 1.0),
        ]));
        assert!(!has_unbounded_scale(&table()));
    }

    #[test]
    fn test_dx_interval() {
        let set = table();
        let (lo, hi) = dx_interval(&set, 0.0);
        assert_relative_eq!(lo, -2.0);
        assert_relative_eq!(hi, 1.0);
        assert_relative_eq!(dx_interval_mid(&set, 0.0), -0.5);

        let (lo, hi) = dx_interval(&set, 10.0);
        assert_relative_eq!(lo, 8.0);
        assert_relative_eq!(hi, 8.0);

        let (lo, hi) = dx_interval(&set, 11.0);
        assert!(lo > hi);
    }

    #[test]
    fn test_dx_interval_empty_set() {
        assert_eq!(dx_interval(&[], 4.0), (f64::NEG_INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_verify_set() {
        let set = table();
        assert!(verify(&set, 10.0, 8.0));
        assert!(!verify(&set, 10.0, 8.1));
        assert!(verify(&[], 1.0, 1.0));
    }
}
