//! Maximum-scale search over the envelope of constraint bounds.
//!
//! Every constraint contributes two lines in the `(s, dx)` plane, its
//! bottom branch `-a·s + lo` and its top branch `-a·s + hi`. The admissible
//! offsets at a scale are the slab between the highest bottom line and the
//! lowest top line. Starting from `s = 0`, the sweep follows the binding
//! bottom line and, at each step, looks for the nearest scale where either
//!
//! - a bottom line with a smaller slope overtakes the binding one, which
//!   then becomes the new binding constraint, or
//! - a top line with a larger slope dips below the binding bottom line,
//!   past which no offset is admissible.
//!
//! The first event of the second kind is the maximum scale. Each switch
//! strictly lowers the slope of the binding constraint, so a set of `n`
//! constraints needs at most `n - 1` switches and `O(n²)` work overall.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use tracing::{debug, error, trace};

use crate::error::{FitError, Result};

use super::feasibility::{has_finite_feasible_set, has_unbounded_scale, validate};
use super::{Constraint, DEFAULT_TOLERANCE};

/// Outcome of a maximum-scale search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFit {
    /// No `(s, dx)` satisfies the set (or the set is empty).
    Infeasible,
    /// Every slope is identical, so any scale is admissible.
    Unbounded,
    /// Largest admissible scale and the offset that attains it.
    Bounded { scale: f64, offset: f64 },
}

impl ScaleFit {
    /// Sentinel pair form: `(0, 0)` when infeasible, `(+inf, 0)` when
    /// unbounded, `(scale, offset)` otherwise.
    pub fn as_pair(&self) -> (f64, f64) {
        match *self {
            ScaleFit::Infeasible => (0.0, 0.0),
            ScaleFit::Unbounded => (f64::INFINITY, 0.0),
            ScaleFit::Bounded { scale, offset } => (scale, offset),
        }
    }

    /// Maximum scale, `+inf` when unbounded and `None` when infeasible.
    pub fn max_scale(&self) -> Option<f64> {
        match *self {
            ScaleFit::Infeasible => None,
            ScaleFit::Unbounded => Some(f64::INFINITY),
            ScaleFit::Bounded { scale, .. } => Some(scale),
        }
    }

    /// Whether some scale admits an offset.
    pub fn is_feasible(&self) -> bool {
        !matches!(self, ScaleFit::Infeasible)
    }
}

/// Configuration for the solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Absolute tolerance used when verifying a point against the set.
    pub tolerance: f64,
    /// Verify every bounded result before returning it.
    pub verify_result: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            verify_result: true,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verification tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable the post-solve verification.
    pub fn with_verify_result(mut self, verify_result: bool) -> Self {
        self.verify_result = verify_result;
        self
    }

    /// Reject settings that would make verification meaningless.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance >= 0.0) {
            return Err(FitError::invalid_parameter(
                "tolerance",
                format!("must be non-negative, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// Maximum-scale solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitSolver {
    config: SolverConfig,
}

/// One iteration of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    /// A bottom line with a smaller slope takes over as binding constraint.
    Switch(usize),
    /// The top line of `crossing` meets the binding bottom line at `scale`.
    Stop { scale: f64, crossing: usize },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    scale: f64,
    index: usize,
    stop: bool,
}

impl FitSolver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with a custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check `(s, dx)` against every constraint with the configured tolerance.
    pub fn verify(&self, constraints: &[Constraint], s: f64, dx: f64) -> bool {
        self.first_violation(constraints, s, dx).is_none()
    }

    /// Find the largest scale for which one offset satisfies every constraint.
    ///
    /// Returns an error if the configuration or a constraint is invalid, or
    /// if the self check is enabled and the bounded result fails
    /// verification.
    pub fn solve(&self, constraints: &[Constraint]) -> Result<ScaleFit> {
        self.config.validate()?;
        validate(constraints)?;

        if !has_finite_feasible_set(constraints) {
            debug!(constraints = constraints.len(), "constraint set is infeasible");
            return Ok(ScaleFit::Infeasible);
        }
        if has_unbounded_scale(constraints) {
            debug!(constraints = constraints.len(), "all slopes equal, scale is unbounded");
            return Ok(ScaleFit::Unbounded);
        }

        let seed = seed_index(constraints);
        debug!(constraints = constraints.len(), seed, "starting envelope sweep");

        let outcome = (0..constraints.len()).try_fold(seed, |active, _| {
            match next_step(constraints, active) {
                Some(Step::Switch(next)) => {
                    trace!(from = active, to = next, "binding constraint switched");
                    ControlFlow::Continue(next)
                }
                Some(Step::Stop { scale, crossing }) => {
                    ControlFlow::Break(Some((scale, constraints[crossing].top(scale))))
                }
                None => ControlFlow::Break(None),
            }
        });

        // Falling out of the fold would take more switches than there are
        // distinct slopes; treat it like a sweep with no stopping event.
        let (scale, offset) = match outcome {
            ControlFlow::Break(Some(point)) => point,
            ControlFlow::Break(None) | ControlFlow::Continue(_) => {
                return Ok(ScaleFit::Unbounded);
            }
        };
        debug!(scale, offset, "sweep stopped");

        if self.config.verify_result {
            self.check(constraints, scale, offset)?;
        }
        Ok(ScaleFit::Bounded { scale, offset })
    }

    fn check(&self, constraints: &[Constraint], scale: f64, offset: f64) -> Result<()> {
        match self.first_violation(constraints, scale, offset) {
            Some(index) => {
                error!(scale, offset, index, "solver result violates a constraint");
                Err(FitError::VerificationFailed {
                    scale,
                    offset,
                    index,
                })
            }
            None => Ok(()),
        }
    }

    fn first_violation(&self, constraints: &[Constraint], s: f64, dx: f64) -> Option<usize> {
        constraints
            .iter()
            .position(|c| !c.verify_with_tolerance(s, dx, self.config.tolerance))
    }
}

/// Solve with the default configuration.
pub fn solve(constraints: &[Constraint]) -> Result<ScaleFit> {
    FitSolver::new().solve(constraints)
}

/// Binding constraint at `s = 0`: the largest lower bound, then the
/// smallest slope so it also binds just after zero.
fn seed_index(constraints: &[Constraint]) -> usize {
    constraints
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| b.lower().total_cmp(&a.lower()).then_with(|| a.total_cmp(b)))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn next_step(constraints: &[Constraint], active: usize) -> Option<Step> {
    let binding = &constraints[active];

    constraints
        .iter()
        .enumerate()
        .filter(|&(index, c)| index != active && c.slope() != binding.slope())
        .map(|(index, c)| {
            if c.slope() < binding.slope() {
                Candidate {
                    scale: (binding.lower() - c.lower()) / (binding.slope() - c.slope()),
                    index,
                    stop: false,
                }
            } else {
                Candidate {
                    scale: (c.upper() - binding.lower()) / (c.slope() - binding.slope()),
                    index,
                    stop: true,
                }
            }
        })
        .min_by(|a, b| compare_candidates(constraints, a, b))
        .map(|best| {
            if best.stop {
                Step::Stop {
                    scale: best.scale,
                    crossing: best.index,
                }
            } else {
                Step::Switch(best.index)
            }
        })
}

/// Nearest scale first. On equal scales a stop wins over a switch, and
/// remaining ties go to the smaller constraint in `(slope, lower, upper)`
/// order, which for switches picks the steepest rising bottom line.
fn compare_candidates(constraints: &[Constraint], a: &Candidate, b: &Candidate) -> Ordering {
    a.scale
        .total_cmp(&b.scale)
        .then_with(|| b.stop.cmp(&a.stop))
        .then_with(|| constraints[a.index].total_cmp(&constraints[b.index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{dx_interval, verify};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn table() -> Vec<Constraint> {
        vec![
            Constraint::new(-1.0, -5.0, 2.0),
            Constraint::new(-1.0 / 3.0, -2.0, 5.0),
            Constraint::new(-1.0 / 2.0, -4.0, 3.0),
            Constraint::new(-3.0 / 2.0, -7.0, 1.0),
        ]
    }

    fn random_constraints(rng: &mut StdRng, n: usize) -> Vec<Constraint> {
        (0..n)
            .map(|_| {
                Constraint::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-100.0..0.0),
                    1000.0 + rng.gen_range(-100.0..0.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_set() {
        let fit = solve(&[]).unwrap();
        assert_eq!(fit, ScaleFit::Infeasible);
        assert_eq!(fit.as_pair(), (0.0, 0.0));
    }

    #[test]
    fn test_single_constraint_is_unbounded() {
        let fit = solve(&[Constraint::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(fit, ScaleFit::Unbounded);
        assert_eq!(fit.as_pair(), (f64::INFINITY, 0.0));
    }

    #[test]
    fn test_uniform_slope_is_unbounded() {
        let set = vec![
            Constraint::new(-2.0, -3.0, 1.0),
            Constraint::new(-2.0, 0.0, 4.0),
            Constraint::new(-2.0, -1.0, 0.5),
        ];
        assert_eq!(solve(&set).unwrap().max_scale(), Some(f64::INFINITY));
    }

    #[test]
    fn test_contradictory_set_is_infeasible() {
        let set = vec![
            Constraint::new(1.0, 0.0, 1.0),
            Constraint::new(-1.0, 2.0, 3.0),
        ];
        let fit = solve(&set).unwrap();
        assert!(!fit.is_feasible());
        assert_eq!(fit.as_pair(), (0.0, 0.0));
    }

    #[test]
    fn test_invalid_constraint_rejected() {
        let mut set = table();
        set.push(Constraint::new(0.0, 2.0, 1.0));
        assert!(matches!(
            solve(&set),
            Err(FitError::InvalidConstraint { index: 4, .. })
        ));
    }

    #[test]
    fn test_table() {
        let set = table();
        let (s, dx) = solve(&set).unwrap().as_pair();
        assert_relative_eq!(s, 10.0, epsilon = 1e-12);
        assert_relative_eq!(dx, 8.0, epsilon = 1e-12);
        assert!(verify(&set, s, dx));

        let (lo, hi) = dx_interval(&set, s);
        assert_abs_diff_eq!(hi - lo, 0.0, epsilon = 1e-12);

        for delta in [1e-6, 1e-3, 1.0] {
            let (lo, hi) = dx_interval(&set, s + delta);
            assert!(lo > hi, "scale {} should be infeasible", s + delta);
        }
    }

    #[test]
    fn test_two_constraints_meeting() {
        // dx in [0, 10] at every scale, and s + dx in [0, 4]
        let set = vec![
            Constraint::new(0.0, 0.0, 10.0),
            Constraint::new(1.0, 0.0, 4.0),
        ];
        let (s, dx) = solve(&set).unwrap().as_pair();
        assert_relative_eq!(s, 4.0);
        assert_relative_eq!(dx, 0.0);
    }

    #[test]
    fn test_zero_scale_is_distinct_from_infeasible() {
        // Feasible only at s = 0
        let set = vec![
            Constraint::new(1.0, 0.0, 0.0),
            Constraint::new(-1.0, 0.0, 0.0),
        ];
        let fit = solve(&set).unwrap();
        assert!(fit.is_feasible());
        assert_eq!(fit.max_scale(), Some(0.0));
    }

    #[test]
    fn test_tied_candidates_are_order_independent() {
        // Both candidates cross the seed at s = 1
        let set = vec![
            Constraint::new(1.0, 0.0, 10.0),
            Constraint::new(0.0, -1.0, 1.0),
            Constraint::new(-1.0, -2.0, 10.0),
            Constraint::new(3.0, -5.0, 3.0),
        ];
        let expected = solve(&set).unwrap().as_pair();

        let mut reversed = set.clone();
        reversed.reverse();
        let actual = solve(&reversed).unwrap().as_pair();
        assert_eq!(expected.0.to_bits(), actual.0.to_bits());
        assert_eq!(expected.1.to_bits(), actual.1.to_bits());
        assert!(verify(&set, expected.0, expected.1));
    }

    #[test]
    fn test_verification_can_be_disabled() {
        let solver = FitSolver::with_config(SolverConfig::new().with_verify_result(false));
        assert!(!solver.config().verify_result);
        let fit = solver.solve(&table()).unwrap();
        assert!(matches!(fit, ScaleFit::Bounded { .. }));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = SolverConfig::new().with_tolerance(-1e-3);
        assert!(config.validate().is_err());

        let solver = FitSolver::with_config(config);
        match solver.solve(&table()) {
            Err(FitError::InvalidParameter { param, .. }) => assert_eq!(param, "tolerance"),
            other => panic!("expected invalid tolerance, got {:?}", other),
        }

        let nan = FitSolver::with_config(SolverConfig::new().with_tolerance(f64::NAN));
        assert!(matches!(
            nan.solve(&table()),
            Err(FitError::InvalidParameter { .. })
        ));
        assert!(SolverConfig::new().with_tolerance(0.0).validate().is_ok());
    }

    #[test]
    fn test_check_reports_violated_constraint() {
        let solver = FitSolver::new();
        let set = table();
        assert!(solver.check(&set, 10.0, 8.0).is_ok());

        // At s = 10 the second constraint allows dx up to 5 + 10/3
        match solver.check(&set, 10.0, 9.0) {
            Err(FitError::VerificationFailed {
                scale,
                offset,
                index,
            }) => {
                assert_eq!(scale, 10.0);
                assert_eq!(offset, 9.0);
                assert_eq!(index, 1);
            }
            other => panic!("expected verification failure, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_bounds_rejected() {
        let set = vec![
            Constraint::new(0.0, 0.0, f64::INFINITY),
            Constraint::new(1.0, 0.0, f64::INFINITY),
        ];
        assert!(matches!(
            solve(&set),
            Err(FitError::NonFiniteConstraint { index: 0, .. })
        ));
    }

    #[test]
    fn test_random_stress() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let mut set = random_constraints(&mut rng, 1000);
            let (s, dx) = solve(&set).unwrap().as_pair();
            assert!(s.is_finite());
            assert!(verify(&set, s, dx));

            let (lo, hi) = dx_interval(&set, s);
            assert_abs_diff_eq!(hi - lo, 0.0, epsilon = 1e-9);

            let again = solve(&set).unwrap().as_pair();
            assert_eq!(s.to_bits(), again.0.to_bits());
            assert_eq!(dx.to_bits(), again.1.to_bits());

            set.shuffle(&mut rng);
            let shuffled = solve(&set).unwrap().as_pair();
            assert_eq!(s.to_bits(), shuffled.0.to_bits());
            assert_eq!(dx.to_bits(), shuffled.1.to_bits());
        }
    }
}
