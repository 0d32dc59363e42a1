//! Maximum-scale solver.
//!
//! This module provides the numerical engine for fitting a scheme.
//!
//! ## Problem
//!
//! Each [`Constraint`] bounds a shared offset `dx` as a linear function of a
//! shared scale `s`:
//!
//! ```text
//! lo_i <= a_i * s + dx <= hi_i        for every constraint i
//! ```
//!
//! [`solve`] finds the largest `s` for which some `dx` satisfies every
//! constraint, together with that `dx`. The outcome is a [`ScaleFit`]:
//!
//! - `Infeasible` - the set is empty or contradictory at `s = 0`
//! - `Unbounded` - every slope is identical, any scale works
//! - `Bounded { scale, offset }` - the maximum and an offset attaining it
//!
//! Invalid constraints (`lo > hi`) are rejected with an error before any
//! search. Once a scale is chosen, [`dx_interval`] and [`dx_interval_mid`]
//! give the full range of admissible offsets and its centre.

mod constraint;
mod feasibility;
mod sweep;

pub use constraint::Constraint;
pub use feasibility::{
    all_valid, dx_interval, dx_interval_mid, has_finite_feasible_set, has_unbounded_scale,
    validate, verify,
};
pub use sweep::{solve, FitSolver, ScaleFit, SolverConfig};

/// Absolute tolerance for checking a point against a constraint.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;
