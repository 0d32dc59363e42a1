//! # Scheme Fit
//!
//! Maximum-scale placement of circuit scheme diagrams.
//!
//! This library provides:
//! - A solver for the largest scale `s` at which one offset `dx` satisfies a
//!   set of linear band constraints `lo <= a*s + dx <= hi`
//! - Scheme elements (contacts, groundings, resistors, nodes, wires) and the
//!   translation of a scheme plus a canvas into solver constraints
//! - A small text format for describing constraint sets and schemes
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`solver`] - Constraints, feasibility predicates and the envelope sweep
//! - [`scheme`] - Scheme elements, bounding boxes and canvas fitting
//! - [`dsl`] - Parser for the scheme description language
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! schemefit solve constraints.fit
//! schemefit fit bridge.fit --width 640 --height 480
//! ```
//!
//! ### Library
//!
//! ```
//! use scheme_fit::solver::{solve, Constraint, ScaleFit};
//!
//! let set = [
//!     Constraint::new(0.0, 0.0, 10.0),
//!     Constraint::new(1.0, 0.0, 4.0),
//! ];
//! assert_eq!(solve(&set).unwrap(), ScaleFit::Bounded { scale: 4.0, offset: 0.0 });
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { solve_flat } from 'scheme_fit';
//!
//! const [scale, offset] = solve_flat(new Float64Array([0, 0, 10, 1, 0, 4]));
//! ```
//!
//! ## Solving Method
//!
//! At a fixed scale every constraint admits an interval of offsets; the
//! problem is feasible where the highest lower bound stays below the lowest
//! upper bound. The solver sweeps the scale upward from zero, following the
//! binding lower-bound line and switching whenever a steeper one overtakes
//! it, until some upper-bound line crosses below it. That crossing is the
//! maximum scale. The sweep is `O(n²)` in the worst case, which is ample for
//! diagrams with tens of elements.

pub mod dsl;
pub mod error;
pub mod scheme;
pub mod solver;

// Re-export main types for convenience
pub use error::{FitError, Result};
pub use scheme::{fit_scheme, FitConfig, Placement, Scheme};
pub use solver::{solve, Constraint, FitSolver, ScaleFit};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchemeFit;
