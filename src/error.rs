//! Error types for the scheme fitter.
//!
//! This module provides a unified error type [`FitError`] that covers
//! malformed constraint sets, solver self-check failures, scheme fitting
//! outcomes that leave no usable transform, and DSL input errors.

use thiserror::Error;

use crate::scheme::Axis;

/// Result type alias using [`FitError`].
pub type Result<T> = std::result::Result<T, FitError>;

/// Unified error type for all scheme fitting operations.
#[derive(Error, Debug)]
pub enum FitError {
    // ============ Constraint Errors ============
    /// A constraint whose lower bound exceeds its upper bound
    #[error("Invalid constraint #{index}: lower bound {lower} exceeds upper bound {upper}")]
    InvalidConstraint {
        index: usize,
        lower: f64,
        upper: f64,
    },

    /// A constraint with an infinite or NaN coefficient
    #[error("Invalid constraint #{index}: coefficients ({slope}, {lower}, {upper}) must be finite")]
    NonFiniteConstraint {
        index: usize,
        slope: f64,
        lower: f64,
        upper: f64,
    },

    /// The sweep produced a point that does not satisfy the constraint set
    #[error("Solver result (scale {scale:e}, offset {offset:e}) violates constraint #{index}")]
    VerificationFailed {
        scale: f64,
        offset: f64,
        index: usize,
    },

    // ============ Fitting Errors ============
    /// No scale places every element of the scheme inside the canvas
    #[error("Scheme does not fit the canvas along the {axis} axis")]
    Infeasible { axis: Axis },

    /// Neither the scheme nor the configuration bounds the scale
    #[error("Scale is unbounded - set a maximum scale for this scheme")]
    UnboundedScale,

    /// Nothing to place
    #[error("Scheme has no elements")]
    EmptyScheme,

    // ============ DSL Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ I/O Errors ============
    /// Error reading an input file
    #[error("Failed to read input file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FitError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_constraint_message() {
        let err = FitError::InvalidConstraint {
            index: 3,
            lower: 2.0,
            upper: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid constraint #3: lower bound 2 exceeds upper bound 1"
        );
    }

    #[test]
    fn test_infeasible_names_axis() {
        let err = FitError::Infeasible { axis: Axis::Y };
        assert!(err.to_string().contains("y axis"));
    }
}
