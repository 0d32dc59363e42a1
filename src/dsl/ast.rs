//! Parsed form of a scheme description.

use crate::scheme::{Canvas, FitConfig, Scheme};
use crate::solver::{Constraint, SolverConfig};

/// Canvas used when a description does not name one.
pub const DEFAULT_CANVAS: Canvas = Canvas::new(330.0, 240.0);

/// Everything a scheme description can contain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Raw `constraint` lines, in order
    pub constraints: Vec<Constraint>,
    /// Scheme elements, in order
    pub scheme: Scheme,
    /// `.canvas` directive
    pub canvas: Option<Canvas>,
    /// `.margin` directive
    pub margin: Option<f64>,
    /// `.tolerance` directive
    pub tolerance: Option<f64>,
    /// `.max_scale` directive
    pub max_scale: Option<f64>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas named by the document, or [`DEFAULT_CANVAS`].
    pub fn canvas_or_default(&self) -> Canvas {
        self.canvas.unwrap_or(DEFAULT_CANVAS)
    }

    /// Solver configuration with the document's overrides applied.
    pub fn solver_config(&self) -> SolverConfig {
        let config = SolverConfig::new();
        match self.tolerance {
            Some(tolerance) => config.with_tolerance(tolerance),
            None => config,
        }
    }

    /// Fit configuration with the document's overrides applied.
    pub fn fit_config(&self) -> FitConfig {
        let mut config = FitConfig::new().with_solver(self.solver_config());
        if let Some(margin) = self.margin {
            config = config.with_margin(margin);
        }
        if let Some(max_scale) = self.max_scale {
            config = config.with_max_scale(max_scale);
        }
        config
    }
}
