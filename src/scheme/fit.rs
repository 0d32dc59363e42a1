//! Fitting a scheme into a canvas with the maximum-scale solver.
//!
//! Anchor positions scale with the drawing while glyphs keep their pixel
//! size. For an anchor at coordinate `c` whose glyph reaches `near` pixels
//! toward the smaller coordinate and `far` pixels toward the larger one,
//! staying inside a canvas of length `L` with margin `m` reads
//!
//! ```text
//! m + near <= c * s + shift <= L - m - far
//! ```
//!
//! which is exactly a [`Constraint`] with slope `c`. Both axes share the
//! scale but have their own shift, so each axis is solved on its own and
//! the smaller maximum scale wins.

use tracing::{debug, warn};

use crate::error::{FitError, Result};
use crate::solver::{all_valid, dx_interval_mid, Constraint, FitSolver, SolverConfig};

use super::diagram::Scheme;
use super::element::GlyphStyle;
use super::transform::AxisTransform;
use super::types::{Axis, BoundingBox, Canvas, Point};

/// Default blank border around the drawing, in pixels.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Configuration for fitting a scheme.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Blank border kept on every side of the canvas.
    pub margin: f64,
    /// Upper limit on the scale; `+inf` leaves it to the geometry.
    pub max_scale: f64,
    /// Flip the vertical axis so scheme y grows upward on the image.
    pub flip_y: bool,
    /// Glyph sizes.
    pub style: GlyphStyle,
    /// Solver settings.
    pub solver: SolverConfig,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            max_scale: f64::INFINITY,
            flip_y: true,
            style: GlyphStyle::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl FitConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Cap the scale, e.g. at `1.0` to never enlarge a small scheme.
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    fn validate(&self, canvas: Canvas) -> Result<()> {
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(FitError::invalid_parameter(
                "canvas",
                format!("size must be positive, got {}x{}", canvas.width, canvas.height),
            ));
        }
        if !(self.margin >= 0.0) {
            return Err(FitError::invalid_parameter(
                "margin",
                format!("must be non-negative, got {}", self.margin),
            ));
        }
        if !(self.max_scale > 0.0) {
            return Err(FitError::invalid_parameter(
                "max_scale",
                format!("must be positive, got {}", self.max_scale),
            ));
        }
        Ok(())
    }
}

/// Result of fitting a scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Transform to apply to every scheme coordinate.
    pub transform: AxisTransform,
    /// Largest scale the x axis alone admits (`+inf` if unbounded).
    pub scale_x: f64,
    /// Largest scale the y axis alone admits (`+inf` if unbounded).
    pub scale_y: f64,
}

impl Placement {
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Canvas position of a scheme point.
    pub fn place(&self, point: Point) -> Point {
        self.transform.point(point)
    }

    /// Pixel box covered by every glyph of the scheme.
    pub fn canvas_bounds(&self, scheme: &Scheme, style: &GlyphStyle) -> BoundingBox {
        let boxes: Vec<BoundingBox> = scheme
            .anchors(style)
            .iter()
            .map(|anchor| {
                let p = self.place(anchor.point);
                let e = anchor.extent;
                // Flipping turns scheme "up" into image "up", i.e. smaller rows.
                let (above, below) = if self.transform.flip_y {
                    (e.up, e.down)
                } else {
                    (e.down, e.up)
                };
                BoundingBox::new(
                    Point::new(p.x - e.left, p.y - above),
                    Point::new(p.x + e.right, p.y + below),
                )
            })
            .collect();
        BoundingBox::unite(&boxes)
    }
}

/// One constraint per anchor along `axis`.
pub fn axis_constraints(
    scheme: &Scheme,
    canvas: Canvas,
    config: &FitConfig,
    axis: Axis,
) -> Vec<Constraint> {
    let length = canvas.along(axis);
    scheme
        .anchors(&config.style)
        .iter()
        .map(|anchor| {
            let (near, far) = anchor.extent.along(axis);
            Constraint::new(
                anchor.point.along(axis),
                config.margin + near,
                length - config.margin - far,
            )
        })
        .collect()
}

/// Find the largest transform that keeps every glyph of `scheme` on the
/// canvas, centering the drawing along the axis with room to spare.
pub fn fit_scheme(scheme: &Scheme, canvas: Canvas, config: &FitConfig) -> Result<Placement> {
    if scheme.is_empty() {
        return Err(FitError::EmptyScheme);
    }
    config.validate(canvas)?;

    let solver = FitSolver::with_config(config.solver);
    let xs = axis_constraints(scheme, canvas, config, Axis::X);
    let ys = axis_constraints(scheme, canvas, config, Axis::Y);

    let scale_x = max_axis_scale(&solver, &xs, Axis::X)?;
    let scale_y = max_axis_scale(&solver, &ys, Axis::Y)?;

    let scale = scale_x.min(scale_y).min(config.max_scale);
    if !scale.is_finite() {
        warn!(elements = scheme.len(), "scheme does not bound the scale");
        return Err(FitError::UnboundedScale);
    }

    let x_shift = dx_interval_mid(&xs, scale);
    let y_shift = dx_interval_mid(&ys, scale);
    debug!(scale, scale_x, scale_y, x_shift, y_shift, "scheme fitted");

    let mut transform = AxisTransform::new(scale, x_shift, y_shift);
    if config.flip_y {
        transform = transform.flipped(canvas.height);
    }

    Ok(Placement {
        transform,
        scale_x,
        scale_y,
    })
}

/// Largest scale one axis admits.
///
/// A glyph wider than the canvas yields a constraint with `lower > upper`;
/// here that only means the scheme cannot fit, so it is reported as an
/// infeasible axis rather than a malformed constraint.
fn max_axis_scale(solver: &FitSolver, constraints: &[Constraint], axis: Axis) -> Result<f64> {
    if !all_valid(constraints) {
        debug!(%axis, "a glyph is larger than the canvas");
        return Err(FitError::Infeasible { axis });
    }
    solver
        .solve(constraints)?
        .max_scale()
        .ok_or(FitError::Infeasible { axis })
}
