//! Mapping from scheme units to canvas pixels.

use super::types::{BoundingBox, Canvas, Point};

/// Uniform scale plus per-axis shift, with an optional vertical flip.
///
/// A scheme point `(x, y)` lands at `x * scale + x_shift` horizontally and at
/// `y * scale + y_shift` vertically, measured from the canvas bottom when
/// `flip_y` is set (scheme y grows upward, image rows grow downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    pub scale: f64,
    pub x_shift: f64,
    pub y_shift: f64,
    pub flip_y: bool,
    /// Canvas height, needed to flip.
    pub height: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x_shift: 0.0,
            y_shift: 0.0,
            flip_y: false,
            height: 0.0,
        }
    }
}

impl AxisTransform {
    pub fn new(scale: f64, x_shift: f64, y_shift: f64) -> Self {
        Self {
            scale,
            x_shift,
            y_shift,
            ..Self::default()
        }
    }

    /// Flip the vertical axis inside a canvas of the given height.
    pub fn flipped(mut self, height: f64) -> Self {
        self.flip_y = true;
        self.height = height;
        self
    }

    pub fn x(&self, x: f64) -> f64 {
        x * self.scale + self.x_shift
    }

    pub fn y(&self, y: f64) -> f64 {
        let y = y * self.scale + self.y_shift;
        if self.flip_y {
            self.height - y
        } else {
            y
        }
    }

    pub fn point(&self, p: Point) -> Point {
        Point::new(self.x(p.x), self.y(p.y))
    }

    /// Stretch `bbox` to fill the canvas, keeping the aspect ratio and
    /// centering the short side.
    ///
    /// Treats glyphs as if they scaled with the drawing; returns `None` for
    /// a box with zero width or height.
    pub fn fit_box(bbox: &BoundingBox, canvas: Canvas) -> Option<Self> {
        if bbox.is_degenerate() {
            return None;
        }
        let scale = (canvas.width / bbox.width()).min(canvas.height / bbox.height());
        let x_shift = 0.5 * (canvas.width - scale * (bbox.max.x + bbox.min.x));
        let y_shift = 0.5 * (canvas.height - scale * (bbox.max.y + bbox.min.y));
        Some(Self::new(scale, x_shift, y_shift).flipped(canvas.height))
    }
}
