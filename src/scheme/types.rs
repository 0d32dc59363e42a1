//! Geometric value types shared by scheme elements and the fitter.

use std::fmt;

/// Coordinate axis of the scheme plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A point in scheme units (or canvas pixels, after transformation).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Zero-size box at a single point.
    pub const fn at(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the box has zero width or height.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Smallest box containing all boxes; an empty slice gives the zero box.
    pub fn unite(boxes: &[BoundingBox]) -> BoundingBox {
        match boxes.split_first() {
            Some((first, rest)) => rest.iter().fold(*first, |acc, b| acc.union(b)),
            None => BoundingBox::default(),
        }
    }

    /// Check whether `other` lies inside this box, allowing `tolerance` slack.
    pub fn contains(&self, other: &BoundingBox, tolerance: f64) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
    }
}

/// Size of a glyph around its anchor, in canvas pixels.
///
/// `down` and `up` follow the scheme's y axis, so `down` is the part of the
/// glyph at smaller scheme y regardless of how the canvas is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub down: f64,
    pub up: f64,
}

impl Extent {
    /// Same extent on all four sides.
    pub const fn uniform(half: f64) -> Self {
        Self {
            left: half,
            right: half,
            down: half,
            up: half,
        }
    }

    /// Centered extent of a `width` x `height` glyph.
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            left: 0.5 * width,
            right: 0.5 * width,
            down: 0.5 * height,
            up: 0.5 * height,
        }
    }

    /// Grow every side by `amount`.
    pub fn grow(self, amount: f64) -> Self {
        Self {
            left: self.left + amount,
            right: self.right + amount,
            down: self.down + amount,
            up: self.up + amount,
        }
    }

    /// Extent toward the smaller and larger coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.down, self.up),
        }
    }
}

/// Target drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Length of the canvas along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(Point::new(0.0, 0.0), Point::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unite_empty() {
        assert_eq!(BoundingBox::unite(&[]), BoundingBox::default());
    }

    #[test]
    fn test_unite_boxes() {
        let boxes = [
            BoundingBox::new(Point::new(0.0, 1.0), Point::new(2.0, 3.0)),
            BoundingBox::new(Point::new(-1.0, 2.0), Point::new(1.0, 5.0)),
            BoundingBox::at(Point::new(4.0, -2.0)),
        ];
        let united = BoundingBox::unite(&boxes);
        assert_eq!(united.min, Point::new(-1.0, -2.0));
        assert_eq!(united.max, Point::new(4.0, 5.0));
        assert_eq!(united.width(), 5.0);
        assert_eq!(united.height(), 7.0);
    }

    #[test]
    fn test_degenerate_and_contains() {
        let point = BoundingBox::at(Point::new(1.0, 1.0));
        assert!(point.is_degenerate());

        let canvas = Canvas::new(10.0, 5.0).bounds();
        assert!(!canvas.is_degenerate());
        assert!(canvas.contains(&point, 0.0));
        assert!(!canvas.contains(&BoundingBox::at(Point::new(10.5, 1.0)), 0.0));
        assert!(canvas.contains(&BoundingBox::at(Point::new(10.5, 1.0)), 1.0));
    }

    #[test]
    fn test_extent_along_axis() {
        let e = Extent::centered(10.0, 4.0).grow(1.0);
        assert_eq!(e.along(Axis::X), (6.0, 6.0));
        assert_eq!(e.along(Axis::Y), (3.0, 3.0));
    }
}
