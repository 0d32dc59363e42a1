//! Scheme elements and their glyph geometry.
//!
//! Element positions are in scheme units and scale with the drawing. Glyphs
//! (the contact circle, the grounding bars, the resistor body) keep a fixed
//! size in canvas pixels, described by [`GlyphStyle`].

use std::fmt;

use super::types::{BoundingBox, Extent, Point};

/// Diameter of a contact circle.
pub const CONTACT_SIZE: f64 = 50.0;
/// Width of the widest grounding bar.
pub const GROUNDING_WIDTH: f64 = 100.0;
/// Distance from the grounding anchor to its lowest bar.
pub const GROUNDING_HEIGHT: f64 = 60.0;
/// Length of a resistor body along its orientation.
pub const RESISTOR_LENGTH: f64 = 50.0;
/// Width of a resistor body across its orientation.
pub const RESISTOR_WIDTH: f64 = 20.0;
/// Radius of a junction dot.
pub const NODE_RADIUS: f64 = 6.0;
/// Stroke width of every outline and wire.
pub const LINE_WIDTH: f64 = 6.0;

/// Pixel sizes of the element glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub contact_size: f64,
    pub grounding_width: f64,
    pub grounding_height: f64,
    pub resistor_length: f64,
    pub resistor_width: f64,
    pub node_radius: f64,
    pub line_width: f64,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            contact_size: CONTACT_SIZE,
            grounding_width: GROUNDING_WIDTH,
            grounding_height: GROUNDING_HEIGHT,
            resistor_length: RESISTOR_LENGTH,
            resistor_width: RESISTOR_WIDTH,
            node_radius: NODE_RADIUS,
            line_width: LINE_WIDTH,
        }
    }
}

/// Direction of a two-terminal element's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A point that must land on the canvas together with the glyph around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub point: Point,
    pub extent: Extent,
}

/// A scheme element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Terminal drawn as a crossed circle.
    Contact { at: Point },
    /// Ground symbol hanging below its anchor.
    Grounding { at: Point },
    /// Resistor body centered on `at`.
    Resistor { at: Point, orientation: Orientation },
    /// Junction dot.
    Node { at: Point },
    /// Polyline through `points`.
    Wire { points: Vec<Point> },
}

impl Element {
    pub fn contact(x: f64, y: f64) -> Self {
        Element::Contact { at: Point::new(x, y) }
    }

    pub fn grounding(x: f64, y: f64) -> Self {
        Element::Grounding { at: Point::new(x, y) }
    }

    pub fn resistor(x: f64, y: f64, orientation: Orientation) -> Self {
        Element::Resistor {
            at: Point::new(x, y),
            orientation,
        }
    }

    pub fn node(x: f64, y: f64) -> Self {
        Element::Node { at: Point::new(x, y) }
    }

    pub fn wire(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Element::Wire {
            points: points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        }
    }

    /// Short lowercase name of the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Contact { .. } => "contact",
            Element::Grounding { .. } => "ground",
            Element::Resistor { .. } => "resistor",
            Element::Node { .. } => "node",
            Element::Wire { .. } => "wire",
        }
    }

    /// Anchor points with the glyph extent each one carries.
    pub fn anchors(&self, style: &GlyphStyle) -> Vec<Anchor> {
        let stroke = 0.5 * style.line_width;
        match self {
            Element::Contact { at } => vec![Anchor {
                point: *at,
                extent: Extent::uniform(0.5 * style.contact_size).grow(stroke),
            }],
            Element::Grounding { at } => vec![Anchor {
                point: *at,
                extent: Extent {
                    left: 0.5 * style.grounding_width,
                    right: 0.5 * style.grounding_width,
                    down: style.grounding_height,
                    up: 0.0,
                }
                .grow(stroke),
            }],
            Element::Resistor { at, orientation } => {
                let extent = match orientation {
                    Orientation::Horizontal => {
                        Extent::centered(style.resistor_length, style.resistor_width)
                    }
                    Orientation::Vertical => {
                        Extent::centered(style.resistor_width, style.resistor_length)
                    }
                };
                vec![Anchor {
                    point: *at,
                    extent: extent.grow(stroke),
                }]
            }
            Element::Node { at } => vec![Anchor {
                point: *at,
                extent: Extent::uniform(style.node_radius),
            }],
            Element::Wire { points } => points
                .iter()
                .map(|p| Anchor {
                    point: *p,
                    extent: Extent::uniform(stroke),
                })
                .collect(),
        }
    }

    /// Box around the element's anchor positions, in scheme units.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Element::Contact { at }
            | Element::Grounding { at }
            | Element::Resistor { at, .. }
            | Element::Node { at } => BoundingBox::at(*at),
            Element::Wire { points } => {
                let boxes: Vec<BoundingBox> = points.iter().copied().map(BoundingBox::at).collect();
                BoundingBox::unite(&boxes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_anchor() {
        let anchors = Element::contact(1.0, 2.0).anchors(&GlyphStyle::default());
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].point, Point::new(1.0, 2.0));
        assert_eq!(anchors[0].extent, Extent::uniform(28.0));
    }

    #[test]
    fn test_grounding_hangs_below() {
        let anchors = Element::grounding(0.0, 0.0).anchors(&GlyphStyle::default());
        let extent = anchors[0].extent;
        assert_eq!(extent.down, 63.0);
        assert_eq!(extent.up, 3.0);
        assert_eq!(extent.left, 53.0);
    }

    #[test]
    fn test_resistor_orientation_swaps_extent() {
        let style = GlyphStyle::default();
        let h = Element::resistor(0.0, 0.0, Orientation::Horizontal).anchors(&style)[0].extent;
        let v = Element::resistor(0.0, 0.0, Orientation::Vertical).anchors(&style)[0].extent;
        assert_eq!(h.left, v.down);
        assert_eq!(h.up, v.right);
        assert_eq!(h.left, 28.0);
    }

    #[test]
    fn test_wire_anchor_per_point() {
        let wire = Element::wire([(-450.0, 0.0), (-450.0, 900.0), (1350.0, 900.0)]);
        assert_eq!(wire.anchors(&GlyphStyle::default()).len(), 3);
        let bbox = wire.bounding_box();
        assert_eq!(bbox.min, Point::new(-450.0, 0.0));
        assert_eq!(bbox.max, Point::new(1350.0, 900.0));
        assert_eq!(wire.kind(), "wire");
    }
}
