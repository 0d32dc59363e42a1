//! Circuit scheme representation and canvas fitting.
//!
//! This module provides the elements a circuit scheme is assembled from and
//! the glue that turns a [`Scheme`] into solver constraints. The resulting
//! [`Placement`] tells a renderer where every element lands on the canvas;
//! drawing itself happens elsewhere.

mod diagram;
mod element;
mod fit;
mod transform;
mod types;

pub use diagram::Scheme;
pub use element::{
    Anchor, Element, GlyphStyle, Orientation, CONTACT_SIZE, GROUNDING_HEIGHT, GROUNDING_WIDTH,
    LINE_WIDTH, NODE_RADIUS, RESISTOR_LENGTH, RESISTOR_WIDTH,
};
pub use fit::{axis_constraints, fit_scheme, FitConfig, Placement, DEFAULT_MARGIN};
pub use transform::AxisTransform;
pub use types::*;
