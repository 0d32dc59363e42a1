//! Scheme element collection.

use super::element::{Anchor, Element, GlyphStyle};
use super::types::BoundingBox;

/// An ordered collection of scheme elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scheme {
    elements: Vec<Element>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All anchors of all elements, in element order.
    pub fn anchors(&self, style: &GlyphStyle) -> Vec<Anchor> {
        self.elements
            .iter()
            .flat_map(|element| element.anchors(style))
            .collect()
    }

    /// Box around every element's anchor positions, in scheme units.
    ///
    /// Elements without anchors (an empty wire) do not contribute; a scheme
    /// with no anchors at all gives the zero box.
    pub fn bounding_box(&self) -> BoundingBox {
        let boxes: Vec<BoundingBox> = self
            .elements
            .iter()
            .filter(|element| !matches!(element, Element::Wire { points } if points.is_empty()))
            .map(Element::bounding_box)
            .collect();
        BoundingBox::unite(&boxes)
    }
}

impl FromIterator<Element> for Scheme {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for Scheme {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
