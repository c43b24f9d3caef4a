use crate::impls::contour::LinearRing;
use serde::{Deserialize, Serialize};

/// Polygon defined by its rings.
///
/// The first ring is the exterior boundary, all the following ones are holes. Rings are stored in the given order and
/// with the given winding.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon from a list of rings.
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings }
    }

    /// Creates a polygon from the exterior ring and holes.
    pub fn with_holes(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        let mut rings = Vec::with_capacity(interiors.len() + 1);
        rings.push(exterior);
        rings.extend(interiors);
        Self { rings }
    }

    /// Exterior ring, `None` if the polygon has no rings.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    /// Holes of the polygon.
    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// All rings, the exterior one first.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Iterates over all rings, the exterior one first.
    pub fn iter_rings(&self) -> impl Iterator<Item = &LinearRing> {
        self.rings.iter()
    }
}

impl From<LinearRing> for Polygon {
    fn from(exterior: LinearRing) -> Self {
        Self::new(vec![exterior])
    }
}

impl From<Vec<LinearRing>> for Polygon {
    fn from(rings: Vec<LinearRing>) -> Self {
        Self::new(rings)
    }
}
