use crate::cartesian::{Point2, Rect};
use crate::geo::Position;
use crate::projection::Projection;

/// Projection that uses longitude as `x` and latitude as `y` and ignores the target rectangle.
///
/// Useful for testing and for geometries that are already stored in drawing surface units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProjection;

impl IdentityProjection {
    /// Creates a new identity projection.
    pub fn new() -> Self {
        Self
    }
}

impl Projection for IdentityProjection {
    fn project(&self, position: &Position, _rect: &Rect) -> Point2 {
        Point2::new(position.lon(), position.lat())
    }
}
