//! Member types of [`Geometry`](crate::Geometry) variants.

mod contour;
mod polygon;

pub use contour::{LineString, LinearRing};
pub use polygon::Polygon;
