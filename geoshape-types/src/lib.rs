//! Geometry model and projection contract used by `geoshape`.
//!
//! * [`Geometry`] is a closed set of geographic geometries following the GeoJSON geometry model. Its member types
//!   ([`LineString`](impls::LineString), [`LinearRing`](impls::LinearRing), [`Polygon`](impls::Polygon)) store
//!   [`Position`](geo::Position)s in the order they were given.
//! * [`Projection`](projection::Projection) maps a geographic position into a point of the drawing surface, see
//!   [`cartesian`] module for the drawing surface types.
//!
//! With the `geojson` feature enabled, geometries can be converted from the [`geojson`](::geojson) crate types.

pub mod cartesian;
pub mod error;
pub mod geo;
#[cfg(feature = "geojson")]
mod geojson;
mod geometry;
pub mod geometry_type;
pub mod impls;
pub mod projection;

pub use geometry::Geometry;
