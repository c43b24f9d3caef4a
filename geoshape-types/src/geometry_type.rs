//! See documentation for [`GeometryType`].
use serde::{Deserialize, Serialize};

/// Tag of a [`Geometry`](crate::Geometry) variant, without its data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// [`Geometry::Point`](crate::Geometry::Point).
    Point,
    /// [`Geometry::MultiPoint`](crate::Geometry::MultiPoint).
    MultiPoint,
    /// [`Geometry::LineString`](crate::Geometry::LineString).
    LineString,
    /// [`Geometry::MultiLineString`](crate::Geometry::MultiLineString).
    MultiLineString,
    /// [`Geometry::Polygon`](crate::Geometry::Polygon).
    Polygon,
    /// [`Geometry::MultiPolygon`](crate::Geometry::MultiPolygon).
    MultiPolygon,
    /// [`Geometry::GeometryCollection`](crate::Geometry::GeometryCollection).
    GeometryCollection,
}

impl GeometryType {
    /// Name of the type as used by GeoJSON.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
