use crate::geo::Position;
use crate::geometry_type::GeometryType;
use crate::impls::{LineString, LinearRing, Polygon};
use serde::{Deserialize, Serialize};

/// Geographic geometry of any supported type.
///
/// Geometry collections can contain any other geometry, including other collections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Single position.
    Point(Position),
    /// Set of independent positions.
    MultiPoint(Vec<Position>),
    /// Open line.
    LineString(LineString),
    /// Set of independent lines.
    MultiLineString(Vec<LineString>),
    /// Polygon with optional holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(Vec<Polygon>),
    /// Heterogeneous set of geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Depth of collection nesting: 0 for simple geometries, 1 for a collection of simple geometries, and so on.
    ///
    /// Computed iteratively, so it is safe to call on arbitrarily deep collections.
    pub fn nesting_depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((geometry, depth)) = stack.pop() {
            if let Geometry::GeometryCollection(items) = geometry {
                max_depth = max_depth.max(depth + 1);
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
        }

        max_depth
    }
}

impl From<Position> for Geometry {
    fn from(value: Position) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<LinearRing> for Geometry {
    fn from(value: LinearRing) -> Self {
        Self::Polygon(value.into())
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Vec<Geometry>> for Geometry {
    fn from(value: Vec<Geometry>) -> Self {
        Self::GeometryCollection(value)
    }
}

impl FromIterator<Geometry> for Geometry {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::GeometryCollection(iter.into_iter().collect())
    }
}
