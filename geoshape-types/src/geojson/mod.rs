//! Conversion of parsed [`geojson`] geometries into [`Geometry`].
//!
//! Only the shape of the coordinate arrays is checked: every position must have at least two dimensions. Rings are
//! taken as they are, without checking that they are closed or long enough.

use crate::error::GeoshapeTypesError;
use crate::geo::Position;
use crate::geometry::Geometry;
use crate::impls::{LineString, LinearRing, Polygon};
use geojson::{LineStringType, PolygonType, Value};

mod position;

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoshapeTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Geometry::try_from(&value.value)
    }
}

impl TryFrom<geojson::Geometry> for Geometry {
    type Error = GeoshapeTypesError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        Geometry::try_from(&value.value)
    }
}

impl TryFrom<&Value> for Geometry {
    type Error = GeoshapeTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geometry::Point(Position::try_from(p)?),
            Value::MultiPoint(points) => Geometry::MultiPoint(convert_positions(points)?),
            Value::LineString(points) => Geometry::LineString(convert_line_string(points)?),
            Value::MultiLineString(lines) => Geometry::MultiLineString(
                lines
                    .iter()
                    .map(convert_line_string)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geometry::MultiPolygon(
                mp.iter().map(convert_polygon).collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(items) => Geometry::GeometryCollection(
                items
                    .iter()
                    .map(Geometry::try_from)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

fn convert_positions(points: &[geojson::Position]) -> Result<Vec<Position>, GeoshapeTypesError> {
    points.iter().map(Position::try_from).collect()
}

fn convert_line_string(line_string: &LineStringType) -> Result<LineString, GeoshapeTypesError> {
    Ok(LineString::new(convert_positions(line_string)?))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, GeoshapeTypesError> {
    Ok(Polygon::new(
        polygon
            .iter()
            .map(|ring| convert_positions(ring).map(LinearRing::new))
            .collect::<Result<_, _>>()?,
    ))
}
