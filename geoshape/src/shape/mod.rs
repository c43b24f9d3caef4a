//! Conversion of geographic geometries into drawing paths.
//!
//! Every geometry type has its own shape on the drawing surface:
//!
//! * a point becomes a filled circle (marker) of [`ShapeOptions::marker_radius`] around the projected position;
//! * a line string becomes an open polyline;
//! * every ring of a polygon becomes a separate subpath, the exterior ring first and then the holes in the order they
//!   are stored. Rings are closed by their data (last position repeats the first one), no closing operation is added.
//!   Holes are not rewound, so the renderer is responsible for choosing a fill rule that punches them out;
//! * multi-geometries and geometry collections produce their members' subpaths one after another.
//!
//! Subpaths always follow the depth-first order of the input geometry.

mod converter;
mod options;

pub use options::{ShapeOptions, DEFAULT_MARKER_RADIUS, DEFAULT_MAX_DEPTH};

use crate::error::GeoshapeError;
use crate::path::{Path, PathSink};
use converter::Converter;
use geoshape_types::cartesian::Rect;
use geoshape_types::projection::Projection;
use geoshape_types::Geometry;

/// Converts the geometry into a path using default [`ShapeOptions`].
///
/// ```
/// use geoshape::geoshape_types::cartesian::Rect;
/// use geoshape::geoshape_types::impls::LineString;
/// use geoshape::geoshape_types::projection::IdentityProjection;
/// use geoshape::geoshape_types::{lonlat, Geometry};
///
/// let line = Geometry::LineString(LineString::new(vec![lonlat!(10.0, 10.0), lonlat!(20.0, 10.0)]));
/// let path = geoshape::to_path(&line, &IdentityProjection, &Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(path.len(), 1);
/// ```
pub fn to_path<P>(geometry: &Geometry, projection: &P, rect: &Rect) -> Path
where
    P: Projection + ?Sized,
{
    ShapeOptions::default().to_path(geometry, projection, rect)
}

/// Converts the geometry into operations of the given sink using default [`ShapeOptions`].
pub fn build_path<P, S>(geometry: &Geometry, projection: &P, rect: &Rect, sink: &mut S)
where
    P: Projection + ?Sized,
    S: PathSink + ?Sized,
{
    ShapeOptions::default().build(geometry, projection, rect, sink)
}

impl ShapeOptions {
    /// Converts the geometry into a path.
    ///
    /// Never fails: geometry collections nested deeper than [`ShapeOptions::max_depth`] are skipped with a warning.
    pub fn to_path<P>(&self, geometry: &Geometry, projection: &P, rect: &Rect) -> Path
    where
        P: Projection + ?Sized,
    {
        let mut path = Path::new();
        self.build(geometry, projection, rect, &mut path);
        log::trace!(
            "Converted {} into a path of {} subpaths",
            geometry.geometry_type(),
            path.len()
        );

        path
    }

    /// Converts the geometry into operations of the given sink.
    ///
    /// Geometry collections nested deeper than [`ShapeOptions::max_depth`] are skipped with a warning.
    pub fn build<P, S>(&self, geometry: &Geometry, projection: &P, rect: &Rect, sink: &mut S)
    where
        P: Projection + ?Sized,
        S: PathSink + ?Sized,
    {
        Converter::new(projection, rect, self, sink).convert(geometry, 0);
    }

    /// Converts the geometry into a path, failing if geometry collections are nested deeper than
    /// [`ShapeOptions::max_depth`].
    pub fn try_to_path<P>(
        &self,
        geometry: &Geometry,
        projection: &P,
        rect: &Rect,
    ) -> Result<Path, GeoshapeError>
    where
        P: Projection + ?Sized,
    {
        let mut path = Path::new();
        self.try_build(geometry, projection, rect, &mut path)?;
        Ok(path)
    }

    /// Converts the geometry into operations of the given sink, failing if geometry collections are nested deeper
    /// than [`ShapeOptions::max_depth`].
    ///
    /// Nesting is checked before conversion starts, so nothing is sent into the sink on error.
    pub fn try_build<P, S>(
        &self,
        geometry: &Geometry,
        projection: &P,
        rect: &Rect,
        sink: &mut S,
    ) -> Result<(), GeoshapeError>
    where
        P: Projection + ?Sized,
        S: PathSink + ?Sized,
    {
        let depth = geometry.nesting_depth();
        if depth > self.max_depth {
            return Err(GeoshapeError::NestingTooDeep {
                depth,
                max_depth: self.max_depth,
            });
        }

        self.build(geometry, projection, rect, sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathOp, Subpath};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geoshape_types::cartesian::Point2;
    use geoshape_types::geo::Position;
    use geoshape_types::impls::{LineString, LinearRing, Polygon};
    use geoshape_types::lonlat;
    use geoshape_types::projection::{FnProjection, IdentityProjection};
    use std::f64::consts::TAU;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    fn line(coords: &[(f64, f64)]) -> LineString {
        coords.iter().copied().map(Position::from).collect()
    }

    fn ring(coords: &[(f64, f64)]) -> LinearRing {
        coords.iter().copied().map(Position::from).collect()
    }

    fn square_with_hole() -> Polygon {
        Polygon::new(vec![
            ring(&[(10.0, 50.0), (50.0, 50.0), (50.0, 100.0), (10.0, 100.0), (10.0, 50.0)]),
            ring(&[(50.0, 100.0), (50.0, 150.0), (100.0, 150.0), (100.0, 100.0), (50.0, 100.0)]),
        ])
    }

    /// Shifts everything by the rect origin and scales by 2, to tell projected and raw coordinates apart.
    fn shifting() -> impl Projection {
        FnProjection::new(|p: &Position, rect: &Rect| {
            Point2::new(rect.x_min + p.lon() * 2.0, rect.y_min + p.lat() * 2.0)
        })
    }

    fn nested(levels: usize) -> Geometry {
        let mut geometry = Geometry::Point(lonlat!(1.0, 1.0));
        for _ in 0..levels {
            geometry = Geometry::GeometryCollection(vec![geometry]);
        }
        geometry
    }

    #[test]
    fn point_is_a_marker() {
        let projection = shifting();
        let rect = Rect::new(100.0, 100.0, 300.0, 300.0);
        let path = to_path(&Geometry::Point(lonlat!(125.6, 10.1)), &projection, &rect);

        assert_eq!(path.len(), 1);
        let expected = projection.project(&lonlat!(125.6, 10.1), &rect);
        assert_eq!(path.subpaths()[0].start(), Some(expected));
        assert_matches!(path.subpaths()[0].ops(), [PathOp::MoveTo(_), arc] => {
            assert_matches!(arc, PathOp::Arc { center, radius, .. } => {
                assert_eq!(*center, expected);
                assert_eq!(*radius, 5.0);
            });
            assert_abs_diff_eq!(arc.sweep().unwrap_or_default().abs(), TAU);
        });
    }

    #[test]
    fn marker_radius_ignores_rect() {
        let point = Geometry::Point(lonlat!(0.0, 0.0));
        let small = to_path(&point, &IdentityProjection, &Rect::new(0.0, 0.0, 1.0, 1.0));
        let large = to_path(&point, &IdentityProjection, &Rect::new(0.0, 0.0, 1e6, 1e6));
        assert_eq!(small, large);
    }

    #[test]
    fn marker_radius_option() {
        let path = ShapeOptions::default()
            .with_marker_radius(2.0)
            .to_path(&Geometry::Point(lonlat!(0.0, 0.0)), &IdentityProjection, &rect());
        assert_matches!(path.subpaths()[0].ops()[1], PathOp::Arc { radius, .. } if radius == 2.0);
    }

    #[test]
    fn multi_point() {
        let points = vec![lonlat!(1.0, 2.0), lonlat!(3.0, 4.0), lonlat!(5.0, 6.0)];
        let path = to_path(&Geometry::MultiPoint(points.clone()), &IdentityProjection, &rect());

        assert_eq!(path.len(), 3);
        for (subpath, position) in path.subpaths().iter().zip(&points) {
            assert_eq!(subpath.start(), Some(Point2::new(position.lon(), position.lat())));
        }

        let empty = to_path(&Geometry::MultiPoint(vec![]), &IdentityProjection, &rect());
        assert!(empty.is_empty());
    }

    #[test]
    fn line_string_scenario() {
        let geometry = Geometry::LineString(line(&[(10.0, 10.0), (20.0, 10.0), (20.0, 30.0)]));
        let path = to_path(&geometry, &IdentityProjection, &rect());

        assert_eq!(
            path,
            Path::from(vec![Subpath::new(vec![
                PathOp::MoveTo(Point2::new(10.0, 10.0)),
                PathOp::LineTo(Point2::new(20.0, 10.0)),
                PathOp::LineTo(Point2::new(20.0, 30.0)),
            ])])
        );
    }

    #[test]
    fn line_string_has_n_minus_one_lines() {
        let projection = shifting();
        for n in 2..10 {
            let coords: Vec<_> = (0..n).map(|i| (i as f64, (i * i) as f64)).collect();
            let path = to_path(&Geometry::LineString(line(&coords)), &projection, &rect());

            assert_eq!(path.len(), 1);
            assert_eq!(path.subpaths()[0].line_count(), n - 1);
            assert_eq!(path.subpaths()[0].ops().len(), n);
            assert_eq!(
                path.subpaths()[0].start(),
                Some(projection.project(&lonlat!(0.0, 0.0), &rect()))
            );
        }
    }

    #[test]
    fn degenerate_line_strings() {
        let empty = to_path(&Geometry::LineString(LineString::default()), &IdentityProjection, &rect());
        assert!(empty.is_empty());

        let single = to_path(&Geometry::LineString(line(&[(3.0, 4.0)])), &IdentityProjection, &rect());
        assert_matches!(single.subpaths(), [s] if s.ops() == [PathOp::MoveTo(Point2::new(3.0, 4.0))]);
    }

    #[test]
    fn multi_line_string_is_concatenation() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let b = line(&[(5.0, 5.0), (6.0, 5.0), (7.0, 7.0)]);
        let projection = shifting();

        let multi = to_path(&Geometry::MultiLineString(vec![a.clone(), b.clone()]), &projection, &rect());
        let mut expected = to_path(&Geometry::LineString(a), &projection, &rect());
        expected.append(&to_path(&Geometry::LineString(b), &projection, &rect()));

        assert_eq!(multi, expected);
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn polygon_scenario() {
        let path = to_path(&Geometry::Polygon(square_with_hole()), &IdentityProjection, &rect());

        assert_eq!(path.len(), 2);
        assert_eq!(path.subpaths()[0].start(), Some(Point2::new(10.0, 50.0)));
        assert_eq!(path.subpaths()[1].start(), Some(Point2::new(50.0, 100.0)));
        for subpath in path.subpaths() {
            assert_eq!(subpath.line_count(), 4);
            assert!(!subpath.is_closed());
        }
    }

    #[test]
    fn polygon_ring_order_ignores_winding() {
        let exterior = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let same_winding_hole = ring(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0), (2.0, 2.0)]);
        let reversed_hole = ring(&[(6.0, 6.0), (8.0, 6.0), (8.0, 8.0), (6.0, 8.0), (6.0, 6.0)]);
        let polygon = Polygon::new(vec![exterior, same_winding_hole, reversed_hole.clone()]);

        let path = to_path(&Geometry::Polygon(polygon), &IdentityProjection, &rect());
        assert_eq!(path.len(), 3);
        assert_eq!(path.subpaths()[0].start(), Some(Point2::new(0.0, 0.0)));

        let hole_points: Vec<_> = path.subpaths()[2]
            .ops()
            .iter()
            .map(|op| match op {
                PathOp::MoveTo(p) | PathOp::LineTo(p) => *p,
                other => panic!("unexpected operation {other:?}"),
            })
            .collect();
        let expected: Vec<_> = reversed_hole
            .iter_positions()
            .map(|p| Point2::new(p.lon(), p.lat()))
            .collect();
        assert_eq!(hole_points, expected);
    }

    #[test]
    fn degenerate_polygons() {
        let empty = to_path(&Geometry::Polygon(Polygon::default()), &IdentityProjection, &rect());
        assert!(empty.is_empty());

        let with_empty_ring = Polygon::new(vec![
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            LinearRing::default(),
        ]);
        let path = to_path(&Geometry::Polygon(with_empty_ring), &IdentityProjection, &rect());
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn multi_polygon_is_concatenation() {
        let first = square_with_hole();
        let second = Polygon::from(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
        let projection = shifting();

        let path = to_path(&Geometry::MultiPolygon(vec![first.clone(), second.clone()]), &projection, &rect());
        let mut expected = to_path(&Geometry::Polygon(first), &projection, &rect());
        expected.append(&to_path(&Geometry::Polygon(second), &projection, &rect()));

        assert_eq!(path, expected);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn collection_is_depth_first_concatenation() {
        let point = Geometry::Point(lonlat!(1.0, 1.0));
        let line_string = Geometry::LineString(line(&[(0.0, 0.0), (5.0, 5.0)]));
        let polygon = Geometry::Polygon(square_with_hole());
        let collection = Geometry::GeometryCollection(vec![
            point.clone(),
            Geometry::GeometryCollection(vec![line_string.clone(), polygon.clone()]),
            point.clone(),
        ]);
        let projection = shifting();

        let path = to_path(&collection, &projection, &rect());

        let mut expected = Path::new();
        for member in [&point, &line_string, &polygon, &point] {
            expected.append(&to_path(member, &projection, &rect()));
        }
        assert_eq!(path, expected);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn empty_collection() {
        let path = to_path(&Geometry::GeometryCollection(vec![]), &IdentityProjection, &rect());
        assert!(path.is_empty());
    }

    #[test]
    fn idempotent() {
        let geometry = Geometry::GeometryCollection(vec![
            Geometry::Polygon(square_with_hole()),
            Geometry::MultiPoint(vec![lonlat!(3.0, 3.0), lonlat!(-200.0, 100.0)]),
        ]);
        let projection = shifting();
        assert_eq!(
            to_path(&geometry, &projection, &rect()),
            to_path(&geometry, &projection, &rect())
        );
    }

    #[test]
    fn deep_collections_are_skipped() {
        let options = ShapeOptions::default().with_max_depth(3);

        let path = options.to_path(&nested(3), &IdentityProjection, &rect());
        assert_eq!(path.len(), 1);

        let path = options.to_path(&nested(4), &IdentityProjection, &rect());
        assert!(path.is_empty());

        let mixed = Geometry::GeometryCollection(vec![
            Geometry::Point(lonlat!(0.0, 0.0)),
            nested(5),
            Geometry::Point(lonlat!(2.0, 2.0)),
        ]);
        let path = options.to_path(&mixed, &IdentityProjection, &rect());
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn default_depth_limit() {
        let path = to_path(&nested(DEFAULT_MAX_DEPTH), &IdentityProjection, &rect());
        assert_eq!(path.len(), 1);

        let path = to_path(&nested(DEFAULT_MAX_DEPTH + 1), &IdentityProjection, &rect());
        assert!(path.is_empty());
    }

    #[test]
    fn deep_collections_fail_in_strict_mode() {
        let options = ShapeOptions::default().with_max_depth(2);
        assert_matches!(
            options.try_to_path(&nested(3), &IdentityProjection, &rect()),
            Err(GeoshapeError::NestingTooDeep {
                depth: 3,
                max_depth: 2
            })
        );
        assert_matches!(
            options.try_to_path(&nested(2), &IdentityProjection, &rect()),
            Ok(path) if path.len() == 1
        );
    }

    #[test]
    fn strict_mode_writes_nothing_on_error() {
        let geometry = Geometry::GeometryCollection(vec![
            Geometry::Point(lonlat!(0.0, 0.0)),
            nested(2),
            Geometry::Point(lonlat!(1.0, 1.0)),
        ]);
        let mut path = Path::new();
        let result = ShapeOptions::default().with_max_depth(2).try_build(
            &geometry,
            &IdentityProjection,
            &rect(),
            &mut path,
        );

        assert_matches!(
            result,
            Err(GeoshapeError::NestingTooDeep {
                depth: 3,
                max_depth: 2
            })
        );
        assert!(path.is_empty());
    }

    #[test]
    fn strict_mode_reports_deepest_level() {
        let geometry = Geometry::GeometryCollection(vec![nested(2), nested(6), nested(4)]);
        assert_matches!(
            ShapeOptions::default()
                .with_max_depth(3)
                .try_to_path(&geometry, &IdentityProjection, &rect()),
            Err(GeoshapeError::NestingTooDeep {
                depth: 7,
                max_depth: 3
            })
        );
    }

    #[test]
    fn build_path_into_lyon_sink() {
        let mut sink = crate::path::LyonSink::new();
        build_path(
            &Geometry::Polygon(square_with_hole()),
            &IdentityProjection,
            &rect(),
            &mut sink,
        );
        let built: Vec<_> = sink.build().iter().collect();
        let replayed: Vec<_> =
            to_path(&Geometry::Polygon(square_with_hole()), &IdentityProjection, &rect())
                .to_lyon()
                .iter()
                .collect();

        assert_eq!(built.len(), 12);
        assert_eq!(format!("{built:?}"), format!("{replayed:?}"));
    }

    #[test]
    fn far_away_points_convert_to_lyon() {
        let geometry = Geometry::GeometryCollection(vec![
            Geometry::LineString(line(&[(1e39, 0.0), (0.0, 0.0)])),
            Geometry::Point(lonlat!(-1e300, 1e300)),
        ]);
        let events: Vec<_> = to_path(&geometry, &IdentityProjection, &rect())
            .to_lyon()
            .iter()
            .collect();

        assert_matches!(
            events[0],
            lyon::path::PathEvent::Begin { at } if at == lyon::math::point(f32::MAX, 0.0)
        );
        for event in &events {
            for p in [event.from(), event.to()] {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn dyn_projection() {
        let projection: Box<dyn Projection> = Box::new(IdentityProjection);
        let path = to_path(&Geometry::Point(lonlat!(1.0, 2.0)), projection.as_ref(), &rect());
        assert_eq!(path.subpaths()[0].start(), Some(Point2::new(1.0, 2.0)));
    }
}
