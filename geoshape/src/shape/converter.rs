use crate::path::PathSink;
use crate::shape::ShapeOptions;
use geoshape_types::cartesian::Rect;
use geoshape_types::geo::Position;
use geoshape_types::impls::Polygon;
use geoshape_types::projection::Projection;
use geoshape_types::Geometry;
use std::f64::consts::TAU;

/// State of a single conversion call.
pub(crate) struct Converter<'a, P: ?Sized, S: ?Sized> {
    projection: &'a P,
    rect: &'a Rect,
    options: &'a ShapeOptions,
    sink: &'a mut S,
}

impl<'a, P, S> Converter<'a, P, S>
where
    P: Projection + ?Sized,
    S: PathSink + ?Sized,
{
    pub(crate) fn new(
        projection: &'a P,
        rect: &'a Rect,
        options: &'a ShapeOptions,
        sink: &'a mut S,
    ) -> Self {
        Self {
            projection,
            rect,
            options,
            sink,
        }
    }

    /// Converts the geometry. `depth` is the number of collections enclosing it.
    ///
    /// Collections nested deeper than [`ShapeOptions::max_depth`] are skipped.
    pub(crate) fn convert(&mut self, geometry: &Geometry, depth: usize) {
        match geometry {
            Geometry::Point(position) => self.add_marker(position),
            Geometry::MultiPoint(positions) => {
                for position in positions {
                    self.add_marker(position);
                }
            }
            Geometry::LineString(line) => self.add_polyline(line.iter_positions()),
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.add_polyline(line.iter_positions());
                }
            }
            Geometry::Polygon(polygon) => self.add_polygon(polygon),
            Geometry::MultiPolygon(polygons) => {
                for polygon in polygons {
                    self.add_polygon(polygon);
                }
            }
            Geometry::GeometryCollection(items) => {
                let level = depth + 1;
                if level > self.options.max_depth {
                    log::warn!(
                        "Skipping geometry collection of {} items: nesting depth {level} exceeds the limit of {}",
                        items.len(),
                        self.options.max_depth
                    );
                    return;
                }

                for item in items {
                    self.convert(item, level);
                }
            }
        }
    }

    fn add_marker(&mut self, position: &Position) {
        let center = self.projection.project(position, self.rect);
        self.sink.move_to(center);
        self.sink
            .add_arc(center, self.options.marker_radius, 0.0, TAU, true);
    }

    fn add_polyline<'p>(&mut self, positions: impl Iterator<Item = &'p Position>) {
        let (projection, rect) = (self.projection, self.rect);
        let mut points = positions.map(|p| projection.project(p, rect));
        let Some(first) = points.next() else {
            return;
        };

        self.sink.move_to(first);
        for point in points {
            self.sink.line_to(point);
        }
    }

    // Holes keep the winding they were given, the fill rule is chosen by the renderer.
    fn add_polygon(&mut self, polygon: &Polygon) {
        for ring in polygon.iter_rings() {
            self.add_polyline(ring.iter_positions());
        }
    }
}
