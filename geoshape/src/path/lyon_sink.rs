use super::{arc_start, arc_sweep, PathSink};
use geoshape_types::cartesian::Point2;
use lyon::geom::{Angle, Arc};
use lyon::math::{point, vector};
use lyon::path::path::Builder;
use lyon::path::Path;

/// [`PathSink`] that builds a [`lyon::path::Path`].
///
/// Arcs are approximated with quadratic bézier curves. Coordinates are converted to `f32` and clamped to its finite
/// range, so a projection is free to place points far outside of the drawing area. Zero-length segments are dropped.
/// Projections must not produce NaN coordinates.
///
/// Subpaths follow the rules of [`PathSink`]: a segment added after `close` starts a new subpath at the start of the
/// closed one.
pub struct LyonSink {
    builder: Builder,
    in_subpath: bool,
    start: Option<lyon::math::Point>,
    current: lyon::math::Point,
}

impl Default for LyonSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LyonSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            builder: Path::builder(),
            in_subpath: false,
            start: None,
            current: point(0.0, 0.0),
        }
    }

    /// Finishes the last subpath and returns the built path.
    pub fn build(mut self) -> Path {
        if self.in_subpath {
            self.builder.end(false);
        }

        self.builder.build()
    }

    fn connect_to(&mut self, at: lyon::math::Point) {
        if !self.in_subpath {
            let start = self.start.unwrap_or(at);
            self.builder.begin(start);
            self.start = Some(start);
            self.current = start;
            self.in_subpath = true;
        }

        if at != self.current {
            self.builder.line_to(at);
            self.current = at;
        }
    }
}

fn lyon_coord(value: f64) -> f32 {
    value.clamp(f32::MIN as f64, f32::MAX as f64) as f32
}

fn lyon_point(p: Point2) -> lyon::math::Point {
    point(lyon_coord(p.x()), lyon_coord(p.y()))
}

fn is_finite(p: lyon::math::Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

impl PathSink for LyonSink {
    fn move_to(&mut self, p: Point2) {
        if self.in_subpath {
            self.builder.end(false);
        }

        let at = lyon_point(p);
        self.builder.begin(at);
        self.start = Some(at);
        self.current = at;
        self.in_subpath = true;
    }

    fn line_to(&mut self, p: Point2) {
        self.connect_to(lyon_point(p));
    }

    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        self.connect_to(lyon_point(arc_start(center, radius, start_angle)));

        let sweep = arc_sweep(start_angle, end_angle, clockwise);
        if sweep == 0.0 || radius == 0.0 {
            return;
        }

        let radius = lyon_coord(radius);
        let arc = Arc {
            center: lyon_point(center),
            radii: vector(radius, radius),
            start_angle: Angle::radians(start_angle as f32),
            sweep_angle: Angle::radians(sweep as f32),
            x_rotation: Angle::radians(0.0),
        };

        // Curves around points at the edge of the f32 range can overflow it.
        let builder = &mut self.builder;
        let mut current = self.current;
        arc.for_each_quadratic_bezier(&mut |segment| {
            if is_finite(segment.ctrl) && is_finite(segment.to) {
                builder.quadratic_bezier_to(segment.ctrl, segment.to);
                current = segment.to;
            }
        });
        self.current = current;
    }

    fn close(&mut self) {
        if self.in_subpath {
            self.builder.end(true);
            self.in_subpath = false;
        }
    }
}
