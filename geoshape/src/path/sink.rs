use super::{arc_start, Path, PathOp, Subpath};
use geoshape_types::cartesian::Point2;

/// Receiver of drawing operations.
///
/// This is the only capability geometry conversion needs from a host drawing framework. [`Path`] implements it by
/// recording the operations, [`LyonSink`](super::LyonSink) builds a `lyon` path directly.
///
/// A segment added after [`close`](PathSink::close) starts a new subpath at the point the closed subpath started at.
/// A segment added before any move starts a new subpath at its own start point. Closing when no subpath is open does
/// nothing.
pub trait PathSink {
    /// Starts a new subpath at the point.
    fn move_to(&mut self, point: Point2);

    /// Adds a straight segment from the current point.
    fn line_to(&mut self, point: Point2);

    /// Adds a circular arc around `center`, see [`PathOp::Arc`].
    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    );

    /// Closes the current subpath.
    fn close(&mut self) {}

    /// Adds all subpaths of another path.
    fn append(&mut self, path: &Path) {
        path.replay(self);
    }
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    fn move_to(&mut self, point: Point2) {
        (**self).move_to(point)
    }

    fn line_to(&mut self, point: Point2) {
        (**self).line_to(point)
    }

    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        (**self).add_arc(center, radius, start_angle, end_angle, clockwise)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn append(&mut self, path: &Path) {
        (**self).append(path)
    }
}

impl PathSink for Path {
    fn move_to(&mut self, point: Point2) {
        self.subpaths
            .push(Subpath::new(vec![PathOp::MoveTo(point)]));
    }

    fn line_to(&mut self, point: Point2) {
        self.open_subpath(point).push(PathOp::LineTo(point));
    }

    fn add_arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        let start = arc_start(center, radius, start_angle);
        self.open_subpath(start).push(PathOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
    }

    fn close(&mut self) {
        if let Some(last) = self.subpaths.last_mut().filter(|s| !s.is_closed()) {
            last.push(PathOp::Close);
        }
    }

    fn append(&mut self, path: &Path) {
        self.subpaths.extend_from_slice(&path.subpaths);
    }
}
