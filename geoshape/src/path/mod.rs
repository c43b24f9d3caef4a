//! Drawing paths produced by geometry conversion.
//!
//! A [`Path`] is an ordered list of [`Subpath`]s, each starting with its own [`PathOp::MoveTo`]. Paths are plain
//! values: they record drawing operations and can be replayed into any [`PathSink`], e.g. a [`LyonSink`] to get a
//! path for `lyon` tessellators.

mod lyon_sink;
mod sink;

pub use lyon_sink::LyonSink;
pub use sink::PathSink;

use geoshape_types::cartesian::{Point2, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Single drawing operation.
///
/// Angles are given in radians and grow from `+x` axis towards `+y` axis of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathOp {
    /// Starts a new subpath at the point.
    MoveTo(Point2),
    /// Straight segment from the current point to the given one.
    LineTo(Point2),
    /// Circular arc. A segment from the current point to the start of the arc is implied.
    Arc {
        /// Center of the circle.
        center: Point2,
        /// Radius of the circle.
        radius: f64,
        /// Angle of the arc start.
        start_angle: f64,
        /// Angle of the arc end.
        end_angle: f64,
        /// If true, the arc goes in the direction of decreasing angles.
        clockwise: bool,
    },
    /// Closes the current subpath.
    Close,
}

impl PathOp {
    /// Signed sweep of an arc operation, `None` for other operations. See [`arc_sweep`].
    pub fn sweep(&self) -> Option<f64> {
        match *self {
            PathOp::Arc {
                start_angle,
                end_angle,
                clockwise,
                ..
            } => Some(arc_sweep(start_angle, end_angle, clockwise)),
            _ => None,
        }
    }
}

/// Signed angle swept by an arc going from `start_angle` to `end_angle`.
///
/// The result is negative for clockwise arcs. If the angles differ by a full turn or more, the arc is a full circle
/// and the sweep is `±2π`.
pub fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    let delta = end_angle - start_angle;
    if delta.abs() >= TAU {
        return if clockwise { -TAU } else { TAU };
    }

    if clockwise {
        -(-delta).rem_euclid(TAU)
    } else {
        delta.rem_euclid(TAU)
    }
}

/// First point of an arc around `center` starting at `start_angle`.
pub fn arc_start(center: Point2, radius: f64, start_angle: f64) -> Point2 {
    center.translate(radius * start_angle.cos(), radius * start_angle.sin())
}

/// Sequence of operations started by a single [`PathOp::MoveTo`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subpath {
    ops: Vec<PathOp>,
}

impl Subpath {
    /// Creates a subpath from a list of operations.
    pub fn new(ops: Vec<PathOp>) -> Self {
        Self { ops }
    }

    /// Operations of the subpath.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Point the subpath starts at, if it starts with a move.
    pub fn start(&self) -> Option<Point2> {
        match self.ops.first() {
            Some(PathOp::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Number of [`PathOp::LineTo`] operations.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PathOp::LineTo(_)))
            .count()
    }

    /// True if the subpath ends with [`PathOp::Close`].
    pub fn is_closed(&self) -> bool {
        matches!(self.ops.last(), Some(PathOp::Close))
    }

    fn push(&mut self, op: PathOp) {
        self.ops.push(op);
    }
}

/// Ordered list of subpaths.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    subpaths: Vec<Subpath>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subpaths in the order they were added.
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Number of subpaths.
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    /// True if the path has no subpaths.
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Adds a subpath to the end of the path.
    pub fn push_subpath(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    /// Iterates over all operations of all subpaths in order.
    pub fn iter_ops(&self) -> impl Iterator<Item = &PathOp> {
        self.subpaths.iter().flat_map(|s| s.ops.iter())
    }

    /// Sends all operations of the path into the sink in order.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for op in self.iter_ops() {
            match *op {
                PathOp::MoveTo(p) => sink.move_to(p),
                PathOp::LineTo(p) => sink.line_to(p),
                PathOp::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => sink.add_arc(center, radius, start_angle, end_angle, clockwise),
                PathOp::Close => sink.close(),
            }
        }
    }

    /// Bounding rectangle of all points of the path, `None` for an empty path.
    ///
    /// Arcs are accounted by their full circle.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.iter_ops()
            .filter_map(|op| match *op {
                PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(Rect::from_point(&p)),
                PathOp::Arc { center, radius, .. } => Some(Rect::new(
                    center.x() - radius,
                    center.y() - radius,
                    center.x() + radius,
                    center.y() + radius,
                )),
                PathOp::Close => None,
            })
            .reduce(|acc, rect| acc.merge(rect))
    }

    /// Converts the path into a [`lyon::path::Path`].
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut sink = LyonSink::new();
        self.replay(&mut sink);
        sink.build()
    }

    /// Subpath new segments are added to.
    ///
    /// If the last subpath is closed, a new one is started at the point the closed one started at. If there are no
    /// subpaths, a new one is started at `start`.
    fn open_subpath(&mut self, start: Point2) -> &mut Subpath {
        let new_start = match self.subpaths.last() {
            Some(last) if !last.is_closed() => None,
            Some(last) => Some(last.start().unwrap_or(start)),
            None => Some(start),
        };
        if let Some(new_start) = new_start {
            self.subpaths
                .push(Subpath::new(vec![PathOp::MoveTo(new_start)]));
        }

        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }
}

impl From<Vec<Subpath>> for Path {
    fn from(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }
}

impl FromIterator<Subpath> for Path {
    fn from_iter<T: IntoIterator<Item = Subpath>>(iter: T) -> Self {
        Self {
            subpaths: iter.into_iter().collect(),
        }
    }
}

impl Extend<Subpath> for Path {
    fn extend<T: IntoIterator<Item = Subpath>>(&mut self, iter: T) {
        self.subpaths.extend(iter);
    }
}
