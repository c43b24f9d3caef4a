use crate::cartesian::point::Point2;
use crate::cartesian::size::Size;
use num_traits::Num;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the drawing surface.
///
/// Projections receive the rectangle the drawing will occupy, so it is passed unchanged to every
/// position projected within one conversion.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Left edge.
    pub x_min: N,
    /// Top edge.
    pub y_min: N,
    /// Right edge.
    pub x_max: N,
    /// Bottom edge.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a rectangle from its corner coordinates.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a rectangle with the top-left corner at `origin` and the given size.
    pub fn from_origin_size(origin: Point2<N>, size: Size<N>) -> Self {
        Self {
            x_min: origin.x(),
            y_min: origin.y(),
            x_max: origin.x() + size.width(),
            y_max: origin.y() + size.height(),
        }
    }

    /// Left edge.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Right edge.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Top edge.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Bottom edge.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Horizontal extent.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    /// Size of the rectangle.
    pub fn size(&self) -> Size<N> {
        Size::new(self.width(), self.height())
    }

    /// Center point.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &Point2<N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Rectangle of zero size located at the point.
    pub fn from_point(p: &Point2<N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points, or `None` if the iterator is empty.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Point2<N>>) -> Option<Self>
    where
        N: 'a,
    {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }
}

impl Default for Rect<f64> {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
