//! Types of the drawing surface: points and rectangles in cartesian coordinates.

mod point;
mod rect;
mod size;

pub use point::Point2;
pub use rect::Rect;
pub use size::Size;
