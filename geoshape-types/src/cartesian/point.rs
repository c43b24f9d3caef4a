use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// A point on the drawing surface.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: Copy> Point2<Num> {
    /// Horizontal coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> Num {
        self.y
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2] {
        [self.x, self.y]
    }

    /// Returns a point moved by `dx` and `dy`.
    pub fn translate(&self, dx: Num, dy: Num) -> Self
    where
        Num: std::ops::Add<Num, Output = Num>,
    {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl<Num> From<[Num; 2]> for Point2<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self { x, y }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn translate() {
        let p = Point2::new(1.0, 2.0).translate(5.0, -1.0);
        assert_eq!(p, Point2::new(6.0, 1.0));
        assert_eq!(p.coords(), [6.0, 1.0]);
    }

    #[test]
    fn approx_eq() {
        assert_abs_diff_eq!(
            Point2::new(0.1 + 0.2, 1.0),
            Point2::new(0.3, 1.0),
            epsilon = 1e-9
        );
    }
}
