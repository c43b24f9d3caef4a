use crate::geo::Position;
use serde::{Deserialize, Serialize};

/// Open sequence of positions.
///
/// A valid line string has at least two positions, but this is not enforced: shorter lines are kept and rendered on
/// a best effort basis.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LineString {
    positions: Vec<Position>,
}

impl std::ops::Deref for LineString {
    type Target = Vec<Position>;

    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}

impl LineString {
    /// Creates a new line string.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Iterates over the positions of the line in order.
    pub fn iter_positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Returns the underlying positions.
    pub fn into_inner(self) -> Vec<Position> {
        self.positions
    }
}

impl From<Vec<Position>> for LineString {
    fn from(positions: Vec<Position>) -> Self {
        Self::new(positions)
    }
}

impl FromIterator<Position> for LineString {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Closed sequence of positions bounding a polygon.
///
/// The ring is closed by its data: the last position repeats the first one. No closing segment is ever added, so a
/// ring that does not repeat its first position is drawn as it is.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LinearRing {
    positions: Vec<Position>,
}

impl std::ops::Deref for LinearRing {
    type Target = Vec<Position>;

    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}

impl LinearRing {
    /// Creates a new ring.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Iterates over the positions of the ring, including the repeated last one.
    pub fn iter_positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Returns true if the ring has at least 4 positions and the last one equals the first one.
    pub fn is_closed(&self) -> bool {
        self.positions.len() >= 4 && self.positions.first() == self.positions.last()
    }

    /// Returns the underlying positions.
    pub fn into_inner(self) -> Vec<Position> {
        self.positions
    }
}

impl From<Vec<Position>> for LinearRing {
    fn from(positions: Vec<Position>) -> Self {
        Self::new(positions)
    }
}

impl FromIterator<Position> for LinearRing {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
