//! Projection contract: conversion of a geographic [`Position`] into a point on the drawing surface.

mod identity;

pub use identity::IdentityProjection;

use crate::cartesian::{Point2, Rect};
use crate::geo::Position;
use std::sync::Arc;

/// Maps a geographic position into the drawing surface occupied by `rect`.
///
/// Implementations must be deterministic (the same position and rectangle always give the same point) and total:
/// every finite input is mapped, including values outside of the valid longitude/latitude range. The resulting point
/// is not required to lie inside `rect`.
///
/// Projections are shared between conversions that can run on different threads, so they carry no mutable state.
pub trait Projection: Send + Sync {
    /// Projects a single position.
    fn project(&self, position: &Position, rect: &Rect) -> Point2;
}

impl<P: Projection + ?Sized> Projection for &P {
    fn project(&self, position: &Position, rect: &Rect) -> Point2 {
        (**self).project(position, rect)
    }
}

impl<P: Projection + ?Sized> Projection for Box<P> {
    fn project(&self, position: &Position, rect: &Rect) -> Point2 {
        (**self).project(position, rect)
    }
}

impl<P: Projection + ?Sized> Projection for Arc<P> {
    fn project(&self, position: &Position, rect: &Rect) -> Point2 {
        (**self).project(position, rect)
    }
}

/// Projection defined by a function or a closure.
///
/// ```
/// use geoshape_types::cartesian::{Point2, Rect};
/// use geoshape_types::lonlat;
/// use geoshape_types::projection::{FnProjection, Projection};
///
/// let flip = FnProjection::new(|p: &geoshape_types::geo::Position, rect: &Rect| {
///     Point2::new(p.lon(), rect.y_max - p.lat())
/// });
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert_eq!(flip.project(&lonlat!(10.0, 30.0), &rect), Point2::new(10.0, 70.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnProjection<F>(F);

impl<F> FnProjection<F>
where
    F: Fn(&Position, &Rect) -> Point2 + Send + Sync,
{
    /// Wraps the function.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Projection for FnProjection<F>
where
    F: Fn(&Position, &Rect) -> Point2 + Send + Sync,
{
    fn project(&self, position: &Position, rect: &Rect) -> Point2 {
        (self.0)(position, rect)
    }
}
