//! Geoshape converts geographic geometries (points, lines, polygons and their collections, as defined by the GeoJSON
//! geometry model) into 2d vector paths ready to be filled or stroked by a renderer.
//!
//! # Quick start
//!
//! ```
//! use geoshape::geoshape_types::cartesian::Rect;
//! use geoshape::geoshape_types::impls::{LinearRing, Polygon};
//! use geoshape::geoshape_types::projection::IdentityProjection;
//! use geoshape::geoshape_types::{lonlat, Geometry};
//!
//! let square = LinearRing::new(vec![
//!     lonlat!(10.0, 50.0),
//!     lonlat!(50.0, 50.0),
//!     lonlat!(50.0, 100.0),
//!     lonlat!(10.0, 100.0),
//!     lonlat!(10.0, 50.0),
//! ]);
//! let geometry = Geometry::Polygon(Polygon::from(square));
//!
//! let path = geoshape::to_path(&geometry, &IdentityProjection, &Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(path.len(), 1);
//! ```
//!
//! # Main components
//!
//! * [`Projection`](geoshape_types::projection::Projection) maps every geographic position into the drawing surface.
//!   Geoshape does not implement map projections itself: any deterministic function of a position and the target
//!   rectangle will do, and [`IdentityProjection`](geoshape_types::projection::IdentityProjection) is provided for
//!   data that is already in drawing units.
//! * [`to_path`] and [`ShapeOptions`] walk the geometry and emit drawing operations, see [`shape`] module for the
//!   shape of every geometry type.
//! * [`Path`] records the operations. Instead of recording, the operations can be sent into any [`PathSink`] with
//!   [`build_path`], e.g. [`LyonSink`](path::LyonSink) that builds a path for `lyon` tessellators.
//! * [`FeatureShape`] keeps a feature geometry together with its projection.
//!
//! Conversion is a pure function of its input and can run on any number of threads at once. Nothing is logged unless
//! a logger is installed by the application (the crate uses the [`log`] facade).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod error;
mod feature_shape;
pub mod path;
pub mod shape;

pub use feature_shape::FeatureShape;
pub use geoshape_types;
pub use path::{Path, PathOp, PathSink, Subpath};
pub use shape::{build_path, to_path, ShapeOptions};
