//! Error types used by the crate.

use geoshape_types::error::GeoshapeTypesError;
use thiserror::Error;

/// Geoshape error type.
#[derive(Debug, Error)]
pub enum GeoshapeError {
    /// Geometry collections are nested deeper than allowed by
    /// [`ShapeOptions::max_depth`](crate::ShapeOptions::max_depth).
    #[error("geometry collection nesting depth {depth} exceeds the limit of {max_depth}")]
    NestingTooDeep {
        /// Deepest collection nesting level of the geometry.
        depth: usize,
        /// Configured limit.
        max_depth: usize,
    },
    /// Input geometry could not be converted into the geometry model.
    #[error(transparent)]
    Types(#[from] GeoshapeTypesError),
}
