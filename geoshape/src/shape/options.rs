use serde::{Deserialize, Serialize};

/// Radius of point markers used by default, in drawing surface units.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

/// Maximum nesting of geometry collections converted by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parameters of geometry conversion.
///
/// Missing fields take default values when deserialized, so options can be loaded from a partial config:
///
/// ```
/// use geoshape::ShapeOptions;
///
/// let options: ShapeOptions = serde_json::from_str(r#"{ "marker_radius": 3.0 }"#).unwrap();
/// assert_eq!(options, ShapeOptions::default().with_marker_radius(3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    /// Radius of the circle drawn for every point. It does not depend on the size of the target rectangle.
    pub marker_radius: f64,
    /// Maximum number of geometry collections nested into each other. Deeper collections are not converted.
    pub max_depth: usize,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            marker_radius: DEFAULT_MARKER_RADIUS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ShapeOptions {
    /// Sets the radius of point markers.
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    /// Sets the maximum nesting of geometry collections.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
