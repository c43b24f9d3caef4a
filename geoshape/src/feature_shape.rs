//! [`FeatureShape`] binds a feature geometry with the projection it is drawn with.

use crate::path::Path;
use crate::shape::ShapeOptions;
use geoshape_types::cartesian::Rect;
use geoshape_types::projection::Projection;
use geoshape_types::Geometry;

/// Drawable shape of a single feature.
///
/// A feature may have no geometry at all (`null` geometry in GeoJSON), in which case its path is empty.
#[derive(Debug, Clone)]
pub struct FeatureShape<P> {
    geometry: Option<Geometry>,
    projection: P,
    options: ShapeOptions,
}

impl<P: Projection> FeatureShape<P> {
    /// Creates a new shape with default [`ShapeOptions`].
    pub fn new(geometry: impl Into<Option<Geometry>>, projection: P) -> Self {
        Self {
            geometry: geometry.into(),
            projection,
            options: ShapeOptions::default(),
        }
    }

    /// Replaces conversion options.
    pub fn with_options(mut self, options: ShapeOptions) -> Self {
        self.options = options;
        self
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Projection used to draw the feature.
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Conversion options.
    pub fn options(&self) -> &ShapeOptions {
        &self.options
    }

    /// Path of the feature in the given rectangle.
    pub fn path(&self, rect: &Rect) -> Path {
        match &self.geometry {
            Some(geometry) => self.options.to_path(geometry, &self.projection, rect),
            None => Path::new(),
        }
    }
}

#[cfg(feature = "geojson")]
impl<P: Projection> FeatureShape<P> {
    /// Creates a shape of a GeoJSON feature. Properties of the feature are not used.
    pub fn from_feature(
        feature: &geojson::Feature,
        projection: P,
    ) -> Result<Self, crate::error::GeoshapeError> {
        let geometry = feature
            .geometry
            .as_ref()
            .map(Geometry::try_from)
            .transpose()?;
        Ok(Self::new(geometry, projection))
    }
}
