use serde::{Deserialize, Serialize};

/// Geographic position: longitude and latitude in degrees, with an optional altitude.
///
/// No range check is done on the values: positions outside of `[-180, 180] x [-90, 90]` are kept as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Position {
    lon: f64,
    lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<f64>,
}

impl Position {
    /// Creates a new position from longitude and latitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a new position with altitude.
    pub const fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Altitude, if the position has one.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

/// Creates a new [`Position`] from longitude and latitude values (in degrees).
///
/// ```
/// use geoshape_types::lonlat;
///
/// let position = lonlat!(125.6, 10.1);
/// assert_eq!(position.lon(), 125.6);
/// assert_eq!(position.lat(), 10.1);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::geo::Position::new($lon, $lat)
    };
}
