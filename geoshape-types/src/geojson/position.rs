use crate::error::GeoshapeTypesError;
use crate::geo::Position;

impl TryFrom<&geojson::Position> for Position {
    type Error = GeoshapeTypesError;

    fn try_from(value: &geojson::Position) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [lon, lat] => Ok(Position::new(*lon, *lat)),
            [lon, lat, alt, ..] => Ok(Position::with_altitude(*lon, *lat, *alt)),
            _ => Err(GeoshapeTypesError::Conversion(
                "position must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}

impl From<Position> for geojson::Position {
    fn from(value: Position) -> Self {
        match value.alt() {
            Some(alt) => vec![value.lon(), value.lat(), alt],
            None => vec![value.lon(), value.lat()],
        }
    }
}
