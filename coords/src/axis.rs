#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{MAX_LATITUDE, MAX_LONGITUDE},
    direction::Direction::{self, East, North, South, West},
    token_enum,
};

token_enum!(
    /// Which of the two geographic coordinates the value represents.
    /// Defines the valid range and the pair of hemisphere letters.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    Axis {
        /// The angle between the equatorial plane and the point, `[-90..90]`
        Latitude = "lat",
        /// The angle between the prime meridian and the point, `[-180..180]`
        Longitude = "lng",
    } parse with ParseAxisError
);

impl Axis {
    /// The maximum absolute value of the coordinate in degrees.
    pub const fn limit(self) -> u8 {
        match self {
            Self::Latitude => MAX_LATITUDE,
            Self::Longitude => MAX_LONGITUDE,
        }
    }

    /// The hemisphere letters for the positive and the negative values.
    pub const fn hemispheres(self) -> (Direction, Direction) {
        match self {
            Self::Latitude => (North, South),
            Self::Longitude => (East, West),
        }
    }

    /// Resolve an axis token with the latitude as the fallback:
    /// every token except the `"lng"` is treated as a latitude.
    ///
    /// Use it where a missing or unknown axis should still produce some output
    /// (hemisphere letters, input ranges).
    /// Validation never falls back, see [`is_valid_coordinate_token`](crate::engine::is_valid_coordinate_token).
    pub fn or_latitude(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            log::trace!("Unknown axis {:?}, falling back to latitude", token);
            Self::Latitude
        })
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::Latitude
    }
}
