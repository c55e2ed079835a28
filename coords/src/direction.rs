#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{axis::Axis, token_enum};

token_enum!(
    /// The hemisphere letter carrying the sign of a coordinate
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    Direction {
        /// Positive latitude
        North = "N",
        /// Negative latitude
        South = "S",
        /// Positive longitude
        East = "E",
        /// Negative longitude
        West = "W",
    } parse with ParseDirectionError, ignore case = true
);

impl Direction {
    /// The hemisphere of the signed decimal value on the given axis.
    ///
    /// Zero (including the negative zero) and `NaN` belong to the positive hemisphere.
    pub fn of(value: f64, axis: Axis) -> Self {
        let (positive, negative) = axis.hemispheres();
        if value < 0.0 {
            negative
        } else {
            positive
        }
    }

    /// The southern and western hemispheres have negative coordinates
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// The axis the letter is used with
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// Apply the sign of the hemisphere to the unsigned value
    pub fn apply_sign(self, magnitude: f64) -> f64 {
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Any token which is not a single hemisphere letter
    /// (in any case) gives `None` and thus treated as a positive direction.
    pub fn lenient(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}
