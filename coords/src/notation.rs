use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN},
    direction::Direction,
    engine, token_enum,
};

token_enum!(
    /// The notation used to write a coordinate down
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    Format {
        /// Signed decimal degrees: `-25.938285`
        DecimalDegrees = "DD",
        /// Degrees, whole minutes and seconds: `25° 56' 17.826" S`
        DegreesMinutesSeconds = "DMS",
        /// Degrees and decimal minutes: `25° 56.2971' S`
        DegreesDecimalMinutes = "DDM",
    } parse with ParseFormatError
);

impl Default for Format {
    fn default() -> Self {
        Self::DecimalDegrees
    }
}

/// Unsigned parts of a coordinate with the hemisphere letter.
///
/// The same shape holds both DMS (with the `seconds`)
/// and DDM (no `seconds`, fractional `minutes`) notations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentForm {
    /// Whole degrees of the absolute value
    pub degrees: u32,
    /// Whole minutes for DMS, decimal minutes for DDM
    pub minutes: f64,
    /// Arc seconds, only for DMS
    pub seconds: Option<f64>,
    /// The sign of the value
    pub direction: Direction,
}

impl ComponentForm {
    /// Construct the DMS form
    pub fn dms(degrees: u32, minutes: u8, seconds: f64, direction: Direction) -> Self {
        Self {
            degrees,
            minutes: f64::from(minutes),
            seconds: Some(seconds),
            direction,
        }
    }

    /// Construct the DDM form
    pub fn ddm(degrees: u32, minutes: f64, direction: Direction) -> Self {
        Self {
            degrees,
            minutes,
            seconds: None,
            direction,
        }
    }

    /// The notation of the form
    pub const fn format(&self) -> Format {
        if self.seconds.is_some() {
            Format::DegreesMinutesSeconds
        } else {
            Format::DegreesDecimalMinutes
        }
    }

    /// Compose the signed decimal value back.
    /// The missing seconds are zero.
    pub fn to_decimal(&self) -> f64 {
        engine::decimal_degrees(
            f64::from(self.degrees),
            self.minutes,
            self.seconds.unwrap_or_default(),
            Some(self.direction),
        )
    }
}

impl fmt::Display for ComponentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}{} ", self.degrees, DEGREE_SIGN, self.minutes, ARC_MINUTE_SIGN)?;
        if let Some(seconds) = self.seconds {
            write!(f, "{}{} ", seconds, ARC_SECOND_SIGN)?;
        }
        write!(f, "{}", self.direction)
    }
}
