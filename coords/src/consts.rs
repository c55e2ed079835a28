pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = MINUTES_IN_DEGREE as u16 * SECONDS_IN_MINUTE as u16;

/// Decimal digits kept in the arc seconds of DMS
pub(crate) const SECONDS_FD: usize = 3;
/// Decimal digits kept in the minutes of DDM
pub(crate) const DECIMAL_MINUTES_FD: usize = 5;
/// Decimal digits printed for a DD value
pub(crate) const DECIMAL_DEGREES_FD: usize = 6;

pub(crate) const MAX_LATITUDE: u8 = 90;
pub(crate) const MAX_LONGITUDE: u8 = 180;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

/// The message shown in place of a coordinate out of its axis range
pub const INVALID_COORDINATE: &str = "Invalid coordinate!";
