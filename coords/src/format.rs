//! Human-readable rendering of a coordinate in the chosen notation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    axis::Axis,
    consts::{DECIMAL_DEGREES_FD, INVALID_COORDINATE},
    engine::{is_valid_coordinate, to_ddm, to_dms},
    errors::FormatInputError,
    notation::Format,
    utils::to_fixed,
};

lazy_static! {
    // optionally signed number with the optional decimal part
    static ref RE_NUMBER: Regex = Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("Number regex is valid");
}

/// The first number found in the text, all the other characters are ignored.
///
/// ```
/// use geod_coords::format::extract_number;
///
/// assert_eq!(extract_number("lat: -25.938285°"), Some(-25.938_285));
/// assert_eq!(extract_number("n/a"), None);
/// ```
pub fn extract_number(text: &str) -> Option<f64> {
    try_extract_number(text).ok()
}

fn try_extract_number(text: &str) -> Result<f64, FormatInputError> {
    let found = RE_NUMBER
        .find(text)
        .ok_or_else(|| FormatInputError::NoNumber(text.to_string()))?;
    Ok(found.as_str().parse()?)
}

/// Render the value in the given notation.
///
/// A value outside of the axis range (see [`is_valid_coordinate`])
/// is replaced with the [`INVALID_COORDINATE`] message.
pub fn format_value(value: f64, format: Format, axis: Axis) -> String {
    if !is_valid_coordinate(value, axis) {
        log::debug!("{} is not a valid {} coordinate", value, axis);
        return INVALID_COORDINATE.to_string();
    }

    match format {
        Format::DegreesMinutesSeconds => to_dms(value, axis).to_string(),
        Format::DegreesDecimalMinutes => to_ddm(value, axis).to_string(),
        Format::DecimalDegrees => to_fixed(value, DECIMAL_DEGREES_FD),
    }
}

/// Render the number found in the free-form text.
///
/// The notation and the axis are given by their tokens:
/// - unknown notation is rendered as the decimal degrees;
/// - unknown axis makes any value invalid.
///
/// # Errors
/// When the text contains no number at all.
pub fn format_input(text: &str, format: &str, axis: &str) -> Result<String, FormatInputError> {
    let value = try_extract_number(text)?;
    log::debug!("Extracted {} from {:?}", value, text);

    let format = format.parse::<Format>().unwrap_or_else(|_| {
        log::trace!("Unknown format {:?}, using the default one", format);
        Format::default()
    });

    match axis.parse::<Axis>() {
        Ok(axis) => Ok(format_value(value, format, axis)),
        Err(err) => {
            log::debug!("{}", err);
            Ok(INVALID_COORDINATE.to_string())
        }
    }
}

/// The same as [`format_input`], but the absent text is rendered as an empty string.
///
/// # Errors
/// When the text is present but contains no number.
pub fn format_optional(
    text: Option<&str>,
    format: &str,
    axis: &str,
) -> Result<String, FormatInputError> {
    text.map_or_else(|| Ok(String::new()), |text| format_input(text, format, axis))
}
