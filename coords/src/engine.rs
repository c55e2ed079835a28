//! Conversion of a signed decimal degrees value into its unsigned parts
//! (degrees, minutes, seconds, decimal minutes, hemisphere) and back.
//! <https://en.wikipedia.org/wiki/Decimal_degrees>
//!
//! All the functions are pure and never fail.
//! The parts are always taken from the absolute value,
//! the sign is carried only by the [`Direction`].
//!
//! The `NaN` is not guarded: `degrees` and `minutes` of it are `0`,
//! `seconds` and `decimal_minutes` are `NaN`, the direction is positive
//! and it is never a valid coordinate.

use crate::{
    axis::Axis,
    consts::{DECIMAL_MINUTES_FD, MINUTES_IN_DEGREE, SECONDS_FD, SECONDS_IN_DEGREE},
    direction::Direction,
    notation::ComponentForm,
    utils::{is_between, round_to_digits},
};

fn minutes_in_degree() -> f64 {
    f64::from(MINUTES_IN_DEGREE)
}

fn seconds_in_degree() -> f64 {
    f64::from(SECONDS_IN_DEGREE)
}

/// The fraction of the absolute value after the whole degrees
fn degree_fraction(value: f64) -> f64 {
    let abs = value.abs();
    abs - abs.trunc()
}

/// The whole number of degrees in the absolute value (truncated, not rounded).
pub fn degrees(value: f64) -> u32 {
    value.abs().trunc() as u32
}

/// The whole arc minutes in the fraction of a degree, `[0..59]`.
pub fn minutes(value: f64) -> u8 {
    (minutes_in_degree() * degree_fraction(value)).floor() as u8
}

/// The arc seconds left after the whole minutes, rounded to milliseconds.
///
/// The minutes and the seconds are rounded independently,
/// so the value `60` is possible, e.g. for `0.999_999_99` the result is `59' 60"`.
/// No carrying to the minutes occurs.
pub fn seconds(value: f64) -> f64 {
    let whole_minutes = f64::from(minutes(value));
    let rest = degree_fraction(value) - whole_minutes / minutes_in_degree();
    round_to_digits(seconds_in_degree() * rest, SECONDS_FD)
}

/// The fraction of the absolute value in minutes, rounded to 5 decimal digits.
pub fn decimal_minutes(value: f64) -> f64 {
    round_to_digits(minutes_in_degree() * degree_fraction(value), DECIMAL_MINUTES_FD)
}

/// The hemisphere of the value, the zero is the northern (or eastern) one.
pub fn direction(value: f64, axis: Axis) -> Direction {
    Direction::of(value, axis)
}

/// Split the value into degrees, whole minutes, seconds and the hemisphere
pub fn to_dms(value: f64, axis: Axis) -> ComponentForm {
    ComponentForm::dms(
        degrees(value),
        minutes(value),
        seconds(value),
        direction(value, axis),
    )
}

/// Split the value into degrees, decimal minutes and the hemisphere
pub fn to_ddm(value: f64, axis: Axis) -> ComponentForm {
    ComponentForm::ddm(degrees(value), decimal_minutes(value), direction(value, axis))
}

/// Compose the signed value from the degrees, minutes and seconds.
///
/// Delegates to the [`decimal_degrees`], so
/// **the seconds are ignored if the minutes have a fractional part**.
pub fn from_dms(degrees: f64, minutes: f64, seconds: f64, direction: Option<Direction>) -> f64 {
    decimal_degrees(degrees, minutes, seconds, direction)
}

/// Compose the signed value from the degrees and decimal minutes.
pub fn from_ddm(degrees: f64, minutes: f64, direction: Option<Direction>) -> f64 {
    decimal_degrees(degrees, minutes, 0.0, direction)
}

/// The single composition rule for both DMS and DDM.
///
/// The notation is detected by the minutes, not by the caller:
/// - fractional minutes mean DDM: `degrees + minutes / 60`, the `seconds` dropped;
/// - whole minutes mean DMS: `degrees + minutes / 60 + seconds / 3600`.
///
/// The result is negative for the southern and western directions.
/// Missing direction is positive.
pub fn decimal_degrees(
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: Option<Direction>,
) -> f64 {
    let magnitude = if minutes.fract() == 0.0 {
        degrees + minutes / minutes_in_degree() + seconds / seconds_in_degree()
    } else {
        degrees + minutes / minutes_in_degree()
    };

    match direction {
        Some(direction) => direction.apply_sign(magnitude),
        None => magnitude,
    }
}

/// Is the value strictly inside the axis range:
/// `(-90..90)` for latitude and `(-180..180)` for longitude.
///
/// The poles and the antimeridian themselves are **not** valid here,
/// use the [`is_valid_coordinate_inclusive`] to accept them.
pub fn is_valid_coordinate(value: f64, axis: Axis) -> bool {
    is_in_axis_range(value, axis, false)
}

/// Is the value inside the closed axis range:
/// `[-90..90]` for latitude and `[-180..180]` for longitude.
pub fn is_valid_coordinate_inclusive(value: f64, axis: Axis) -> bool {
    is_in_axis_range(value, axis, true)
}

/// The same as the [`is_valid_coordinate`] for the axis given by its token.
/// Any token except `"lat"` and `"lng"` makes the value invalid.
pub fn is_valid_coordinate_token(value: f64, axis: &str) -> bool {
    axis.parse::<Axis>()
        .is_ok_and(|axis| is_valid_coordinate(value, axis))
}

fn is_in_axis_range(value: f64, axis: Axis, inclusive: bool) -> bool {
    let limit = f64::from(axis.limit());
    is_between(value, -limit, limit, inclusive)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::direction::Direction::{East, North, South, West};

    const LAT: f64 = -25.938_285;
    const LNG: f64 = 28.193_479;

    #[test]
    fn degrees_are_truncated() {
        assert_eq!(degrees(LAT), 25);
        assert_eq!(degrees(LNG), 28);
        assert_eq!(degrees(-0.999), 0);
        assert_eq!(degrees(179.999_999), 179);
    }

    #[test]
    fn minutes_are_floored() {
        assert_eq!(minutes(LAT), 56);
        assert_eq!(minutes(12.5), 30);
        assert_eq!(minutes(-0.5), 30);
        assert_eq!(minutes(10.0), 0);
        assert_eq!(minutes(59.999_999), 59);
    }

    #[test]
    fn seconds_rounded_to_milli() {
        assert_eq!(seconds(LAT), 17.826);
        assert_eq!(seconds(48.858_222), 29.599);
        assert_eq!(seconds(-73.985_656), 8.362);
        assert_eq!(seconds(12.5), 0.0);
    }

    #[test]
    fn seconds_can_reach_sixty() {
        let value = 0.999_999_99;
        assert_eq!(degrees(value), 0);
        assert_eq!(minutes(value), 59);
        assert_eq!(seconds(value), 60.0);
    }

    #[test]
    fn decimal_minutes_rounded() {
        assert_eq!(decimal_minutes(LNG), 11.608_74);
        assert_eq!(decimal_minutes(-73.985_656), 59.139_36);
        assert_eq!(decimal_minutes(151.2093), 12.558);
        assert_eq!(decimal_minutes(-0.5), 30.0);
    }

    #[test]
    fn zero() {
        assert_eq!(degrees(0.0), 0);
        assert_eq!(minutes(0.0), 0);
        assert_eq!(seconds(0.0), 0.0);
        assert_eq!(decimal_minutes(0.0), 0.0);
    }

    #[test]
    fn directions() {
        assert_eq!(direction(0.0, Axis::Latitude), North);
        assert_eq!(direction(-0.0001, Axis::Latitude), South);
        assert_eq!(direction(0.0, Axis::Longitude), East);
        assert_eq!(direction(-0.0001, Axis::Longitude), West);
    }

    #[test]
    fn dms_of_southern_latitude() {
        let dms = to_dms(LAT, Axis::Latitude);
        assert_eq!(dms, ComponentForm::dms(25, 56, 17.826, South));
        assert_eq!(dms.seconds, Some(17.826));
    }

    #[test]
    fn dms_of_western_longitude() {
        let dms = to_dms(-73.985_656, Axis::Longitude);
        assert_eq!(dms.degrees, 73);
        assert_eq!(dms.minutes, 59.0);
        assert_eq!(dms.seconds, Some(8.362));
        assert_eq!(dms.direction, West);
    }

    #[test]
    fn ddm_of_eastern_longitude() {
        let ddm = to_ddm(LNG, Axis::Longitude);
        assert_eq!(ddm, ComponentForm::ddm(28, 11.608_74, East));
        assert!(ddm.seconds.is_none());
    }

    #[test]
    fn magnitudes_do_not_depend_on_sign() {
        for value in [0.5, 12.345_678, 89.999, 151.2093] {
            let pos = to_dms(value, Axis::Longitude);
            let neg = to_dms(-value, Axis::Longitude);
            assert_eq!(pos.degrees, neg.degrees);
            assert_eq!(pos.minutes, neg.minutes);
            assert_eq!(pos.seconds, neg.seconds);
            assert_eq!(pos.direction, East);
            assert_eq!(neg.direction, West);
        }
    }

    #[test]
    fn from_dms_south() {
        let value = from_dms(25.0, 56.0, 17.826, Some(South));
        assert!((value - LAT).abs() < 1e-6);
    }

    #[test]
    fn from_ddm_east() {
        let value = from_ddm(28.0, 11.608_74, Some(East));
        assert!((value - LNG).abs() < 1e-6);
    }

    #[test]
    fn fractional_minutes_take_ddm_branch() {
        let expected = 25.0 + 56.5 / 60.0;
        assert_eq!(from_dms(25.0, 56.5, 0.0, Some(North)), expected);

        // seconds are silently dropped
        assert_eq!(from_dms(25.0, 56.5, 30.0, Some(North)), expected);
        assert_eq!(from_dms(25.0, 56.5, 59.999, None), expected);
    }

    #[test]
    fn whole_minutes_take_dms_branch() {
        let value = from_dms(25.0, 56.0, 30.0, Some(North));
        assert_eq!(value, 25.0 + 56.0 / 60.0 + 30.0 / 3600.0);
    }

    #[test]
    fn ddm_with_whole_minutes() {
        assert_eq!(from_ddm(12.0, 30.0, Some(West)), -12.5);
    }

    #[test]
    fn missing_direction_is_positive() {
        assert_eq!(from_ddm(12.0, 30.0, None), 12.5);
        assert_eq!(from_dms(12.0, 30.0, 0.0, Direction::lenient("x")), 12.5);
    }

    #[test]
    fn lower_case_direction_is_negative() {
        assert_eq!(from_ddm(12.0, 30.0, Direction::lenient("s")), -12.5);
        assert_eq!(from_ddm(12.0, 30.0, Direction::lenient("w")), -12.5);
    }

    #[test]
    fn missing_parts_are_zero() {
        assert_eq!(from_dms(0.0, 0.0, 0.0, None), 0.0);
        assert_eq!(from_dms(7.0, 0.0, 0.0, Some(South)), -7.0);
    }

    #[test]
    fn dms_round_trip() {
        let steps = 20_000;
        for i in 0..=steps {
            let value = -89.999 + f64::from(i) * (179.998 / f64::from(steps));
            let dms = to_dms(value, Axis::Latitude);
            let back = from_dms(
                f64::from(dms.degrees),
                dms.minutes,
                dms.seconds.unwrap_or_default(),
                Some(dms.direction),
            );
            assert!((back - value).abs() < 1e-3, "{value} -> {dms} -> {back}");
        }
    }

    #[test]
    fn ddm_round_trip() {
        let steps = 20_000;
        for i in 0..=steps {
            let value = -179.999 + f64::from(i) * (359.998 / f64::from(steps));
            let ddm = to_ddm(value, Axis::Longitude);
            let back = from_ddm(f64::from(ddm.degrees), ddm.minutes, Some(ddm.direction));
            assert!(
                (back - value).abs() < 1e-5 / 60.0,
                "{value} -> {ddm} -> {back}"
            );
        }
    }

    #[test]
    fn form_round_trip() {
        for value in [LAT, LNG, -0.25, 45.0, 179.5] {
            let dms = to_dms(value, Axis::Longitude);
            let ddm = to_ddm(value, Axis::Longitude);
            assert!((dms.to_decimal() - value).abs() < 1e-3);
            assert!((ddm.to_decimal() - value).abs() < 1e-5 / 60.0);
        }
    }

    #[test]
    fn valid_latitude() {
        assert!(is_valid_coordinate(89.999_999, Axis::Latitude));
        assert!(is_valid_coordinate(-89.999_999, Axis::Latitude));
        assert!(is_valid_coordinate(0.0, Axis::Latitude));
        assert!(!is_valid_coordinate(90.0, Axis::Latitude));
        assert!(!is_valid_coordinate(-90.0, Axis::Latitude));
        assert!(!is_valid_coordinate(120.0, Axis::Latitude));
    }

    #[test]
    fn valid_longitude() {
        assert!(is_valid_coordinate(179.999, Axis::Longitude));
        assert!(is_valid_coordinate(120.0, Axis::Longitude));
        assert!(!is_valid_coordinate(180.0, Axis::Longitude));
        assert!(!is_valid_coordinate(-180.0, Axis::Longitude));
    }

    #[test]
    fn inclusive_accepts_poles() {
        assert!(is_valid_coordinate_inclusive(90.0, Axis::Latitude));
        assert!(is_valid_coordinate_inclusive(-90.0, Axis::Latitude));
        assert!(is_valid_coordinate_inclusive(180.0, Axis::Longitude));
        assert!(!is_valid_coordinate_inclusive(90.000_1, Axis::Latitude));
    }

    #[test]
    fn nan_is_invalid() {
        assert!(!is_valid_coordinate(f64::NAN, Axis::Latitude));
        assert!(!is_valid_coordinate_inclusive(f64::NAN, Axis::Longitude));
    }

    #[test]
    fn valid_by_token() {
        assert!(is_valid_coordinate_token(45.0, "lat"));
        assert!(is_valid_coordinate_token(120.0, "lng"));
        assert!(!is_valid_coordinate_token(120.0, "lat"));
        assert!(!is_valid_coordinate_token(0.0, "unknown"));
        assert!(!is_valid_coordinate_token(0.0, ""));
        assert!(!is_valid_coordinate_token(45.0, "LAT"));
    }

    #[test]
    fn nan_is_not_guarded() {
        assert_eq!(degrees(f64::NAN), 0);
        assert_eq!(minutes(f64::NAN), 0);
        assert!(seconds(f64::NAN).is_nan());
        assert!(decimal_minutes(f64::NAN).is_nan());
        assert!(from_dms(f64::NAN, 0.0, 0.0, None).is_nan());
    }
}
