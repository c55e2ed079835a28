//! The view-model of an input control editing one coordinate.
//!
//! The control shows a set of component fields (depending on the [`Format`])
//! and keeps the decimal degrees as its model value.
//! The synchronization is pull-based:
//! - [`CoordinateInput::set_model`] renders the component fields from the decimal value;
//! - [`CoordinateInput::edit`] changes a single field and returns the decimal value recomputed
//!   for the active notation, so the caller can publish it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    axis::Axis,
    direction::Direction,
    engine::{decimal_minutes, degrees, direction, from_ddm, from_dms, minutes, seconds},
    notation::Format,
};

/// Input constraints of a numeric field
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldLimits {
    /// The smallest value allowed
    pub min: f64,
    /// The largest value allowed
    pub max: f64,
    /// The increment, `None` for any
    pub step: Option<f64>,
}

/// Whole minutes of the DMS notation
pub const MINUTES_LIMITS: FieldLimits = FieldLimits {
    min: 0.0,
    max: 59.0,
    step: Some(1.0),
};

/// Seconds of the DMS notation
pub const SECONDS_LIMITS: FieldLimits = FieldLimits {
    min: 0.0,
    max: 59.999,
    step: None,
};

/// Decimal minutes of the DDM notation
pub const DECIMAL_MINUTES_LIMITS: FieldLimits = FieldLimits {
    min: 0.0,
    max: 59.999_99,
    step: None,
};

/// All the fields the control can show.
/// Every field is optional, since the user can clear it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewValue {
    /// The value in the DD notation
    pub decimal_degrees: Option<f64>,
    /// Whole degrees (both DMS and DDM)
    pub degrees: Option<f64>,
    /// Whole minutes (DMS)
    pub minutes: Option<f64>,
    /// Seconds (DMS)
    pub seconds: Option<f64>,
    /// Decimal minutes (DDM)
    pub decimal_minutes: Option<f64>,
    /// The hemisphere letter (both DMS and DDM)
    pub direction: Option<Direction>,
}

impl ViewValue {
    /// Fill all the fields from the decimal value
    pub fn from_model(value: f64, axis: Axis) -> Self {
        Self {
            decimal_degrees: Some(value),
            degrees: Some(f64::from(degrees(value))),
            minutes: Some(f64::from(minutes(value))),
            seconds: Some(seconds(value)),
            decimal_minutes: Some(decimal_minutes(value)),
            direction: Some(direction(value, axis)),
        }
    }

    /// Compose the decimal value according to the notation.
    /// Missing parts are zeros, missing direction is positive.
    ///
    /// For the DD only the `decimal_degrees` field matters and it can be empty.
    pub fn to_model(&self, format: Format) -> Option<f64> {
        let deg = self.degrees.unwrap_or_default();
        match format {
            Format::DegreesMinutesSeconds => Some(from_dms(
                deg,
                self.minutes.unwrap_or_default(),
                self.seconds.unwrap_or_default(),
                self.direction,
            )),
            Format::DegreesDecimalMinutes => Some(from_ddm(
                deg,
                self.decimal_minutes.unwrap_or_default(),
                self.direction,
            )),
            Format::DecimalDegrees => self.decimal_degrees,
        }
    }
}

/// A change of a single field made by the user
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Edit {
    /// New degrees
    Degrees(Option<f64>),
    /// New whole minutes
    Minutes(Option<f64>),
    /// New seconds
    Seconds(Option<f64>),
    /// New decimal minutes
    DecimalMinutes(Option<f64>),
    /// New hemisphere
    Direction(Option<Direction>),
    /// New decimal degrees
    DecimalDegrees(Option<f64>),
}

/// The state of the input control for a single coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateInput {
    format: Format,
    axis: Axis,
    view: ViewValue,
}

impl CoordinateInput {
    /// An empty control
    pub fn new(format: Format, axis: Axis) -> Self {
        Self {
            format,
            axis,
            view: ViewValue::default(),
        }
    }

    /// An empty control configured by tokens.
    ///
    /// The missing or unknown format is DD,
    /// any axis other than `"lng"` is a latitude.
    pub fn with_tokens(format: Option<&str>, axis: Option<&str>) -> Self {
        let format = format.and_then(|f| f.parse::<Format>().ok()).unwrap_or_default();
        let axis = axis.map(Axis::or_latitude).unwrap_or_default();
        Self::new(format, axis)
    }

    /// The notation of the control
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The axis of the control
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The fields as they are shown now
    pub const fn view(&self) -> &ViewValue {
        &self.view
    }

    /// Render the fields from the model value.
    /// An empty model clears all the fields.
    pub fn set_model(&mut self, value: Option<f64>) {
        log::debug!("{} model set to {:?}", self.axis, value);
        self.view = value.map_or_else(ViewValue::default, |value| {
            ViewValue::from_model(value, self.axis)
        });
    }

    /// Apply the change to the field and return the recomputed model value
    pub fn edit(&mut self, edit: Edit) -> Option<f64> {
        let view = &mut self.view;
        match edit {
            Edit::Degrees(val) => view.degrees = val,
            Edit::Minutes(val) => view.minutes = val,
            Edit::Seconds(val) => view.seconds = val,
            Edit::DecimalMinutes(val) => view.decimal_minutes = val,
            Edit::Direction(val) => view.direction = val,
            Edit::DecimalDegrees(val) => view.decimal_degrees = val,
        }

        let model = self.model_value();
        log::debug!("{:?} on {} {}: model is {:?}", edit, self.format, self.axis, model);
        model
    }

    /// The model value composed from the current fields
    pub fn model_value(&self) -> Option<f64> {
        self.view.to_model(self.format)
    }

    /// The bounds of the degrees field
    pub fn degree_range(&self) -> (i16, i16) {
        let limit = i16::from(self.axis.limit());
        (-limit, limit)
    }

    /// The hemisphere letters to choose from
    pub fn direction_options(&self) -> [Direction; 2] {
        let (positive, negative) = self.axis.hemispheres();
        [positive, negative]
    }
}
