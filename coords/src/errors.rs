use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

pub use crate::{
    axis::ParseAxisError, direction::ParseDirectionError, notation::ParseFormatError,
};

/// The free-form text cannot be turned into a coordinate value
#[derive(Debug, Clone, PartialEq)]
pub enum FormatInputError {
    /// The text contains no numeric token
    NoNumber(String),
    // this variant is practically impossible due to regex digits limitations
    /// The numeric token cannot be parsed as a float
    Float(ParseFloatError),
}

enum_trivial_from_impl!(ParseFloatError => FormatInputError:Float);

impl fmt::Display for FormatInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot read the coordinate: ")?;
        match self {
            Self::NoNumber(text) => write!(f, "no number found in {text:?}"),
            Self::Float(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for FormatInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoNumber(_) => None,
            Self::Float(inner) => Some(inner),
        }
    }
}
