//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements a fieldless enum where every variant is represented by a fixed token
/// along with its parsing error.
///
/// # Examples
///
/// ```compile_fail
/// token_enum!(
///     /// Hemisphere of a latitude
///     Pole { North = "N", South = "S" } parse with ParsePoleError, ignore case = true
/// );
/// ```
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$v_meta:meta])* $variant:ident = $token:literal),+ $(,)?
        } parse with $parse_err:ident $(, ignore case = $ignore_case:literal)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$v_meta])* $variant,)+
        }

        impl $name {
            /// The token which represents the value in the text
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        #[doc = concat!("Failed to parse the [`", stringify!($name), "`] from a token")]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $parse_err {
            failed: String,
        }

        impl $parse_err {
            /// The token which was rejected
            pub fn token(&self) -> &str {
                &self.failed
            }
        }

        impl ::std::fmt::Display for $parse_err {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl ::std::error::Error for $parse_err {}

        impl ::std::str::FromStr for $name {
            type Err = $parse_err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let ignore_case = false $(|| $ignore_case)?;
                $(
                    if $crate::utils::token_eq(s, $token, ignore_case) {
                        return Ok(Self::$variant);
                    }
                )+

                Err($parse_err {
                    failed: s.to_string(),
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.token())
            }
        }
    };
}

/// Compare the token with the expected one
pub(crate) fn token_eq(token: &str, expected: &str, ignore_case: bool) -> bool {
    if ignore_case {
        token.eq_ignore_ascii_case(expected)
    } else {
        token == expected
    }
}

/// Whether the exact decimal value of the number (positive and finite)
/// lies halfway between two neighbours having the given count of fractional digits.
fn is_decimal_tie(value: f64, digits: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exp) = match (bits >> 52) & 0x7ff {
        0 => (fraction, -1074_i64),
        biased => (fraction | (1_u64 << 52), biased as i64 - 1075),
    };

    // `value * 10^digits * 2 = mantissa * 5^digits * 2^(exp + digits + 1)`
    // is an odd integer only when the negative power of 2 eats exactly the trailing zero bits
    let shift = -(exp + digits as i64 + 1);
    shift >= 0 && i64::from(mantissa.trailing_zeros()) == shift
}

/// Render the number with the given count of fractional digits.
///
/// The exact decimal value of the number is rounded with the halves going away from zero,
/// and the negative zero has no sign.
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    let abs = value.abs();
    let abs = if is_decimal_tie(abs, digits) {
        // the closest larger float is still far below the next decimal digit
        f64::from_bits(abs.to_bits() + 1)
    } else {
        abs
    };

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, digits, abs)
}

/// Round the number to the given count of fractional digits.
///
/// The exact decimal value of the number is rounded (see [`to_fixed`]),
/// so `1.0005` which is stored as `1.000499999...` goes down
/// even though `1.0005 * 1000` gives exactly `1000.5`.
pub(crate) fn round_to_digits(value: f64, digits: usize) -> f64 {
    // adding the positive zero turns the `-0.0` into `0.0`
    to_fixed(value, digits).parse::<f64>().unwrap_or(f64::NAN) + 0.0
}

/// Whether the value lies between the two bounds given in any order.
/// `NaN` is never between.
pub(crate) fn is_between(value: f64, a: f64, b: f64, inclusive: bool) -> bool {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };

    if inclusive {
        (min..=max).contains(&value)
    } else {
        value > min && value < max
    }
}
