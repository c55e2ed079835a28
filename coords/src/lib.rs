//! Geographic coordinates in three notations:
//! decimal degrees (DD), degrees-minutes-seconds (DMS)
//! and degrees with decimal minutes (DDM).
//!
//! ```
//! use geod_coords::{engine, Axis};
//!
//! let dms = engine::to_dms(-25.938_285, Axis::Latitude);
//! assert_eq!(dms.to_string(), "25° 56' 17.826\" S");
//!
//! let back = engine::from_dms(25.0, 56.0, 17.826, Some(dms.direction));
//! assert!((back + 25.938_285).abs() < 1e-6);
//! ```
//!
//! Values outside of the axis range are rendered as a fixed message:
//!
//! ```
//! use geod_coords::{format::format_input, INVALID_COORDINATE};
//!
//! assert_eq!(format_input("95", "DMS", "lat").unwrap(), INVALID_COORDINATE);
//! assert_eq!(format_input("-0", "DD", "lat").unwrap(), "0.000000");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// degrees and minutes are whole numbers taken from `f64`
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use axis::Axis;
pub use consts::INVALID_COORDINATE;
pub use direction::Direction;
pub use errors::{FormatInputError, ParseAxisError, ParseDirectionError, ParseFormatError};
pub use notation::{ComponentForm, Format};

mod axis;
pub mod binding;
mod consts;
mod direction;
pub mod engine;
mod errors;
pub mod format;
mod notation;
mod utils;
