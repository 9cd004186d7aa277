//! swatch resolves colors given in any of the CSS color notations to a
//! quantized sRGB color, formatted as `#rrggbb` or `#rrggbbaa`.
//!
//! ```rust
//! use swatch::{oklch, parse_color};
//! assert_eq!(oklch(0.7, 0.1, "120deg", None)?.to_string(), "#96a85e");
//! assert_eq!(parse_color("lab(50 0 0)")?.to_string(), "#777777");
//! # Ok::<(), swatch::Error>(())
//! ```

#![deny(missing_docs)]

mod args;
mod color;
mod convert;
mod error;
mod functions;
mod hex;
mod math;
pub mod models;
mod named;
mod parse;
mod test;

pub use args::{Argument, Domain, IntoAlpha, IntoArgument, Kind, Policy};
pub use color::{Color, Component, ComponentDetails, Components, Flags, Space};
pub use error::{Error, Result};
pub use functions::{hsl, hwb, lab, lch, oklab, oklch, rgb};
pub use hex::{decode_hex_color, quantize, Hex};
pub use named::{named_color, WEB_PALETTE};
pub use parse::parse_color;
