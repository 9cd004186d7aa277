//! Models are structs that represent a color in a specified notation. They
//! are a type safe way to convert each notation to sRGB.

use crate::{
    args::Domain,
    color::{Components, Space},
};

mod hsl;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use hsl::*;
pub use hwb::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;

/// A color notation accepted by one of the CSS color functions.
///
/// Adding a notation means implementing this trait: the domains of its three
/// arguments and the conversion to sRGB.
pub trait Notation: From<Components> {
    /// The tag of this notation.
    const SPACE: Space;

    /// The domains of the three color arguments, in order.
    const DOMAINS: [Domain; 3];

    /// Build the model from arguments resolved in [`Self::DOMAINS`].
    fn from_resolved(components: Components) -> Self {
        Self::from(components)
    }

    /// Convert this color to gamma encoded sRGB. The result may be out of
    /// gamut.
    fn to_srgb(&self) -> Srgb;
}
