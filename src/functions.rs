//! The CSS color functions. Each one resolves its arguments, converts to sRGB
//! and quantizes:
//!
//! ```rust
//! use swatch::{hsl, rgb};
//! assert_eq!(rgb(102, 51, 153, None)?.to_string(), "#663399");
//! assert_eq!(hsl("120deg", "100%", "50%", 0)?.to_string(), "#00ff0000");
//! # Ok::<(), swatch::Error>(())
//! ```
//!
//! Color arguments are anything that implements [`IntoArgument`]: numbers,
//! [`crate::Argument`]s, or strings like `"50%"`, `"0.25turn"` and `"none"`.
//! Alpha is anything that implements [`IntoAlpha`], with `None` for no alpha.

use crate::{
    args::{IntoAlpha, IntoArgument},
    color::Space,
    error::Result,
    hex::Hex,
};

macro_rules! color_function {
    ($(#[$meta:meta])* $name:ident, $space:expr, $c0:ident, $c1:ident, $c2:ident) => {
        $(#[$meta])*
        pub fn $name(
            $c0: impl IntoArgument,
            $c1: impl IntoArgument,
            $c2: impl IntoArgument,
            alpha: impl IntoAlpha,
        ) -> Result<Hex> {
            $space.hex(
                [$c0.into_argument()?, $c1.into_argument()?, $c2.into_argument()?],
                alpha.into_alpha()?,
            )
        }
    };
}

color_function!(
    /// `rgb()`: channels in [0, 255] or percentages.
    rgb, Space::Srgb, red, green, blue
);
color_function!(
    /// `hsl()`: a hue angle, saturation and lightness.
    hsl, Space::Hsl, hue, saturation, lightness
);
color_function!(
    /// `hwb()`: a hue angle, whiteness and blackness.
    hwb, Space::Hwb, hue, whiteness, blackness
);
color_function!(
    /// `lab()`: CIE lightness in [0, 100] and the a and b axes.
    lab, Space::Lab, lightness, a, b
);
color_function!(
    /// `lch()`: CIE lightness, chroma and a hue angle.
    lch, Space::Lch, lightness, chroma, hue
);
color_function!(
    /// `oklab()`: Oklab lightness in [0, 1] and the a and b axes.
    oklab, Space::Oklab, lightness, a, b
);
color_function!(
    /// `oklch()`: Oklab lightness, chroma and a hue angle.
    oklch, Space::Oklch, lightness, chroma, hue
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args::Argument, error::Error, hex::decode_hex_color};

    #[test]
    fn primaries() {
        assert_eq!(hsl(0, "100%", "50%", None).unwrap().to_string(), "#ff0000");
        assert_eq!(hsl(120, "100%", "50%", None).unwrap().to_string(), "#00ff00");
        assert_eq!(hsl(240, "100%", "50%", None).unwrap().to_string(), "#0000ff");
        assert_eq!(hwb(0, "0%", "0%", None).unwrap().to_string(), "#ff0000");
        assert_eq!(hwb(0, "100%", "0%", None).unwrap().to_string(), "#ffffff");
        assert_eq!(rgb(102, 51, 153, None).unwrap().to_string(), "#663399");
    }

    #[test]
    fn negative_hues_wrap() {
        assert_eq!(
            hsl(-30, "100%", "50%", None),
            hsl(330, "100%", "50%", None)
        );
        assert_eq!(
            oklch(0.6, 0.1, "-0.25turn", None),
            oklch(0.6, 0.1, 270, None)
        );
    }

    #[test]
    fn every_function_agrees_on_chocolate() {
        let chocolate = decode_hex_color("#d2691e").unwrap();
        assert_eq!(rgb(210, 105, 30, None), Ok(chocolate));
        assert_eq!(lab(56.6293, 39.23708, 57.553769, None), Ok(chocolate));
        assert_eq!(lch(56.6293, 69.65619, 55.715927, None), Ok(chocolate));
        assert_eq!(oklab(0.634398, 0.099074, 0.119193, None), Ok(chocolate));
        assert_eq!(oklch(0.634398, 0.154992, 50.266483, None), Ok(chocolate));
    }

    #[test]
    fn alpha_is_optional_and_tagged() {
        assert_eq!(rgb(0, 0, 0, None), Ok(Hex::Rgb([0, 0, 0])));
        assert_eq!(
            rgb(0, 0, 0, Some(Argument::Number(1.0))),
            Ok(Hex::Rgba([0, 0, 0, 255]))
        );
        assert_eq!(rgb(0, 0, 0, Some(Argument::None)), Ok(Hex::Rgb([0, 0, 0])));
    }

    #[test]
    fn alpha_accepts_bare_values_and_strings() {
        assert_eq!(rgb(0, 0, 0, "50%"), Ok(Hex::Rgba([0, 0, 0, 128])));
        assert_eq!(rgb(0, 0, 0, 0.2), Ok(Hex::Rgba([0, 0, 0, 51])));
        assert_eq!(rgb(0, 0, 0, "none"), Ok(Hex::Rgb([0, 0, 0])));
        assert!(matches!(
            oklab(0.5, 0, 0, "150%"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn bare_alpha_above_one_is_out_of_range() {
        assert!(matches!(
            rgb(0, 0, 0, Some(Argument::Number(1.5))),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn unknown_units_are_malformed() {
        assert!(matches!(
            hsl("45xyz", "100%", "50%", None),
            Err(Error::MalformedArgument { .. })
        ));
    }

    #[test]
    fn oklch_green() {
        assert_eq!(oklch(0.7, 0.1, 120, None).unwrap().to_string(), "#96a85e");
    }
}
