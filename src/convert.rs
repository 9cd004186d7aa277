//! Every notation is converted to sRGB through a single pipeline: the
//! arguments are resolved in the notation's domains, the model converts its
//! components to sRGB, the result is clipped into gamut and quantized.
//!
//! ```rust
//! use swatch::{Argument, Color, Space};
//! let color = Color::resolve(
//!     Space::Oklch,
//!     [Argument::Number(0.7), Argument::Number(0.1), "120deg".parse()?],
//!     None,
//! )?;
//! assert_eq!(color.to_hex().to_string(), "#96a85e");
//! # Ok::<(), swatch::Error>(())
//! ```

use crate::{
    args::{Argument, Domain, Policy},
    color::{Color, Component, Components, Space},
    error::Result,
    hex::Hex,
    models::{Hsl, Hwb, Lab, Lch, Notation, Oklab, Oklch, Srgb, SrgbLinear, ToXyz},
};

/// Run `$body` with `$m` bound to the model type of `$space`.
macro_rules! with_model {
    ($space:expr, $m:ident => $body:expr) => {
        match $space {
            Space::Srgb => {
                type $m = Srgb;
                $body
            }
            Space::Hsl => {
                type $m = Hsl;
                $body
            }
            Space::Hwb => {
                type $m = Hwb;
                $body
            }
            Space::Lab => {
                type $m = Lab;
                $body
            }
            Space::Lch => {
                type $m = Lch;
                $body
            }
            Space::Oklab => {
                type $m = Oklab;
                $body
            }
            Space::Oklch => {
                type $m = Oklch;
                $body
            }
        }
    };
}

impl Space {
    /// The domains of the three color arguments of this notation.
    pub fn domains(&self) -> [Domain; 3] {
        with_model!(self, M => M::DOMAINS)
    }

    /// Resolve the arguments of this notation's color function and encode the
    /// result as hex.
    pub fn hex(&self, arguments: [Argument; 3], alpha: Option<Argument>) -> Result<Hex> {
        Color::resolve(*self, arguments, alpha).map(|color| color.to_hex())
    }
}

impl Color {
    /// Resolve the arguments of a color function in the given notation. The
    /// `none` keyword marks a component as missing; a missing alpha means the
    /// color has no alpha at all.
    pub fn resolve(
        space: Space,
        arguments: [Argument; 3],
        alpha: Option<Argument>,
    ) -> Result<Self> {
        let [d0, d1, d2] = space.domains();
        let [a0, a1, a2] = arguments;

        let c0 = a0.resolve(&d0)?;
        let c1 = a1.resolve(&d1)?;
        let c2 = a2.resolve(&d2)?;
        let alpha = match alpha {
            Some(alpha) => alpha.resolve(&Domain::ALPHA)?,
            None => None,
        };

        let mut color = Color::new(space, c0, c1, c2, alpha);
        let resolved = color.components;
        color.components = with_model!(space, M => M::from_resolved(resolved).to_components());
        Ok(color)
    }

    /// Convert this color to sRGB, clipped into gamut.
    pub fn to_srgb(&self) -> Srgb {
        with_model!(self.space, M => M::from(self.components).to_srgb()).clip()
    }

    /// Convert this color to sRGB and quantize it.
    pub fn to_hex(&self) -> Hex {
        let hex = Hex::from_srgb(&self.to_srgb(), self.alpha());
        tracing::trace!(
            space = %self.space,
            components = %self.components,
            %hex,
            "resolved color"
        );
        hex
    }
}

/// The Lab and Oklab axes have no upper bound in CSS. Values far past these
/// limits overflow `f32` when cubed on the way to sRGB.
const LAB_LIMIT: Component = 1.0e12;
const OKLAB_LIMIT: Component = 1.0e9;

const CHANNEL: Domain = Domain::number(0.0, 255.0, 255.0, Policy::Clamp);
const LAB_LIGHTNESS: Domain = Domain::number(0.0, 100.0, 100.0, Policy::Clamp);
const LAB_AXIS: Domain = Domain::number(-LAB_LIMIT, LAB_LIMIT, 125.0, Policy::Clamp);
const LCH_CHROMA: Domain = Domain::number(0.0, LAB_LIMIT, 150.0, Policy::Clamp);
const OKLAB_LIGHTNESS: Domain = Domain::number(0.0, 1.0, 1.0, Policy::Clamp);
const OKLAB_AXIS: Domain = Domain::number(-OKLAB_LIMIT, OKLAB_LIMIT, 0.4, Policy::Clamp);
const OKLCH_CHROMA: Domain = Domain::number(0.0, OKLAB_LIMIT, 0.4, Policy::Clamp);

impl Notation for Srgb {
    const SPACE: Space = Space::Srgb;
    const DOMAINS: [Domain; 3] = [CHANNEL; 3];

    fn from_resolved(components: Components) -> Self {
        components.map(|v| v / 255.0).into()
    }

    fn to_srgb(&self) -> Srgb {
        *self
    }
}

impl Notation for Hsl {
    const SPACE: Space = Space::Hsl;
    const DOMAINS: [Domain; 3] = [
        Domain::ANGLE,
        Domain::UNIT_PERCENTAGE,
        Domain::UNIT_PERCENTAGE,
    ];

    fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Notation for Hwb {
    const SPACE: Space = Space::Hwb;
    const DOMAINS: [Domain; 3] = [
        Domain::ANGLE,
        Domain::UNIT_PERCENTAGE,
        Domain::UNIT_PERCENTAGE,
    ];

    fn to_srgb(&self) -> Srgb {
        util::hwb_to_rgb(&self.to_components()).into()
    }
}

impl Notation for Lab {
    const SPACE: Space = Space::Lab;
    const DOMAINS: [Domain; 3] = [LAB_LIGHTNESS, LAB_AXIS, LAB_AXIS];

    fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(self.to_xyz().to_xyz_d65()).to_gamma_encoded()
    }
}

impl Notation for Lch {
    const SPACE: Space = Space::Lch;
    const DOMAINS: [Domain; 3] = [LAB_LIGHTNESS, LCH_CHROMA, Domain::ANGLE];

    fn to_srgb(&self) -> Srgb {
        self.to_rectangular().to_srgb()
    }
}

impl Notation for Oklab {
    const SPACE: Space = Space::Oklab;
    const DOMAINS: [Domain; 3] = [OKLAB_LIGHTNESS, OKLAB_AXIS, OKLAB_AXIS];

    fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(*self).to_gamma_encoded()
    }
}

impl Notation for Oklch {
    const SPACE: Space = Space::Oklch;
    const DOMAINS: [Domain; 3] = [OKLAB_LIGHTNESS, OKLCH_CHROMA, Domain::ANGLE];

    fn to_srgb(&self) -> Srgb {
        self.to_rectangular().to_srgb()
    }
}

mod util {
    use crate::{
        color::Components,
        math::{almost_zero, normalize_hue},
    };

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if almost_zero(saturation) {
            return Components(lightness, lightness, lightness);
        }

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = normalize_hue(hue) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        // A hue on the boundary between two sectors belongs to the lower one.
        let (red, green, blue) = if sector <= 1.0 {
            (chroma, x, 0.0)
        } else if sector <= 2.0 {
            (x, chroma, 0.0)
        } else if sector <= 3.0 {
            (0.0, chroma, x)
        } else if sector <= 4.0 {
            (0.0, x, chroma)
        } else if sector <= 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Components(red + m, green + m, blue + m)
    }

    /// Convert from HWB notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(from: &Components) -> Components {
        let Components(hue, whiteness, blackness) = *from;

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Components(gray, gray, gray);
        }

        let rgb = hsl_to_rgb(&Components(hue, 1.0, 0.5));
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
    }
}
