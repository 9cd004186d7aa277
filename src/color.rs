//! A [`Color`] holds the resolved components of a color specified in any of
//! the supported CSS notations.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

/// The color notations accepted by the CSS color functions.
/// <https://drafts.csswg.org/css-color-4/#color-type>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb = 0,
    /// The HSL (hue, saturation, lightness) notation for the sRGB color
    /// space.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl = 1,
    /// The HWB (hue, whiteness, blackness) notation for the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb = 2,
    /// CIE Lab with a D50 white point.
    Lab = 3,
    /// The cylindrical form of CIE Lab.
    Lch = 4,
    /// Oklab
    Oklab = 5,
    /// The cylindrical form of Oklab.
    Oklch = 6,
}

impl Space {
    /// All notations, in declaration order.
    pub const ALL: [Space; 7] = [
        Space::Srgb,
        Space::Hsl,
        Space::Hwb,
        Space::Lab,
        Space::Lch,
        Space::Oklab,
        Space::Oklch,
    ];

    /// The name of the CSS function for this notation.
    pub fn function_name(&self) -> &'static str {
        match self {
            Space::Srgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hwb => "hwb",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
        }
    }

    /// Look up a notation by CSS function name. The legacy `rgba` and `hsla`
    /// aliases are accepted.
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name {
            "rgba" => Some(Space::Srgb),
            "hsla" => Some(Space::Hsl),
            _ => Self::ALL
                .into_iter()
                .find(|space| space.function_name() == name),
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Struct that can hold a color of any notation.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color, in the units of the
    /// notation's model.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The notation in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`]. Each color or alpha component can take values
    /// that can be converted into a [`ComponentDetails`]. Passing `None`
    /// marks the component as missing:
    /// ```rust
    /// use swatch::{Color, Space};
    /// let c = Color::new(Space::Srgb, 1.0, 0.5, None, None);
    /// assert_eq!(c.c2(), None);
    /// assert_eq!(c.alpha(), None);
    /// ```
    pub fn new(
        space: Space,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let c0 = c0.into().value_and_flag(&mut flags, Flags::C0_IS_NONE);
        let c1 = c1.into().value_and_flag(&mut flags, Flags::C1_IS_NONE);
        let c2 = c2.into().value_and_flag(&mut flags, Flags::C2_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        if self.flags.contains(Flags::C0_IS_NONE) {
            None
        } else {
            Some(self.components.0)
        }
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        if self.flags.contains(Flags::C1_IS_NONE) {
            None
        } else {
            Some(self.components.1)
        }
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        if self.flags.contains(Flags::C2_IS_NONE) {
            None
        } else {
            Some(self.components.2)
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

/// A struct that holds details about a component passed to [`Color::new`].
/// Any components that can be passed implements a
/// `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}
