//! Normalize the arguments of CSS color functions.
//!
//! An [`Argument`] is a number, a percentage, an angle or the `none` keyword.
//! It is resolved against the [`Domain`] of the component it is passed for,
//! which decides how percentages scale, and whether out of range values are
//! clamped or rejected.
//! <https://drafts.csswg.org/css-color-4/#color-syntax>

use std::str::FromStr;

use crate::{
    color::Component,
    error::{Error, Result},
    math::normalize_hue,
};

/// Angle units and the number of degrees in one unit. `grad` must be tested
/// before `rad`.
const ANGLE_UNITS: [(&str, Component); 4] = [
    ("deg", 1.0),
    ("grad", 360.0 / 400.0),
    ("rad", 180.0 / std::f64::consts::PI as Component),
    ("turn", 360.0),
];

/// A single, unresolved argument to a color function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Argument {
    /// The `none` keyword; the component is missing.
    None,
    /// A bare number.
    Number(Component),
    /// A percentage, e.g. `50` for `50%`.
    Percentage(Component),
    /// An angle, already converted to degrees.
    Angle(Component),
}

impl Argument {
    /// Resolve this argument in the given domain. Returns `None` for the
    /// `none` keyword.
    pub fn resolve(&self, domain: &Domain) -> Result<Option<Component>> {
        let value = match (*self, domain.kind) {
            (Argument::None, _) => return Ok(None),

            (Argument::Number(degrees) | Argument::Angle(degrees), Kind::Angle) => {
                return self.finite(degrees).map(|d| Some(normalize_hue(d)));
            }
            (Argument::Percentage(_), Kind::Angle) => {
                return Err(Error::malformed(self.to_string(), "expected an angle"));
            }
            (Argument::Angle(_), _) => {
                return Err(Error::malformed(self.to_string(), "unexpected angle"));
            }

            (Argument::Number(value), Kind::Number) => value,
            (Argument::Number(value), Kind::Percentage) | (Argument::Percentage(value), _) => {
                value / 100.0 * domain.percent
            }
        };

        domain.bound(self.finite(value)?).map(Some)
    }

    fn finite(&self, value: Component) -> Result<Component> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::malformed(self.to_string(), "not a finite number"))
        }
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::None => f.write_str("none"),
            Argument::Number(value) => write!(f, "{value}"),
            Argument::Percentage(value) => write!(f, "{value}%"),
            Argument::Angle(degrees) => write!(f, "{degrees}deg"),
        }
    }
}

fn parse_number(s: &str, argument: &str) -> Result<Component> {
    if s.is_empty() {
        return Err(Error::malformed(argument, "missing number"));
    }

    let value: Component = s
        .parse()
        .map_err(|_| Error::malformed(argument, "not a number"))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::malformed(argument, "not a finite number"))
    }
}

impl FromStr for Argument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowercase = s.trim().to_ascii_lowercase();
        let t = lowercase.as_str();

        if t == "none" {
            return Ok(Argument::None);
        }

        if let Some(number) = t.strip_suffix('%') {
            return parse_number(number, s).map(Argument::Percentage);
        }

        for (unit, degrees) in ANGLE_UNITS {
            if let Some(number) = t.strip_suffix(unit) {
                return parse_number(number, s)
                    .map(|value| Argument::Angle(value * degrees));
            }
        }

        if t.ends_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(Error::malformed(s, "unknown unit"));
        }

        parse_number(t, s).map(Argument::Number)
    }
}

/// Conversion of the values accepted as color function arguments.
pub trait IntoArgument {
    /// Convert into an [`Argument`], parsing strings.
    fn into_argument(self) -> Result<Argument>;
}

impl IntoArgument for Argument {
    fn into_argument(self) -> Result<Argument> {
        Ok(self)
    }
}

impl IntoArgument for &str {
    fn into_argument(self) -> Result<Argument> {
        self.parse()
    }
}

impl IntoArgument for String {
    fn into_argument(self) -> Result<Argument> {
        self.parse()
    }
}

/// Conversion of the values accepted for alpha. `None` means the color has no
/// alpha; a bare value, or `Some(Argument)`, means alpha was given.
///
/// ```rust
/// use swatch::{rgb, Argument};
/// assert_eq!(rgb(0, 0, 0, None)?.to_string(), "#000000");
/// assert_eq!(rgb(0, 0, 0, "50%")?.to_string(), "#00000080");
/// assert_eq!(rgb(0, 0, 0, 0.2)?.to_string(), "#00000033");
/// assert_eq!(rgb(0, 0, 0, Some(Argument::Number(1.0)))?.to_string(), "#000000ff");
/// # Ok::<(), swatch::Error>(())
/// ```
pub trait IntoAlpha {
    /// Convert into an optional [`Argument`], parsing strings.
    fn into_alpha(self) -> Result<Option<Argument>>;
}

impl IntoAlpha for Option<Argument> {
    fn into_alpha(self) -> Result<Option<Argument>> {
        Ok(self)
    }
}

macro_rules! alpha_argument {
    ($($t:ty),*) => {
        $(
            impl IntoAlpha for $t {
                fn into_alpha(self) -> Result<Option<Argument>> {
                    self.into_argument().map(Some)
                }
            }
        )*
    };
}

alpha_argument!(Argument, &str, String);

macro_rules! number_argument {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(value: $t) -> Self {
                    Argument::Number(value as Component)
                }
            }

            impl IntoArgument for $t {
                fn into_argument(self) -> Result<Argument> {
                    Ok(Argument::from(self))
                }
            }

            alpha_argument!($t);
        )*
    };
}

number_argument!(f32, f64, u8, i32, u32, i64);

/// How a bare number given for a component is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Bare numbers are in the units of the domain.
    Number,
    /// Bare numbers are percentages, as in the modern `hsl()` and `hwb()`
    /// syntax.
    Percentage,
    /// Bare numbers are degrees.
    Angle,
}

/// What happens to values outside of a domain's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Clamp into the range.
    Clamp,
    /// Fail with [`Error::OutOfRange`].
    Reject,
}

/// The domain of a single component of a color function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// How bare numbers are read.
    pub kind: Kind,
    /// The inclusive range of the component.
    pub range: (Component, Component),
    /// The value that `100%` resolves to.
    pub percent: Component,
    /// What happens to values outside of `range`.
    pub policy: Policy,
}

impl Domain {
    /// Hue angles, normalized into [0, 360).
    pub const ANGLE: Domain = Domain {
        kind: Kind::Angle,
        range: (0.0, 360.0),
        percent: 360.0,
        policy: Policy::Clamp,
    };

    /// Saturation, lightness, whiteness and blackness.
    pub const UNIT_PERCENTAGE: Domain = Domain {
        kind: Kind::Percentage,
        range: (0.0, 1.0),
        percent: 1.0,
        policy: Policy::Clamp,
    };

    /// Alpha. Bare numbers are already in [0, 1] and out of range values are
    /// errors.
    pub const ALPHA: Domain = Domain::number(0.0, 1.0, 1.0, Policy::Reject);

    /// A domain where bare numbers are in the units of the component.
    pub const fn number(
        min: Component,
        max: Component,
        percent: Component,
        policy: Policy,
    ) -> Self {
        Self {
            kind: Kind::Number,
            range: (min, max),
            percent,
            policy,
        }
    }

    fn bound(&self, value: Component) -> Result<Component> {
        let (min, max) = self.range;
        match self.policy {
            Policy::Clamp => Ok(value.clamp(min, max)),
            Policy::Reject if (min..=max).contains(&value) => Ok(value),
            Policy::Reject => Err(Error::OutOfRange { value, min, max }),
        }
    }
}
