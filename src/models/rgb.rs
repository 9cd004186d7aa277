//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::XyzD65,
};

/// Tags for the gamma encoding of RGB components.
pub mod encoding {
    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded with the sRGB transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to linear light.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

swatch_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

/// The sRGB transfer function, from linear light to gamma encoded. Negative
/// values are mirrored.
/// <https://drafts.csswg.org/css-color-4/#color-conversion-code>
pub fn gamma_encode(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components().map(gamma_encode).into()
    }
}

impl Srgb {
    /// Return the color with each component clamped to [0, 1].
    pub fn clip(&self) -> Srgb {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }

    /// Returns true if all components are within [0, 1].
    pub fn in_gamut(&self) -> bool {
        let Components(red, green, blue) = self.to_components();
        [red, green, blue]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}
