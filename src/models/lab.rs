//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-Lch, Oklab and Oklch.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::{
        rgb::SrgbLinear,
        xyz::{ToXyz, WhitePoint, Xyz, D50},
    },
};

/// Tags for the two Lab-like color spaces.
pub mod space {
    /// Identifies a Lab-like color space.
    pub trait Space {}

    /// CIE-Lab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;
    impl Space for Lab {}

    /// Oklab.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;
    impl Space for Oklab {}
}

swatch_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

swatch_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }
}

/// The model for a color specified in the CIE-Lab color space with the rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

/// The model for a color specified in the CIE-Lab color space with the cylindrical polar form.
pub type Lch = Polar<space::Lab>;

/// The model for a color specified in the oklab color space with the rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

/// The model for a color specified in the oklab color space with the cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

impl ToXyz<D50> for Lab {
    fn to_xyz(&self) -> Xyz<D50> {
        const KAPPA: Component = 24389.0 / 27.0;
        const EPSILON: Component = 216.0 / 24389.0;

        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D50::WHITE_POINT.0,
            y * D50::WHITE_POINT.1,
            z * D50::WHITE_POINT.2,
        )
    }
}

impl From<Oklab> for SrgbLinear {
    fn from(value: Oklab) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_SRGB_LINEAR: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, value.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_SRGB_LINEAR, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn polar_to_rectangular() {
        let lch = Lch::new(56.6293, 69.65619, 55.715927);
        let lab = lch.to_rectangular();

        assert_component_eq!(lab.lightness, 56.6293);
        assert!((lab.a - 39.23708).abs() < 1.0e-3);
        assert!((lab.b - 57.55377).abs() < 1.0e-3);
    }

    #[test]
    fn zero_chroma_has_no_a_or_b() {
        for hue in [0.0, 45.0, 180.0, 359.0] {
            let lab = Oklch::new(0.5, 0.0, hue).to_rectangular();
            assert_eq!(lab.a, 0.0);
            assert_eq!(lab.b, 0.0);
        }
    }

    #[test]
    fn lab_to_xyz_d50() {
        #[allow(clippy::excessive_precision)]
        let lab = Lab::new(56.629300221279735, 39.237080198427755, 57.553769167682276);
        let xyz = lab.to_xyz();

        assert_component_eq!(xyz.x, 0.3373008675302083);
        assert_component_eq!(xyz.y, 0.2454491947638009);
        assert_component_eq!(xyz.z, 0.0319588705314679);
    }

    #[test]
    fn lab_white_is_the_d50_white_point() {
        let xyz = Lab::new(100.0, 0.0, 0.0).to_xyz();
        assert_component_eq!(xyz.x, D50::WHITE_POINT.0);
        assert_component_eq!(xyz.y, D50::WHITE_POINT.1);
        assert_component_eq!(xyz.z, D50::WHITE_POINT.2);
    }

    #[test]
    fn dark_lab_uses_the_linear_segment() {
        let xyz = Lab::new(5.0, 0.0, 0.0).to_xyz();
        assert_component_eq!(xyz.y, 5.0 * 27.0 / 24389.0);
    }

    #[test]
    fn oklab_to_linear_srgb() {
        // oklab(0.627955 0.224863 0.125846) is sRGB red.
        let red = SrgbLinear::from(Oklab::new(0.627955, 0.224863, 0.125846));
        assert!((red.red - 1.0).abs() < 1.0e-4);
        assert!(red.green.abs() < 1.0e-4);
        assert!(red.blue.abs() < 1.0e-4);
    }
}
