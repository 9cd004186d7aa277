//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
};

/// A reference white.
pub trait WhitePoint {
    /// The XYZ components of the reference white, with Y normalized to 1.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D50;

impl WhitePoint for D50 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(
        0.9642956764295677,
        1.0,
        0.8251046025104602,
    );
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(
        0.9504559270516716,
        1.0,
        1.0890577507598784,
    );
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

swatch_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

impl XyzD50 {
    /// Adapt this color to the D65 white point with the Bradford transform.
    /// <https://drafts.csswg.org/css-color-4/#color-conversion-code>
    pub fn to_xyz_d65(&self) -> XyzD65 {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const D50_TO_D65: Transform = transform_3x3(
             0.955473421488075,    -0.0283697093338637,   0.012314014864481998,
            -0.02309845494876471,   1.0099953980813041,  -0.020507649298898964,
             0.06325924320057072,   0.021041441191917323, 1.330365926242124,
        );

        transform(&D50_TO_D65, self.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn bradford_maps_white_to_white() {
        let white = XyzD50::from(D50::WHITE_POINT).to_xyz_d65();
        assert_component_eq!(white.x, D65::WHITE_POINT.0);
        assert_component_eq!(white.y, D65::WHITE_POINT.1);
        assert_component_eq!(white.z, D65::WHITE_POINT.2);
    }

    #[test]
    fn bradford_adapts_chocolate() {
        // 0.3373008675302083, 0.2454491947638009, 0.0319588705314679
        #[allow(clippy::excessive_precision)]
        let xyz_d50 = XyzD50::new(0.3373008675302083, 0.2454491947638009, 0.0319588705314679);
        let xyz_d65 = xyz_d50.to_xyz_d65();

        assert_component_eq!(xyz_d65.x, 0.31863421971306805);
        assert_component_eq!(xyz_d65.y, 0.23900587532696937);
        assert_component_eq!(xyz_d65.z, 0.041636956453517074);
    }
}
