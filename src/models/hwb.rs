//! Model a color with the HWB notation in the sRGB color space.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The whiteness component of the color, in [0, 1].
        pub whiteness: Component,
        /// The blackness component of the color, in [0, 1].
        pub blackness: Component,
    }
}
