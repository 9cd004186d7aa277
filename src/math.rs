//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in a 4x4 transform, so it can be declared `const`.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. The values are listed column by
/// column, because euclid multiplies row vectors.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let vector = Vector::new(from.0, from.1, from.2);
    let Vector { x, y, z, .. } = transform.transform_vector3d(vector);
    Components(x, y, z)
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Normalize a hue in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // Tiny negative hues round up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn identity_transform_keeps_components() {
        #[rustfmt::skip]
        const IDENTITY: Transform = transform_3x3(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );

        let result = transform(&IDENTITY, Components(0.1, 0.2, 0.3));
        assert_eq!(result, Components(0.1, 0.2, 0.3));
    }

    #[test]
    fn transform_lists_columns() {
        // The first three values are the first column of the matrix.
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 4.0, 7.0,
            2.0, 5.0, 8.0,
            3.0, 6.0, 9.0,
        );

        let result = transform(&M, Components(1.0, 0.0, 0.0));
        assert_eq!(result, Components(1.0, 4.0, 7.0));

        let result = transform(&M, Components(1.0, 1.0, 1.0));
        assert_eq!(result, Components(6.0, 15.0, 24.0));
    }

    #[test]
    fn hues_wrap_into_one_turn() {
        assert_component_eq!(normalize_hue(-30.0 as Component), 330.0);
        assert_component_eq!(normalize_hue(720.0 as Component), 0.0);
        assert_component_eq!(normalize_hue(400.0 as Component), 40.0);
        assert_component_eq!(normalize_hue(359.5 as Component), 359.5);
        assert!(normalize_hue(-1.0e-9 as Component) < 360.0);
    }

    #[test]
    fn small_values_are_almost_zero() {
        assert!(almost_zero(0.0 as Component));
        assert!(almost_zero(Component::EPSILON / 2.0));
        assert!(!almost_zero(0.001 as Component));
    }
}
