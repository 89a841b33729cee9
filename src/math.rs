//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Values with a magnitude below this are treated as zero by the division
/// guards.
pub const EPSILON: Component = 1.0e-6;

/// Build a transform from a 3x3 matrix given in row-major order, applied to
/// column vectors.
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
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m11, m21, m31, 0.0, //
        m12, m22, m32, 0.0, //
        m13, m23, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Returns true if the value is close enough to zero that dividing by it is
/// unsafe.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < EPSILON
}

/// Replace values that can not be represented in a color with 0.
pub fn normalize(value: Component) -> Component {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Wrap a hue angle in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = normalize(hue);
    (hue % 360.0 + 360.0) % 360.0
}

/// Clamp a value into [0, 1].
pub fn normalize_unit(value: Component) -> Component {
    normalize(value).clamp(0.0, 1.0)
}

/// Alpha is always in [0, 1].
pub fn normalize_alpha(alpha: Component) -> Component {
    normalize_unit(alpha)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hue angles along the shorter arc.
pub fn lerp_hue(a: Component, b: Component, t: Component) -> Component {
    let mut delta = normalize_hue(b) - normalize_hue(a);
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    normalize_hue(a + delta * t)
}
