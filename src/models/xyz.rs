//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::normalize,
    models::{LinearRgb, Normalize, Srgb},
};

/// The D65 reference white, normalized so that Y is 1.
#[allow(clippy::excessive_precision)]
pub const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);

tincture_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the D65
    /// white point.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}

impl Normalize for Xyz {
    fn normalize(components: Components) -> Components {
        components.map(normalize)
    }
}

impl Xyz {
    /// Convert to linear light sRGB. Out of gamut colors produce channels
    /// outside [0, 1].
    pub fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from(*self)
    }

    /// Convert to gamma encoded sRGB, clamping each channel into [0, 1].
    pub fn to_srgb(&self) -> Srgb {
        self.to_linear_rgb().to_gamma_encoded()
    }
}
