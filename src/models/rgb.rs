//! Model a color in the sRGB color space, with or without gamma encoding.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{normalize, normalize_unit, transform, transform_3x3, Transform},
    models::{xyz::Xyz, Normalize},
};

pub mod encoding {
    //! Tags that specify whether RGB components are gamma encoded.

    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Components are gamma encoded (what is stored in images and shown on
    /// screens).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to physical light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

tincture_macros::gen_model! {
    /// A color specified with red, green and blue components in the sRGB
    /// color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

/// Device channels are always in [0, 1].
impl Normalize for Srgb {
    fn normalize(components: Components) -> Components {
        components.map(normalize_unit)
    }
}

/// Model for a color in the sRGB color space with no gamma encoding.
pub type LinearRgb = Rgb<encoding::LinearLight>;

impl HasSpace for LinearRgb {
    const SPACE: Space = Space::LinearRgb;
}

/// Linear light is an intermediate form and may leave the [0, 1] range on
/// the way back from XYZ; it is clamped once gamma encoded.
impl Normalize for LinearRgb {
    fn normalize(components: Components) -> Components {
        components.map(normalize)
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_RGB_TO_XYZ: Transform = transform_3x3(
    0.4124564, 0.3575761, 0.1804375,
    0.2126729, 0.7151522, 0.0721750,
    0.0193339, 0.1191920, 0.9503041,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_RGB: Transform = transform_3x3(
     3.2404542, -1.5371385, -0.4985314,
    -0.9692660,  1.8760108,  0.0415560,
     0.0556434, -0.2040259,  1.0572252,
);

fn to_linear_light(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn to_gamma_encoded(value: Component) -> Component {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

impl Srgb {
    /// Remove the gamma encoding ("linearize") from each channel.
    pub fn to_linear_light(&self) -> LinearRgb {
        let Components(red, green, blue) = self.to_components().map(to_linear_light);
        LinearRgb::new_with_alpha(red, green, blue, self.alpha())
    }

    /// Convert to CIE-XYZ through linear light.
    pub fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl LinearRgb {
    /// Apply the sRGB gamma encoding to each channel. The result is clamped
    /// into [0, 1].
    pub fn to_gamma_encoded(&self) -> Srgb {
        let Components(red, green, blue) = self.to_components().map(to_gamma_encoded);
        Srgb::new_with_alpha(red, green, blue, self.alpha())
    }

    /// Convert to CIE-XYZ with the sRGB primaries.
    pub fn to_xyz(&self) -> Xyz {
        let Components(x, y, z) = transform(&LINEAR_RGB_TO_XYZ, self.to_components());
        Xyz::new_with_alpha(x, y, z, self.alpha())
    }
}

impl From<Xyz> for LinearRgb {
    fn from(value: Xyz) -> Self {
        let Components(red, green, blue) = transform(&XYZ_TO_LINEAR_RGB, value.to_components());
        LinearRgb::new_with_alpha(red, green, blue, value.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic_rgb_colors() {
        let srgb = Srgb::new_with_alpha(0.1, 0.2, 0.3, 0.4);
        assert_eq!(srgb.red(), 0.1);
        assert_eq!(srgb.green(), 0.2);
        assert_eq!(srgb.blue(), 0.3);
        assert_eq!(srgb.alpha(), 0.4);

        let linear = LinearRgb::new(0.1, 0.2, 0.3);
        assert_eq!(linear.red(), 0.1);
        assert_eq!(linear.alpha(), 1.0);
    }

    #[test]
    fn srgb_channels_are_clamped() {
        let srgb = Srgb::new(1.5, -0.25, 0.5);
        assert_eq!(srgb.to_components(), Components(1.0, 0.0, 0.5));

        let srgb = srgb.with_green(2.0);
        assert_eq!(srgb.green(), 1.0);
    }

    #[test]
    fn linear_rgb_is_not_clamped() {
        let linear = LinearRgb::new(1.5, -0.25, Component::NAN);
        assert_eq!(linear.to_components(), Components(1.5, -0.25, 0.0));
    }

    #[test]
    fn gamma_curve_pieces() {
        let linear = Srgb::new(0.04, 0.5, 1.0).to_linear_light();
        assert_component_eq!(linear.red(), 0.04 / 12.92);
        assert_component_eq!(linear.green(), 0.214041);
        assert_component_eq!(linear.blue(), 1.0);

        let srgb = linear.to_gamma_encoded();
        assert_component_eq!(srgb.red(), 0.04);
        assert_component_eq!(srgb.green(), 0.5);
        assert_component_eq!(srgb.blue(), 1.0);
    }

    #[test]
    fn white_to_xyz() {
        let xyz = Srgb::new(1.0, 1.0, 1.0).to_xyz();
        approx::assert_abs_diff_eq!(xyz.x(), 0.9505, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(xyz.y(), 1.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(xyz.z(), 1.0890, epsilon = 1.0e-3);
    }

    #[test]
    fn alpha_is_carried_through_gamma() {
        let srgb = Srgb::new_with_alpha(0.3, 0.6, 0.9, 0.5);
        assert_eq!(srgb.to_linear_light().alpha(), 0.5);
        assert_eq!(srgb.to_xyz().alpha(), 0.5);
    }
}
