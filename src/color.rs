//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use std::ops::Sub;

use crate::models::{Hsl, Lab, Lch, LinearRgb, Normalize, Srgb, Xyz};

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

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// The color spaces and notations a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB, each channel in [0, 1].
    Srgb = 0,
    /// sRGB with the gamma encoding removed (linear light).
    LinearRgb = 1,
    /// CIE-XYZ relative to the D65 white point.
    Xyz = 2,
    /// CIE-Lab in the rectangular orthogonal form.
    Lab = 3,
    /// CIE-Lab in the cylindrical polar form (lightness, chroma, hue).
    Lch = 4,
    /// The HSL (hue, saturation, lightness) notation of the sRGB color space.
    Hsl = 5,
}

impl Space {
    /// Index of the component holding a hue angle, if the space has one.
    pub fn hue_index(&self) -> Option<usize> {
        match self {
            Space::Lch => Some(2),
            Space::Hsl => Some(0),
            _ => None,
        }
    }

    fn normalize(&self, components: Components) -> Components {
        match self {
            Space::Srgb => Srgb::normalize(components),
            Space::LinearRgb => LinearRgb::normalize(components),
            Space::Xyz => Xyz::normalize(components),
            Space::Lab => Lab::normalize(components),
            Space::Lch => Lch::normalize(components),
            Space::Hsl => Hsl::normalize(components),
        }
    }
}

/// Tie a color model type to the [`Space`] it represents.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Immutable value holding a color in any of the supported spaces.
///
/// Components are normalized on construction using the rules of the model
/// for `space`, so a `Color` never carries NaN or out of range channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    components: Components,
    alpha: Component,
    space: Space,
}

impl Color {
    /// Create a new [`Color`] in the given space.
    /// ```rust
    /// use tincture::{Color, Space};
    /// let c = Color::new(Space::Srgb, 1.2, 0.5, -0.1, 1.0);
    /// assert_eq!(c.components().0, 1.0);
    /// assert_eq!(c.components().2, 0.0);
    /// ```
    pub fn new(
        space: Space,
        c0: Component,
        c1: Component,
        c2: Component,
        alpha: Component,
    ) -> Self {
        Self {
            components: space.normalize(Components(c0, c1, c2)),
            alpha: crate::math::normalize_alpha(alpha),
            space,
        }
    }

    /// The three components of the color.
    pub fn components(&self) -> Components {
        self.components
    }

    /// The alpha component of the color.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// The space in which the components are set.
    pub fn space(&self) -> Space {
        self.space
    }

    /// Return a copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        let Components(c0, c1, c2) = self.components;
        Self::new(self.space, c0, c1, c2, alpha)
    }

    /// Read this color as the given model. A color in another space is
    /// converted with [`Color::to_space`] first.
    pub fn as_model<T: crate::models::Model + HasSpace>(&self) -> T {
        T::from_color(&self.to_space(T::SPACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.components(), Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha(), 0.4);
        assert_eq!(c.space(), Space::Srgb);
    }

    #[test]
    fn components_are_normalized_for_the_space() {
        let c = Color::new(Space::Srgb, 1.5, -0.5, Component::NAN, 3.0);
        assert_eq!(c.components(), Components(1.0, 0.0, 0.0));
        assert_eq!(c.alpha(), 1.0);

        let c = Color::new(Space::Lch, 120.0, -4.0, -30.0, 1.0);
        assert_eq!(c.components(), Components(100.0, 0.0, 330.0));

        let c = Color::new(Space::Xyz, 2.0, -1.0, 0.5, -1.0);
        assert_eq!(c.components(), Components(2.0, -1.0, 0.5));
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn with_alpha_returns_a_new_color() {
        let c = Color::new(Space::Hsl, 120.0, 0.5, 0.5, 1.0);
        let d = c.with_alpha(0.25);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(d.alpha(), 0.25);
        assert_eq!(c.components(), d.components());
    }

    #[test]
    fn as_model() {
        let color = Color::new(Space::Hsl, 10.0, 0.2, 0.3, 0.4);
        let model = color.as_model::<Hsl>();
        assert_eq!(model.hue(), color.components().0);
        assert_eq!(model.saturation(), color.components().1);
        assert_eq!(model.lightness(), color.components().2);
        assert_eq!(model.alpha(), color.alpha());
    }

    #[test]
    fn as_model_converts_from_other_spaces() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, 0.5);
        let lab = red.as_model::<Lab>();
        approx::assert_abs_diff_eq!(lab.lightness(), 53.24, epsilon = 0.05);
        approx::assert_abs_diff_eq!(lab.a(), 80.09, epsilon = 0.05);
        approx::assert_abs_diff_eq!(lab.b(), 67.20, epsilon = 0.05);
        assert_eq!(lab.alpha(), 0.5);
        assert_eq!(red.as_model::<Lab>(), red.to_lab());
    }
}
