//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! short. Spaces without a direct path meet in CIE-XYZ (D65).
//!
//! Conversions carry alpha along unchanged and never produce NaN: hue is 0
//! when a color has no chroma or saturation.
//!
//! ```rust
//! use tincture::models::Srgb;
//! let blue_in_lch = Srgb::new(0.0, 0.0, 1.0)
//!     .to_linear_light() // convert to linear light.
//!     .to_xyz()          // convert to xyz.
//!     .to_lab()          // convert to lab.
//!     .to_lch();         // convert to lch.
//! assert!((blue_in_lch.hue() - 306.28).abs() < 0.01);
//! ```

use crate::{
    color::{Color, Components, Space},
    models::{Hsl, Lab, Lch, LinearRgb, Model, Srgb, ToBase, Xyz},
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space() == space {
            return *self;
        }

        // Handle direct conversions.
        match (self.space(), space) {
            (S::Srgb, S::LinearRgb) => {
                return self.as_model::<Srgb>().to_linear_light().to_color()
            }
            (S::LinearRgb, S::Srgb) => {
                return self.as_model::<LinearRgb>().to_gamma_encoded().to_color()
            }
            (S::Srgb, S::Hsl) => return self.as_model::<Srgb>().to_hsl().to_color(),
            (S::Hsl, S::Srgb) => return self.as_model::<Hsl>().to_srgb().to_color(),
            (S::Lab, S::Lch) => return self.as_model::<Lab>().to_lch().to_color(),
            (S::Lch, S::Lab) => return self.as_model::<Lch>().to_lab().to_color(),
            _ => {}
        }

        macro_rules! to_base {
            ($m:ident) => {{
                self.as_model::<$m>().to_base()
            }};
        }

        // The rest goes through XYZ.
        let base = match self.space() {
            S::Srgb => to_base!(Srgb),
            S::LinearRgb => to_base!(LinearRgb),
            S::Xyz => to_base!(Xyz),
            S::Lab => to_base!(Lab),
            S::Lch => to_base!(Lch),
            S::Hsl => to_base!(Hsl),
        };

        match space {
            S::Srgb => base.to_srgb().to_color(),
            S::LinearRgb => base.to_linear_rgb().to_color(),
            S::Xyz => base.to_color(),
            S::Lab => base.to_lab().to_color(),
            S::Lch => base.to_lab().to_lch().to_color(),
            S::Hsl => base.to_srgb().to_hsl().to_color(),
        }
    }

    /// Shorthand for converting to [`Space::Lch`] and reading the model.
    pub fn to_lch(&self) -> Lch {
        self.to_space(Space::Lch).as_model()
    }

    /// Shorthand for converting to [`Space::Lab`] and reading the model.
    pub fn to_lab(&self) -> Lab {
        self.to_space(Space::Lab).as_model()
    }

    /// Shorthand for converting to [`Space::Srgb`] and reading the model.
    pub fn to_srgb(&self) -> Srgb {
        self.to_space(Space::Srgb).as_model()
    }
}

/// Convert `color` into `space`. See [`Color::to_space`].
pub fn convert(color: &Color, space: Space) -> Color {
    color.to_space(space)
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new_with_alpha(hue, saturation, lightness, self.alpha())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let Components(red, green, blue) = util::hsl_to_rgb(&self.to_components());
        Srgb::new_with_alpha(red, green, blue, self.alpha())
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize_hue},
    };

    /// Convert from RGB notation to HSL notation. Achromatic colors get a hue
    /// and saturation of 0.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if almost_zero(delta) {
            return Components(0.0, 0.0, lightness);
        }

        let divisor = 1.0 - (2.0 * lightness - 1.0).abs();
        let saturation = if almost_zero(divisor) {
            0.0
        } else {
            delta / divisor
        };

        let sector = if max == red {
            ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        let hue = (sector * 60.0 + 360.0) % 360.0;

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = normalize_hue(hue) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (red, green, blue): (Component, Component, Component) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = lightness - chroma / 2.0;
        Components(red + m, green + m, blue + m)
    }
}
