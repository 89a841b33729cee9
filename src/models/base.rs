//! Conversion of every model to the base color space (CIE-XYZ, D65) that
//! conversions without a direct path go through.

use crate::models::{Hsl, Lab, Lch, LinearRgb, Srgb, Xyz};

/// The color space every model can reach.
pub type Base = Xyz;

/// Used to convert any model to the base color space.
pub trait ToBase {
    /// Convert the model to the base color space.
    fn to_base(&self) -> Base;
}

impl ToBase for Srgb {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for LinearRgb {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl ToBase for Xyz {
    fn to_base(&self) -> Base {
        *self
    }
}

impl ToBase for Lab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for Lch {
    fn to_base(&self) -> Base {
        self.to_lab().to_base()
    }
}
