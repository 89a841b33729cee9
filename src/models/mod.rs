//! Models are structs that represent a color in a specific color space or
//! form. They are the type safe way to convert between color spaces; the
//! dynamic [`Color`] dispatches to them.

use crate::color::{Color, Components};

mod base;
mod hsl;
mod lab;
mod rgb;
mod xyz;

pub use base::{Base, ToBase};
pub use hsl::Hsl;
pub use lab::{Lab, Lch};
pub use rgb::{encoding, LinearRgb, Rgb, Srgb};
pub use xyz::{Xyz, WHITE_POINT};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: Sized {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Read a model from a generic [`Color`] that is in the model's space.
    fn from_color(color: &Color) -> Self;
}

/// Bring raw components into the valid range of a model. Every constructor
/// runs through this, which keeps the models free of NaN and out of range
/// values.
pub trait Normalize {
    /// Return the normalized components.
    fn normalize(components: Components) -> Components;
}
