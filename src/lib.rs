//! tincture converts colors between sRGB, linear RGB, CIE-XYZ, CIE-Lab,
//! CIE-LCH and HSL, measures their perceptual difference with CIEDE2000 and
//! derives graded shade families ("50" to "900" plus accents) from a base
//! color.
//!
//! ```rust
//! use tincture::{convert, generate_shades, Color, Grade, ShadePolicy, Space};
//!
//! let orange: tincture::models::Srgb = "#FF5722".parse().unwrap();
//! let orange = Color::from(orange);
//!
//! let lch = convert(&orange, Space::Lch);
//! assert!(lch.components().0 > 50.0);
//!
//! let family = generate_shades(&orange, &Grade::STANDARD, ShadePolicy::DefaultCurve);
//! for shade in &family {
//!     println!("{:>4} {}", shade.grade, shade.color.to_srgb());
//! }
//! ```

#![deny(missing_docs)]

mod codec;
mod color;
mod convert;
mod delta_e;
mod error;
mod interpolate;
mod math;
pub mod models;
mod palette;
mod shades;
#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, HasSpace, Space};
pub use convert::convert;
pub use delta_e::{delta_e00, DeltaE};
pub use error::{Error, ParseColorError, ParseGradeError, Result, TonalPaletteError};
pub use palette::{match_palette, PaletteMatch, ReferencePalette, TonalPalette};
pub use shades::{
    default_target, generate_matched_shades, generate_shades, generate_shades_in, Grade, Shade,
    ShadeFamily, ShadePolicy,
};
