//! Reading and writing sRGB colors as text.
//!
//! Two notations are understood: hex (`#RRGGBB`, `#RRGGBBAA`) and the CSS
//! `rgb()`/`rgba()` functions with 0-255 channels and a 0-1 alpha. Anything
//! malformed or out of range is rejected here, so the color math never sees
//! it.

use std::{fmt, str::FromStr};

use crate::{
    error::{out_of_range, ParseColorError},
    models::Srgb,
    Component,
};

fn channel_to_u8(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn u8_to_channel(value: u32) -> Component {
    (value & 0xFF) as Component / 255.0
}

impl Srgb {
    /// Parse `#RRGGBB` or `#RRGGBBAA`. The `#` is optional and digits are
    /// case insensitive.
    /// ```rust
    /// use tincture::models::Srgb;
    /// let c = Srgb::from_hex("#ff8000").unwrap();
    /// assert_eq!(c.red(), 1.0);
    /// assert_eq!(c.alpha(), 1.0);
    /// ```
    pub fn from_hex(text: &str) -> Result<Srgb, ParseColorError> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        // `from_str_radix` would accept a leading sign.
        if digits.starts_with(['+', '-']) {
            return Err(ParseColorError::InvalidSyntax(text.to_owned()));
        }

        let len = digits.chars().count();
        if len != 6 && len != 8 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let value = u32::from_str_radix(digits, 16)?;
        let (rgb, alpha) = if len == 8 {
            (value >> 8, value & 0xFF)
        } else {
            (value, 0xFF)
        };

        Ok(Srgb::new_with_alpha(
            u8_to_channel(rgb >> 16),
            u8_to_channel(rgb >> 8),
            u8_to_channel(rgb),
            u8_to_channel(alpha),
        ))
    }

    /// Parse the CSS functions `rgb(r, g, b)` and `rgba(r, g, b, a)`. The
    /// channels are in [0, 255], alpha is in [0, 1] and defaults to 1.
    pub fn from_css(text: &str) -> Result<Srgb, ParseColorError> {
        let invalid = || ParseColorError::InvalidSyntax(text.to_owned());

        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        let arguments = lower
            .strip_prefix("rgba")
            .or_else(|| lower.strip_prefix("rgb"))
            .and_then(|rest| rest.trim_start().strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let arguments: Vec<&str> = arguments.split(',').map(str::trim).collect();
        if arguments.len() != 3 && arguments.len() != 4 {
            return Err(invalid());
        }

        fn number(argument: &str) -> Result<Component, ParseColorError> {
            argument
                .parse::<Component>()
                .map_err(|_| ParseColorError::InvalidNumber(argument.to_owned()))
        }

        let mut channels = [0.0; 3];
        for (channel, (name, argument)) in channels
            .iter_mut()
            .zip(["red", "green", "blue"].into_iter().zip(&arguments))
        {
            let value = number(argument)?;
            if !(0.0..=255.0).contains(&value) {
                return Err(out_of_range(name, value));
            }
            *channel = value / 255.0;
        }

        let alpha = match arguments.get(3) {
            Some(argument) => {
                let value = number(argument)?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(out_of_range("alpha", value));
                }
                value
            }
            None => 1.0,
        };

        let [red, green, blue] = channels;
        Ok(Srgb::new_with_alpha(red, green, blue, alpha))
    }

    /// Format as `#RRGGBB`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_u8(self.red()),
            channel_to_u8(self.green()),
            channel_to_u8(self.blue()),
        )
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex_with_alpha(&self) -> String {
        format!("{}{:02X}", self.to_hex(), channel_to_u8(self.alpha()))
    }

    /// Format as `#AARRGGBB`, the layout used by Android color resources.
    pub fn to_argb_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            channel_to_u8(self.alpha()),
            channel_to_u8(self.red()),
            channel_to_u8(self.green()),
            channel_to_u8(self.blue()),
        )
    }

    /// Format as CSS `rgba(r,g,b,a)` with rounded 0-255 channels and two
    /// decimals of alpha.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{:.2})",
            channel_to_u8(self.red()),
            channel_to_u8(self.green()),
            channel_to_u8(self.blue()),
            self.alpha(),
        )
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        if trimmed
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb"))
        {
            Srgb::from_css(s)
        } else {
            Srgb::from_hex(s)
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() >= 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_css())
        }
    }
}
