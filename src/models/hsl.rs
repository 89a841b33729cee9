//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{normalize_hue, normalize_unit},
    models::Normalize,
};

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue angle in degrees, in [0, 360).
        hue: Component,
        /// The saturation component of the color, in [0, 1].
        saturation: Component,
        /// The lightness component of the color, in [0, 1].
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl Normalize for Hsl {
    fn normalize(components: Components) -> Components {
        let Components(hue, saturation, lightness) = components;
        Components(
            normalize_hue(hue),
            normalize_unit(saturation),
            normalize_unit(lightness),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_normalized() {
        let hsl = Hsl::new(-30.0, 1.5, Component::NAN);
        assert_eq!(hsl.to_components(), Components(330.0, 1.0, 0.0));
    }

    #[test]
    fn with_methods_return_new_values() {
        let hsl = Hsl::new(120.0, 0.5, 0.5);
        let lighter = hsl.with_lightness(0.75);
        assert_eq!(hsl.lightness(), 0.5);
        assert_eq!(lighter.lightness(), 0.75);
        assert_eq!(lighter.hue(), 120.0);

        let rotated = hsl.with_hue(480.0);
        assert_eq!(rotated.hue(), 120.0);
    }
}
