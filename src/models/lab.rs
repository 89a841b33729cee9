//! Models for CIE-Lab in its rectangular (Lab) and polar (LCH) forms.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{almost_zero, normalize, normalize_hue},
    models::{xyz::WHITE_POINT, Normalize, Xyz},
};

/// The knee of the piecewise CIE lightness function.
const DELTA: Component = 6.0 / 29.0;

tincture_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The a component (green to red axis).
        a: Component,
        /// The b component (blue to yellow axis).
        b: Component,
    }
}

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

impl Normalize for Lab {
    fn normalize(components: Components) -> Components {
        let Components(lightness, a, b) = components.map(normalize);
        Components(lightness.clamp(0.0, 100.0), a, b)
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_lch(&self) -> Lch {
        let chroma = self.a.hypot(self.b);
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            self.b.atan2(self.a).to_degrees()
        };

        Lch::new_with_alpha(self.lightness, chroma, hue, self.alpha)
    }

    /// Convert to CIE-XYZ relative to the D65 white point.
    pub fn to_xyz(&self) -> Xyz {
        fn f_inv(v: Component) -> Component {
            if v > DELTA {
                v * v * v
            } else {
                3.0 * DELTA * DELTA * (v - 4.0 / 29.0)
            }
        }

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new_with_alpha(
            f_inv(fx) * WHITE_POINT.0,
            f_inv(fy) * WHITE_POINT.1,
            f_inv(fz) * WHITE_POINT.2,
            self.alpha,
        )
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        fn f(t: Component) -> Component {
            if t > DELTA * DELTA * DELTA {
                t.cbrt()
            } else {
                t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
            }
        }

        let fx = f(value.x() / WHITE_POINT.0);
        let fy = f(value.y() / WHITE_POINT.1);
        let fz = f(value.z() / WHITE_POINT.2);

        Lab::new_with_alpha(
            116.0 * fy - 16.0,
            500.0 * (fx - fy),
            200.0 * (fy - fz),
            value.alpha(),
        )
    }
}

impl Xyz {
    /// Convert to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }
}

tincture_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// cylindrical polar form.
    pub struct Lch {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The chroma component, never negative.
        chroma: Component,
        /// The hue angle in degrees, in [0, 360).
        hue: Component,
    }
}

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

impl Normalize for Lch {
    fn normalize(components: Components) -> Components {
        let Components(lightness, chroma, hue) = components.map(normalize);
        Components(
            lightness.clamp(0.0, 100.0),
            chroma.max(0.0),
            normalize_hue(hue),
        )
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new_with_alpha(self.lightness, a, b, self.alpha)
    }
}

impl From<Lab> for Lch {
    fn from(value: Lab) -> Self {
        value.to_lch()
    }
}

impl From<Lch> for Lab {
    fn from(value: Lch) -> Self {
        value.to_lab()
    }
}
