//! CIEDE2000 color difference (ΔE00).
//!
//! Thresholds as a rough guide:
//! - ΔE00 < 1.0: imperceptible
//! - ΔE00 1.0-2.0: perceptible through close observation
//! - ΔE00 2.0-10.0: perceptible at a glance
//! - ΔE00 > 10.0: different colors

#![allow(clippy::many_single_char_names)]

use crate::{
    color::{Color, Component},
    math::almost_zero,
    models::{Lab, Lch},
};

/// 25^7, the chroma normalization used by the G and R_T terms.
const TWENTY_FIVE_POW_7: Component = 6_103_515_625.0;

fn chroma_weight(chroma: Component) -> Component {
    let c7 = chroma.powi(7);
    (c7 / (c7 + TWENTY_FIVE_POW_7)).sqrt()
}

/// Calculate the CIEDE2000 difference between two colors in CIE-Lab.
///
/// The result is never negative, is 0 for identical inputs and does not
/// depend on the order of the arguments. The parametric factors kL, kC and
/// kH are all 1.
pub fn delta_e00(reference: &Lab, sample: &Lab) -> Component {
    let (l1, a1, b1) = (reference.lightness(), reference.a(), reference.b());
    let (l2, a2, b2) = (sample.lightness(), sample.a(), sample.b());

    // 1. mean chroma of the unmodified colors.
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;

    // 2. stretch the a axis for low chroma colors and rederive chroma and
    //    hue from the primed colors.
    let g = 1.0 - chroma_weight(c_mean);
    let prime = |lightness: Component, a: Component, b: Component| {
        Lab::new(lightness, a + a * g / 2.0, b).to_lch()
    };
    let lch1 = prime(l1, a1, b1);
    let lch2 = prime(l2, a2, b2);

    let (c1, h1) = (lch1.chroma(), lch1.hue());
    let (c2, h2) = (lch2.chroma(), lch2.hue());

    // 3. lightness and chroma deltas and means.
    let delta_l = l1 - l2;
    let l_mean = (l1 + l2) / 2.0;
    let delta_c = c1 - c2;
    let c_mean_prime = (c1 + c2) / 2.0;

    // Without chroma on either side the hue angles are meaningless.
    let achromatic = almost_zero(c1 * c2);

    // 4. shortest signed hue difference.
    let delta_h = if achromatic {
        0.0
    } else {
        let delta = h1 - h2;
        if delta > 180.0 {
            delta - 360.0
        } else if delta < -180.0 {
            delta + 360.0
        } else {
            delta
        }
    };
    let delta_big_h = 2.0 * (c1 * c2).sqrt() * (delta_h / 2.0).to_radians().sin();

    // 5. mean hue on the correct arc.
    let h_mean = if achromatic {
        h1 + h2
    } else {
        let mean = (h1 + h2) / 2.0;
        if (h1 - h2).abs() > 180.0 {
            if mean < 180.0 {
                mean + 180.0
            } else {
                mean - 180.0
            }
        } else {
            mean
        }
    };

    // 6. weighting terms.
    let cos = |degrees: Component| degrees.to_radians().cos();
    let t = 1.0 - 0.17 * cos(h_mean - 30.0) + 0.24 * cos(2.0 * h_mean)
        + 0.32 * cos(3.0 * h_mean + 6.0)
        - 0.20 * cos(4.0 * h_mean - 63.0);

    let l_offset_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let s_l = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_mean_prime;
    let s_h = 1.0 + 0.015 * c_mean_prime * t;

    let rotation = 60.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let r_t = -2.0 * chroma_weight(c_mean_prime) * rotation.to_radians().sin();

    // 7. combine. S_L, S_C and S_H are all >= 1 for valid input, so the
    //    divisions are safe.
    let term_l = delta_l / s_l;
    let term_c = delta_c / s_c;
    let term_h = delta_big_h / s_h;

    let sum = term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h;
    sum.max(0.0).sqrt()
}

/// Colors that can be compared with CIEDE2000.
pub trait DeltaE {
    /// The CIEDE2000 difference between `self` and `other`.
    fn delta_e(&self, other: &Self) -> Component;
}

impl DeltaE for Lab {
    fn delta_e(&self, other: &Self) -> Component {
        delta_e00(self, other)
    }
}

impl DeltaE for Lch {
    fn delta_e(&self, other: &Self) -> Component {
        delta_e00(&self.to_lab(), &other.to_lab())
    }
}

impl DeltaE for Color {
    fn delta_e(&self, other: &Self) -> Component {
        delta_e00(&self.to_lab(), &other.to_lab())
    }
}

impl Color {
    /// The CIEDE2000 difference between two colors in any spaces.
    pub fn delta_e00(&self, other: &Color) -> Component {
        self.delta_e(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Space;

    /// Reference pairs from Sharma, Wu and Dalal, "The CIEDE2000
    /// Color-Difference Formula: Implementation Notes, Supplementary Test
    /// Data, and Mathematical Observations".
    #[test]
    fn reference_vectors() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const PAIRS: &[(Component, Component, Component, Component, Component, Component, Component)] = &[
            (50.0000, 2.6772, -79.7751, 50.0000, 0.0000, -82.7485, 2.0425),
            (50.0000, 3.1571, -77.2803, 50.0000, 0.0000, -82.7485, 2.8615),
            (50.0000, 2.8361, -74.0200, 50.0000, 0.0000, -82.7485, 3.4412),
            (50.0000, -1.3802, -84.2814, 50.0000, 0.0000, -82.7485, 1.0000),
            (50.0000, -1.1848, -84.8006, 50.0000, 0.0000, -82.7485, 1.0000),
            (50.0000, -0.9009, -85.5211, 50.0000, 0.0000, -82.7485, 1.0000),
            (50.0000, 0.0000, 0.0000, 50.0000, -1.0000, 2.0000, 2.3669),
            (50.0000, -1.0000, 2.0000, 50.0000, 0.0000, 0.0000, 2.3669),
            (50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0009, 7.1792),
            (50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0011, 7.2195),
            (50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0012, 7.2195),
            (50.0000, -0.0010, 2.4900, 50.0000, 0.0009, -2.4900, 4.8045),
            (50.0000, -0.0010, 2.4900, 50.0000, 0.0011, -2.4900, 4.7461),
            (50.0000, 2.5000, 0.0000, 50.0000, 0.0000, -2.5000, 4.3065),
            (50.0000, 2.5000, 0.0000, 73.0000, 25.0000, -18.0000, 27.1492),
            (50.0000, 2.5000, 0.0000, 61.0000, -5.0000, 29.0000, 22.8977),
            (50.0000, 2.5000, 0.0000, 56.0000, -27.0000, -3.0000, 31.9030),
            (50.0000, 2.5000, 0.0000, 58.0000, 24.0000, 15.0000, 19.4535),
            (50.0000, 2.5000, 0.0000, 50.0000, 3.1736, 0.5854, 1.0000),
            (50.0000, 2.5000, 0.0000, 50.0000, 3.2972, 0.0000, 1.0000),
            (50.0000, 2.5000, 0.0000, 50.0000, 1.8634, 0.5757, 1.0000),
            (50.0000, 2.5000, 0.0000, 50.0000, 3.2592, 0.3350, 1.0000),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
            (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
            (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
            (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
            (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
            (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
            (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
            (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
            (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
        ];

        for (i, &(l1, a1, b1, l2, a2, b2, expected)) in PAIRS.iter().enumerate() {
            let reference = Lab::new(l1, a1, b1);
            let sample = Lab::new(l2, a2, b2);

            let forward = delta_e00(&reference, &sample);
            let backward = delta_e00(&sample, &reference);

            assert!(
                (forward - expected).abs() < 1.0e-3,
                "pair {}: expected {}, got {}",
                i + 1,
                expected,
                forward
            );
            assert!(
                (backward - expected).abs() < 1.0e-3,
                "pair {} reversed: expected {}, got {}",
                i + 1,
                expected,
                backward
            );
        }
    }

    #[test]
    fn identical_colors_have_no_difference() {
        let lab = Lab::new(50.0, 2.6772, -79.7751);
        assert_eq!(delta_e00(&lab, &lab), 0.0);

        let gray = Lab::new(50.0, 0.0, 0.0);
        assert_eq!(delta_e00(&gray, &gray), 0.0);
    }

    #[test]
    fn black_and_white_are_far_apart() {
        let black = Lab::new(0.0, 0.0, 0.0);
        let white = Lab::new(100.0, 0.0, 0.0);
        let de = delta_e00(&black, &white);
        assert!(de > 90.0, "{de}");
        assert!(de.is_finite());
    }

    #[test]
    fn lch_and_color_inputs() {
        let a = Lab::new(50.0, 2.6772, -79.7751);
        let b = Lab::new(50.0, 0.0, -82.7485);

        let from_lch = a.to_lch().delta_e(&b.to_lch());
        approx::assert_abs_diff_eq!(from_lch, 2.0425, epsilon = 1.0e-3);

        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, 1.0);
        let also_red = Color::new(Space::Hsl, 0.0, 1.0, 0.5, 1.0);
        assert!(red.delta_e00(&also_red) < 1.0e-2);

        let cyan = Color::new(Space::Srgb, 0.0, 1.0, 1.0, 1.0);
        assert!(red.delta_e00(&cyan) > 30.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn lab() -> impl Strategy<Value = Lab> {
            (
                0.0 as Component..=100.0,
                -128.0 as Component..=128.0,
                -128.0 as Component..=128.0,
            )
                .prop_map(|(l, a, b)| Lab::new(l, a, b))
        }

        proptest! {
            #[test]
            fn reflexive(c in lab()) {
                prop_assert_eq!(delta_e00(&c, &c), 0.0);
            }

            #[test]
            fn symmetric_and_non_negative(a in lab(), b in lab()) {
                let forward = delta_e00(&a, &b);
                let backward = delta_e00(&b, &a);
                prop_assert!(forward >= 0.0);
                prop_assert!(forward.is_finite());
                prop_assert!((forward - backward).abs() <= 1.0e-4 * forward.max(1.0));
            }
        }
    }
}
