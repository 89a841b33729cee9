//! Derive a family of graded shades from a single base color.
//!
//! Every grade maps to a target lightness. The lightness of a shade is mixed
//! from the base lightness and that target, weighted by the grade number, so
//! low grades sit near their light target and high grades near the base or
//! darker. Hue and chroma stay those of the base color.

use std::{fmt, str::FromStr};

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    error::{ParseGradeError, Result},
    math::lerp,
    models::Lch,
    palette::{match_palette, ReferencePalette},
    Color, Component, Space,
};

/// A named step in a shade family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// A numeric grade like "50" or "500". Higher is darker.
    Standard(u16),
    /// An accent grade like "A200".
    Accent(u16),
}

impl Grade {
    /// The ten standard grades, lightest first.
    pub const STANDARD: [Grade; 10] = [
        Grade::Standard(50),
        Grade::Standard(100),
        Grade::Standard(200),
        Grade::Standard(300),
        Grade::Standard(400),
        Grade::Standard(500),
        Grade::Standard(600),
        Grade::Standard(700),
        Grade::Standard(800),
        Grade::Standard(900),
    ];

    /// The four accent grades.
    pub const ACCENTS: [Grade; 4] = [
        Grade::Accent(100),
        Grade::Accent(200),
        Grade::Accent(400),
        Grade::Accent(700),
    ];

    /// Standard grades followed by accent grades.
    pub const ALL: [Grade; 14] = [
        Grade::Standard(50),
        Grade::Standard(100),
        Grade::Standard(200),
        Grade::Standard(300),
        Grade::Standard(400),
        Grade::Standard(500),
        Grade::Standard(600),
        Grade::Standard(700),
        Grade::Standard(800),
        Grade::Standard(900),
        Grade::Accent(100),
        Grade::Accent(200),
        Grade::Accent(400),
        Grade::Accent(700),
    ];

    /// The number of the grade, without the accent prefix.
    pub fn number(&self) -> u16 {
        match *self {
            Grade::Standard(n) | Grade::Accent(n) => n,
        }
    }

    /// Whether this is an accent grade.
    pub fn is_accent(&self) -> bool {
        matches!(self, Grade::Accent(_))
    }

    /// How far a shade moves from its target towards the base, in [0, 1].
    fn weight(&self) -> Component {
        (self.number() as Component / 900.0).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Standard(n) => f.pad(&n.to_string()),
            Grade::Accent(n) => f.pad(&format!("A{}", n)),
        }
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseGradeError(s.to_owned());
        let text = s.trim();

        if let Some(number) = text.strip_prefix(['A', 'a']) {
            let number = number.parse::<u16>().map_err(|_| invalid())?;
            let grade = Grade::Accent(number);
            return if Grade::ACCENTS.contains(&grade) {
                Ok(grade)
            } else {
                Err(invalid())
            };
        }

        match text.parse::<u16>() {
            Ok(number) if (1..=900).contains(&number) => Ok(Grade::Standard(number)),
            _ => Err(invalid()),
        }
    }
}

/// Target lightness (LCH, percent) of the standard grades.
const STANDARD_TARGETS: [(u16, Component); 10] = [
    (50, 96.0),
    (100, 90.0),
    (200, 80.0),
    (300, 70.0),
    (400, 60.0),
    (500, 50.0),
    (600, 42.0),
    (700, 34.0),
    (800, 26.0),
    (900, 18.0),
];

/// Target lightness (LCH, percent) of the accent grades.
const ACCENT_TARGETS: [(u16, Component); 4] = [(100, 85.0), (200, 70.0), (400, 55.0), (700, 40.0)];

fn standard_target(number: u16) -> Component {
    let (first, last) = (STANDARD_TARGETS[0], STANDARD_TARGETS[STANDARD_TARGETS.len() - 1]);
    if number <= first.0 {
        return first.1;
    }
    if number >= last.0 {
        return last.1;
    }

    STANDARD_TARGETS
        .windows(2)
        .find(|w| number <= w[1].0)
        .map(|w| {
            let (lo, hi) = (w[0], w[1]);
            let t = (number - lo.0) as Component / (hi.0 - lo.0) as Component;
            lerp(lo.1, hi.1, t)
        })
        .unwrap_or(last.1)
}

/// The lightness `grade` aims for under [`ShadePolicy::DefaultCurve`].
/// Numeric grades between the table entries are interpolated; unknown
/// accents use the numeric curve.
pub fn default_target(grade: Grade) -> Component {
    match grade {
        Grade::Accent(n) => ACCENT_TARGETS
            .iter()
            .find(|(number, _)| *number == n)
            .map(|(_, target)| *target)
            .unwrap_or_else(|| standard_target(n)),
        Grade::Standard(n) => standard_target(n),
    }
}

/// Mix the base lightness with a grade's target.
///
/// Targets lighter than the base are approached from the target side and
/// darker targets from the base side, which keeps ascending grades from
/// ever getting lighter.
fn shade_lightness(base: Component, target: Component, weight: Component) -> Component {
    if target >= base {
        lerp(target, base, weight)
    } else {
        lerp(base, target, weight)
    }
}

/// Where the target lightness of each grade comes from.
#[derive(Clone, Copy, Default)]
pub enum ShadePolicy<'a> {
    /// The built-in lightness table.
    #[default]
    DefaultCurve,
    /// The tonal curve of a reference palette. Grades the palette does not
    /// define fall back to the built-in table.
    PaletteAnchored(&'a dyn ReferencePalette),
}

impl ShadePolicy<'_> {
    /// The lightness `grade` aims for under this policy.
    pub fn target(&self, grade: Grade) -> Component {
        match self {
            ShadePolicy::DefaultCurve => default_target(grade),
            ShadePolicy::PaletteAnchored(palette) => palette
                .lightness_at(grade)
                .unwrap_or_else(|| default_target(grade)),
        }
    }
}

impl fmt::Debug for ShadePolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadePolicy::DefaultCurve => f.write_str("DefaultCurve"),
            ShadePolicy::PaletteAnchored(palette) => f
                .debug_tuple("PaletteAnchored")
                .field(&palette.name())
                .finish(),
        }
    }
}

/// A single generated shade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shade {
    /// The grade the shade was generated for.
    pub grade: Grade,
    /// The shade, in the space of the base color.
    pub color: Color,
}

/// Shades in the order their grades were requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadeFamily {
    shades: Vec<Shade>,
}

impl ShadeFamily {
    /// The color generated for `grade`.
    pub fn get(&self, grade: Grade) -> Option<&Color> {
        self.shades
            .iter()
            .find(|shade| shade.grade == grade)
            .map(|shade| &shade.color)
    }

    /// Iterate over the shades in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shade> {
        self.shades.iter()
    }

    /// The number of shades.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the family has no shades.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Express every shade in another space.
    pub fn to_space(&self, space: Space) -> ShadeFamily {
        ShadeFamily {
            shades: self
                .shades
                .iter()
                .map(|shade| Shade {
                    grade: shade.grade,
                    color: shade.color.to_space(space),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShadeFamily {
    type Item = &'a Shade;
    type IntoIter = std::slice::Iter<'a, Shade>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn shade(base: &Lch, space: Space, grade: Grade, policy: &ShadePolicy) -> Shade {
    let target = policy.target(grade);
    let lightness = shade_lightness(base.lightness(), target, grade.weight());
    trace!("grade {} target {} lightness {}", grade, target, lightness);

    Shade {
        grade,
        color: Color::from(base.with_lightness(lightness)).to_space(space),
    }
}

/// Generate one shade of `color` per grade.
///
/// Only LCH lightness changes between shades; hue, chroma and alpha are
/// those of `color`. The shades are in the same space as `color`; use
/// [`generate_shades_in`] to pick another one.
/// ```rust
/// use tincture::{generate_shades, Color, Grade, ShadePolicy, Space};
/// let base = Color::new(Space::Lch, 50.0, 40.0, 30.0, 1.0);
/// let family = generate_shades(&base, &Grade::STANDARD, ShadePolicy::DefaultCurve);
/// assert_eq!(family.len(), 10);
/// assert_eq!(family.get(Grade::Standard(500)), Some(&base));
/// ```
pub fn generate_shades(color: &Color, grades: &[Grade], policy: ShadePolicy) -> ShadeFamily {
    generate_shades_in(color, grades, policy, color.space())
}

/// Like [`generate_shades`], with every shade produced in `space`.
/// ```rust
/// use tincture::{generate_shades_in, Color, Grade, ShadePolicy, Space};
/// let base = Color::new(Space::Lch, 50.0, 40.0, 30.0, 1.0);
/// let family = generate_shades_in(&base, &Grade::STANDARD, ShadePolicy::DefaultCurve, Space::Srgb);
/// assert!(family.iter().all(|shade| shade.color.space() == Space::Srgb));
/// ```
pub fn generate_shades_in(
    color: &Color,
    grades: &[Grade],
    policy: ShadePolicy,
    space: Space,
) -> ShadeFamily {
    let base = color.to_lch();
    debug!(
        "generating {} shades from {} in {:?} with {:?}",
        grades.len(),
        base.to_components(),
        space,
        policy
    );

    #[cfg(not(feature = "parallel"))]
    let shades = grades
        .iter()
        .map(|grade| shade(&base, space, *grade, &policy))
        .collect();

    #[cfg(feature = "parallel")]
    let shades = grades
        .par_iter()
        .map(|grade| shade(&base, space, *grade, &policy))
        .collect();

    ShadeFamily { shades }
}

/// Find the palette of `catalog` closest to `color` and generate shades
/// along its tonal curve.
pub fn generate_matched_shades<P: ReferencePalette>(
    color: &Color,
    grades: &[Grade],
    catalog: &[P],
) -> Result<ShadeFamily> {
    let matched = match_palette(&color.to_lch(), catalog)?;
    Ok(generate_shades(
        color,
        grades,
        ShadePolicy::PaletteAnchored(matched.palette),
    ))
}
