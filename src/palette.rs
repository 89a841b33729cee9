//! Reference palettes and finding the one closest to a color.
//!
//! The catalog itself is supplied by the caller. Anything that can report
//! its smallest CIEDE2000 distance to a color can take part through the
//! [`ReferencePalette`] trait; [`TonalPalette`] is a ready-made
//! implementation backed by a list of graded anchor colors.

use std::cmp::Ordering;

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{
    delta_e::DeltaE,
    error::{Error, Result, TonalPaletteError},
    models::{Lch, Srgb},
    shades::Grade,
    Color, Component,
};

/// A named palette from a reference catalog.
///
/// Catalogs are shared read-only while they are scored, hence `Sync`.
pub trait ReferencePalette: Sync {
    /// The name of the palette, e.g. "Deep Orange".
    fn name(&self) -> &str;

    /// The smallest CIEDE2000 distance between `color` and any color of the
    /// palette.
    fn min_delta_e(&self, color: &Lch) -> Component;

    /// The LCH lightness the palette uses for `grade`, if it defines one.
    fn lightness_at(&self, grade: Grade) -> Option<Component>;
}

impl<T: ReferencePalette + ?Sized> ReferencePalette for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn min_delta_e(&self, color: &Lch) -> Component {
        (**self).min_delta_e(color)
    }

    fn lightness_at(&self, grade: Grade) -> Option<Component> {
        (**self).lightness_at(grade)
    }
}

impl<T: ReferencePalette + ?Sized> ReferencePalette for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn min_delta_e(&self, color: &Lch) -> Component {
        (**self).min_delta_e(color)
    }

    fn lightness_at(&self, grade: Grade) -> Option<Component> {
        (**self).lightness_at(grade)
    }
}

/// A palette defined by one anchor color per grade.
#[derive(Clone, Debug, PartialEq)]
pub struct TonalPalette {
    name: String,
    anchors: Vec<(Grade, Lch)>,
}

impl TonalPalette {
    /// Create a palette from its anchors. At least one anchor is required.
    /// When a grade is listed more than once the first anchor wins.
    pub fn new(
        name: impl Into<String>,
        anchors: impl IntoIterator<Item = (Grade, Lch)>,
    ) -> std::result::Result<Self, TonalPaletteError> {
        let anchors: Vec<_> = anchors.into_iter().collect();
        if anchors.is_empty() {
            return Err(TonalPaletteError::NoAnchors);
        }

        Ok(Self {
            name: name.into(),
            anchors,
        })
    }

    /// Create a palette from hex encoded anchors, e.g. `(Grade::Standard(500), "#FF5722")`.
    pub fn from_hex<'s>(
        name: impl Into<String>,
        anchors: impl IntoIterator<Item = (Grade, &'s str)>,
    ) -> Result<Self> {
        let anchors = anchors
            .into_iter()
            .map(|(grade, hex)| -> Result<(Grade, Lch)> {
                Ok((grade, Color::from(Srgb::from_hex(hex)?).to_lch()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(name, anchors)?)
    }

    /// The anchors in the order they were given.
    pub fn anchors(&self) -> &[(Grade, Lch)] {
        &self.anchors
    }

    /// The anchor color for `grade`.
    pub fn get(&self, grade: Grade) -> Option<&Lch> {
        self.anchors
            .iter()
            .find(|(g, _)| *g == grade)
            .map(|(_, lch)| lch)
    }
}

impl ReferencePalette for TonalPalette {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_delta_e(&self, color: &Lch) -> Component {
        self.anchors
            .iter()
            .map(|(_, anchor)| anchor.delta_e(color))
            .fold(Component::INFINITY, Component::min)
    }

    fn lightness_at(&self, grade: Grade) -> Option<Component> {
        self.get(grade).map(Lch::lightness)
    }
}

/// The result of [`match_palette`].
#[derive(Debug)]
pub struct PaletteMatch<'a, P> {
    /// Position of the palette in the catalog.
    pub index: usize,
    /// The matched palette.
    pub palette: &'a P,
    /// The CIEDE2000 distance reported by the palette. A palette that
    /// reported NaN scores as infinity.
    pub distance: Component,
}

impl<P> Clone for PaletteMatch<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PaletteMatch<'_, P> {}

/// Order candidates by distance, then by catalog position so that ties keep
/// the first palette.
fn closer(a: &(usize, Component), b: &(usize, Component)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

fn score<P: ReferencePalette>(color: &Lch, index: usize, palette: &P) -> (usize, Component) {
    let distance = palette.min_delta_e(color);
    trace!("palette {} ({}) scored {}", index, palette.name(), distance);

    // `total_cmp` puts NaN with the sign bit set before every number.
    if distance.is_nan() {
        (index, Component::INFINITY)
    } else {
        (index, distance)
    }
}

/// Find the palette in `catalog` closest to `color`.
///
/// Every palette is scored with [`ReferencePalette::min_delta_e`] and the
/// smallest score wins. Ties keep the palette that comes first in the
/// catalog, so the result only depends on the catalog and the color.
pub fn match_palette<'a, P: ReferencePalette>(
    color: &Lch,
    catalog: &'a [P],
) -> Result<PaletteMatch<'a, P>> {
    #[cfg(not(feature = "parallel"))]
    let best = catalog
        .iter()
        .enumerate()
        .map(|(index, palette)| score(color, index, palette))
        .min_by(closer);

    #[cfg(feature = "parallel")]
    let best = catalog
        .par_iter()
        .enumerate()
        .map(|(index, palette)| score(color, index, palette))
        .min_by(closer);

    let (index, distance) = best.ok_or(Error::EmptyCatalog)?;
    let palette = &catalog[index];

    debug!(
        "matched palette {} ({}) at distance {:.4}",
        index,
        palette.name(),
        distance
    );

    Ok(PaletteMatch {
        index,
        palette,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(name: &str, anchors: &[(u16, Component, Component, Component)]) -> TonalPalette {
        TonalPalette::new(
            name,
            anchors
                .iter()
                .map(|&(grade, l, c, h)| (Grade::Standard(grade), Lch::new(l, c, h))),
        )
        .unwrap()
    }

    fn catalog() -> Vec<TonalPalette> {
        vec![
            palette("Red", &[(100, 90.0, 20.0, 25.0), (500, 55.0, 75.0, 30.0)]),
            palette("Green", &[(100, 92.0, 20.0, 140.0), (500, 60.0, 60.0, 140.0)]),
            palette("Blue", &[(100, 90.0, 15.0, 270.0), (500, 45.0, 65.0, 280.0)]),
        ]
    }

    #[test]
    fn palettes_need_anchors() {
        let empty: Vec<(Grade, Lch)> = vec![];
        assert_eq!(
            TonalPalette::new("Empty", empty),
            Err(TonalPaletteError::NoAnchors)
        );
    }

    #[test]
    fn distance_to_an_anchor_is_zero() {
        let p = palette("Red", &[(100, 90.0, 20.0, 25.0), (500, 55.0, 75.0, 30.0)]);
        assert_eq!(p.min_delta_e(&Lch::new(55.0, 75.0, 30.0)), 0.0);
        assert!(p.min_delta_e(&Lch::new(60.0, 70.0, 30.0)) > 0.0);
    }

    #[test]
    fn lightness_at_reads_the_anchor() {
        let p = palette("Red", &[(100, 90.0, 20.0, 25.0), (500, 55.0, 75.0, 30.0)]);
        assert_eq!(p.lightness_at(Grade::Standard(100)), Some(90.0));
        assert_eq!(p.lightness_at(Grade::Standard(900)), None);
        assert_eq!(p.lightness_at(Grade::Accent(100)), None);
    }

    #[test]
    fn from_hex_builds_anchors() {
        let p = TonalPalette::from_hex(
            "Deep Orange",
            [(Grade::Standard(50), "#FBE9E7"), (Grade::Standard(500), "#FF5722")],
        )
        .unwrap();
        assert_eq!(p.name(), "Deep Orange");
        assert_eq!(p.anchors().len(), 2);
        let l500 = p.lightness_at(Grade::Standard(500)).unwrap();
        assert!(l500 > 55.0 && l500 < 65.0, "{l500}");

        let err = TonalPalette::from_hex("Bad", [(Grade::Standard(50), "#XYZ")]).unwrap_err();
        assert!(matches!(err, Error::ParseColor(_)));

        let none: [(Grade, &str); 0] = [];
        assert_eq!(
            TonalPalette::from_hex("None", none).unwrap_err(),
            Error::Palette(TonalPaletteError::NoAnchors)
        );
    }

    #[test]
    fn matches_the_closest_palette() {
        let catalog = catalog();

        let found = match_palette(&Lch::new(50.0, 60.0, 285.0), &catalog).unwrap();
        assert_eq!(found.index, 2);
        assert_eq!(found.palette.name(), "Blue");

        let found = match_palette(&Lch::new(58.0, 55.0, 135.0), &catalog).unwrap();
        assert_eq!(found.palette.name(), "Green");
        assert!(found.distance > 0.0);

        let found = match_palette(&Lch::new(55.0, 75.0, 30.0), &catalog).unwrap();
        assert_eq!(found.palette.name(), "Red");
        assert_eq!(found.distance, 0.0);
    }

    #[test]
    fn ties_keep_the_first_palette() {
        let anchors = [(500, 50.0, 40.0, 200.0)];
        let catalog = vec![
            palette("First", &anchors),
            palette("Second", &anchors),
            palette("Third", &anchors),
        ];

        let found = match_palette(&Lch::new(40.0, 30.0, 180.0), &catalog).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.palette.name(), "First");
    }

    #[test]
    fn matching_is_deterministic() {
        let catalog = catalog();
        let color = Lch::new(70.0, 30.0, 200.0);
        let first = match_palette(&color, &catalog).unwrap();
        for _ in 0..16 {
            let again = match_palette(&color, &catalog).unwrap();
            assert_eq!(again.index, first.index);
            assert_eq!(again.distance, first.distance);
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog: Vec<TonalPalette> = vec![];
        assert_eq!(
            match_palette(&Lch::new(50.0, 10.0, 10.0), &catalog).unwrap_err(),
            Error::EmptyCatalog
        );
    }

    struct Fixed(&'static str, Component);

    impl ReferencePalette for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        fn min_delta_e(&self, _color: &Lch) -> Component {
            self.1
        }

        fn lightness_at(&self, _grade: Grade) -> Option<Component> {
            None
        }
    }

    #[test]
    fn catalogs_of_trait_objects() {
        let catalog: Vec<Box<dyn ReferencePalette>> = vec![
            Box::new(Fixed("Far", 12.0)),
            Box::new(Fixed("Broken", Component::NAN)),
            Box::new(Fixed("Near", 3.0)),
            Box::new(catalog().remove(0)),
        ];

        let found = match_palette(&Lch::new(20.0, 5.0, 300.0), &catalog).unwrap();
        assert_eq!(found.palette.name(), "Near");
        assert_eq!(found.distance, 3.0);

        let borrowed: Vec<&dyn ReferencePalette> = catalog.iter().map(|p| p.as_ref()).collect();
        let found = match_palette(&Lch::new(20.0, 5.0, 300.0), &borrowed).unwrap();
        assert_eq!(found.index, 2);
    }

    struct Computed(&'static str);

    impl ReferencePalette for Computed {
        fn name(&self) -> &str {
            self.0
        }

        fn min_delta_e(&self, _color: &Lch) -> Component {
            std::hint::black_box(0.0 as Component) / 0.0
        }

        fn lightness_at(&self, _grade: Grade) -> Option<Component> {
            None
        }
    }

    #[test]
    fn nan_distances_never_win() {
        let color = Lch::new(55.0, 75.0, 30.0);
        let real = || -> Box<dyn ReferencePalette> {
            Box::new(palette("Real", &[(500, 55.0, 75.0, 30.0)]))
        };

        let catalog: Vec<Box<dyn ReferencePalette>> = vec![real(), Box::new(Computed("Broken"))];
        let found = match_palette(&color, &catalog).unwrap();
        assert_eq!(found.palette.name(), "Real");
        assert_eq!(found.distance, 0.0);

        let catalog: Vec<Box<dyn ReferencePalette>> = vec![Box::new(Computed("Broken")), real()];
        let found = match_palette(&color, &catalog).unwrap();
        assert_eq!(found.palette.name(), "Real");
        assert_eq!(found.index, 1);

        let catalog = vec![Computed("Broken")];
        let found = match_palette(&color, &catalog).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.distance, Component::INFINITY);
    }
}
