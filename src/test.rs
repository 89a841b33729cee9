/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that every component of two colors is within `epsilon` and that
/// they are in the same space.
#[macro_export]
macro_rules! assert_color_eq {
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: $crate::Color = $actual;
        let expected: $crate::Color = $expected;
        assert_eq!(actual.space(), expected.space());
        let a = actual.components();
        let e = expected.components();
        for (x, y) in [(a.0, e.0), (a.1, e.1), (a.2, e.2), (actual.alpha(), expected.alpha())] {
            assert!(
                (x - y).abs() <= $epsilon,
                "{:?} != {:?} (epsilon {})",
                actual,
                expected,
                $epsilon
            );
        }
    }};
}
