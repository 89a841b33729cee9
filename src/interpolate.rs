use crate::{
    math::{lerp, lerp_hue},
    Color, Component, Components, Space,
};

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them. Hue components are
    /// mixed along the shorter arc of the hue circle.
    pub fn interpolate(&self, other: &Self, t: Component, space: Space) -> Color {
        let Components(l0, l1, l2) = self.to_space(space).components();
        let Components(r0, r1, r2) = other.to_space(space).components();

        let mut mixed = [lerp(l0, r0, t), lerp(l1, r1, t), lerp(l2, r2, t)];
        if let Some(index) = space.hue_index() {
            let (left, right) = ([l0, l1, l2][index], [r0, r1, r2][index]);
            mixed[index] = lerp_hue(left, right, t);
        }

        Color::new(
            space,
            mixed[0],
            mixed[1],
            mixed[2],
            lerp(self.alpha(), other.alpha(), t),
        )
    }
}
