use crate::domain::color::Rgba;

use super::super::FluidGrid;

impl FluidGrid {
    // === Color access ===
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Rgba {
        self.colors[self.index(x, y)]
    }

    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        self.colors[idx] = color.clamped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_color_clamps_components() {
        let mut grid = FluidGrid::new(2, 2, 0.0, 0.0).unwrap();
        grid.set_color(0, 1, Rgba::new(2.0, -1.0, 0.5, 1.0));
        assert_eq!(grid.color_at(0, 1), Rgba::new(1.0, 0.0, 0.5, 1.0));
    }
}
