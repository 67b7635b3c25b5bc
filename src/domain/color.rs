//! RGBA color carried by each cell
//!
//! Purely visual: forcing scripts tint cells and advected mass drags its
//! color along, but color never feeds back into the physics.

use serde::{Deserialize, Serialize};

/// Color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const ORANGE_RED: Rgba = Rgba::new(1.0, 0.27, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear blend toward `other`, `t` clamped to [0, 1].
    pub fn blend(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
        .clamped()
    }

    /// Weighted accumulate, used by the transfer pass to sum
    /// mass-premultiplied contributions.
    pub fn accumulate(&mut self, other: Rgba, weight: f64) {
        self.r += other.r * weight;
        self.g += other.g * weight;
        self.b += other.b * weight;
        self.a += other.a * weight;
    }

    pub fn scaled(self, factor: f64) -> Rgba {
        Rgba {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }

    pub fn clamped(self) -> Rgba {
        Rgba {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_midpoint() {
        let mixed = Rgba::TRANSPARENT.blend(Rgba::WHITE, 0.5);
        assert_eq!(mixed, Rgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn blend_clamps_weight() {
        assert_eq!(Rgba::RED.blend(Rgba::BLUE, 2.0), Rgba::BLUE);
        assert_eq!(Rgba::RED.blend(Rgba::BLUE, -1.0), Rgba::RED);
    }

    #[test]
    fn accumulate_then_scale_recovers_average() {
        let mut sum = Rgba::TRANSPARENT;
        sum.accumulate(Rgba::RED, 2.0);
        sum.accumulate(Rgba::BLUE, 2.0);
        let avg = sum.scaled(1.0 / 4.0);
        assert_eq!(avg, Rgba::new(0.5, 0.0, 0.5, 1.0));
    }
}
