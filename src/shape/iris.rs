//! Polar color field for the love iris texture.
//!
//! The texture is sampled in polar form: `angle` is the fraction of a full revolution
//! (`[0, 1)`), `radius` runs from 0 at the outer rim to 1 at the pupil edge. Color is
//! built in four passes. Each pass truncates toward zero and clamps to `[0, 255]`.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::Rgb8;
use crate::foundation::math::{lerp, trunc_channel};

/// Band the heart highlight may stray from before it fades out completely.
const HIGHLIGHT_TOLERANCE: f64 = 0.08;

/// Intermediate colors of one sample, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IrisStages {
    pub base: Rgb8,
    pub highlight: Rgb8,
    pub streak: Rgb8,
    pub sparkle: Rgb8,
}

/// Parameters of the pink-to-crimson iris with a heart-shaped highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IrisField {
    /// Color at the outer rim.
    pub outer: Rgb8,
    /// Color halfway between rim and pupil.
    pub mid: Rgb8,
    /// Color at the pupil edge.
    pub deep: Rgb8,
    /// Additive gain of the heart highlight at full weight.
    pub highlight_gain: [f64; 3],
    /// Additive red/green swing of the angular streaks.
    pub streak_gain: [f64; 2],
    /// Additive gain of the sparkle lobes.
    pub sparkle_gain: [f64; 3],
}

impl Default for IrisField {
    fn default() -> Self {
        Self::love()
    }
}

impl IrisField {
    pub fn love() -> Self {
        Self {
            outer: Rgb8::new(255, 120, 150),
            mid: Rgb8::new(215, 20, 30),
            deep: Rgb8::new(135, 5, 10),
            highlight_gain: [40.0, 20.0, 30.0],
            streak_gain: [30.0, 10.0],
            sparkle_gain: [25.0, 15.0, 20.0],
        }
    }

    /// Final color at a polar position.
    pub fn sample(&self, angle: f64, radius: f64) -> Rgb8 {
        self.stages(angle, radius).sparkle
    }

    /// Every intermediate color at a polar position.
    pub fn stages(&self, angle: f64, radius: f64) -> IrisStages {
        let theta = angle * TAU;
        let base = self.base_gradient(radius);
        let highlight = self.heart_highlight(base, theta, radius);
        let streak = self.streaks(highlight, theta);
        let sparkle = self.sparkle(streak, theta, radius);
        IrisStages {
            base,
            highlight,
            streak,
            sparkle,
        }
    }

    fn base_gradient(&self, radius: f64) -> Rgb8 {
        let (from, to, t) = if radius < 0.5 {
            (self.outer, self.mid, radius * 2.0)
        } else {
            (self.mid, self.deep, (radius - 0.5) * 2.0)
        };
        let ch = |a: u8, b: u8| trunc_channel(lerp(f64::from(a), f64::from(b), t));
        Rgb8::new(ch(from.r, to.r), ch(from.g, to.g), ch(from.b, to.b))
    }

    fn heart_highlight(&self, c: Rgb8, theta: f64, radius: f64) -> Rgb8 {
        let band = 0.3 + heart_radius(theta, 0.3) * 0.2;
        let dist = (radius - band).abs();
        if dist >= HIGHLIGHT_TOLERANCE {
            return c;
        }
        let w = (HIGHLIGHT_TOLERANCE - dist) / HIGHLIGHT_TOLERANCE;
        add(c, self.highlight_gain.map(|g| g * w))
    }

    fn streaks(&self, c: Rgb8, theta: f64) -> Rgb8 {
        let mut s = (theta * 12.0).sin() * 0.5 + 0.5;
        s *= (theta * 7.0 + 1.5).sin() * 0.3 + 0.7;
        let d = s - 0.5;
        add(c, [d * self.streak_gain[0], d * self.streak_gain[1], 0.0])
    }

    fn sparkle(&self, c: Rgb8, theta: f64, radius: f64) -> Rgb8 {
        let k = (theta * 5.0).sin().max(0.0) * (radius * PI * 3.0).sin().max(0.0);
        add(c, self.sparkle_gain.map(|g| g * k))
    }
}

/// Cardioid `r = (1 - sin t) * scale`, traced once per revolution.
pub fn heart_radius(theta: f64, scale: f64) -> f64 {
    (1.0 - theta.sin()) * scale
}

fn add(c: Rgb8, delta: [f64; 3]) -> Rgb8 {
    Rgb8::new(
        trunc_channel(f64::from(c.r) + delta[0]),
        trunc_channel(f64::from(c.g) + delta[1]),
        trunc_channel(f64::from(c.b) + delta[2]),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shape/iris.rs"]
mod tests;
