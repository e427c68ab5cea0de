//! Eyelid contour curves.
//!
//! Every curve maps a mask column `x` to the ordinate of the lid edge in buffer space
//! (`y = 0` is the top row of the mask). Inputs are normalized around the horizontal
//! center with `t = (x - CENTER) / CENTER`, so `t` runs from -1 at the left edge to +1 at
//! the right edge. Curves may return any real number; the mask rasterizer clamps.

use std::fmt;
use std::str::FromStr;

use crate::foundation::core::EYELID_CENTER;
use crate::foundation::error::{EyeError, EyeResult};

/// A pure lid contour: mask column in, boundary ordinate out.
pub type CurveFn = fn(u32) -> f64;

/// Which eyelid a mask describes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LidRole {
    /// Descends from the top; the open region lies at and below the edge.
    Upper,
    /// Rises from the bottom; the open region lies at and above the edge.
    Lower,
}

impl LidRole {
    pub const BOTH: [Self; 2] = [Self::Upper, Self::Lower];

    pub fn name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for LidRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed set of expressions with generated eyelid art.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Angry,
    Sad,
    Scared,
    Sleepy,
    Suspicious,
    Surprised,
    Love,
}

impl Mood {
    /// All moods in output order.
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Angry,
        Self::Sad,
        Self::Scared,
        Self::Sleepy,
        Self::Suspicious,
        Self::Surprised,
        Self::Love,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Angry => "angry",
            Self::Sad => "sad",
            Self::Scared => "scared",
            Self::Sleepy => "sleepy",
            Self::Suspicious => "suspicious",
            Self::Surprised => "surprised",
            Self::Love => "love",
        }
    }

    /// Whether this mood ships a custom iris texture alongside its lids.
    pub fn has_iris(self) -> bool {
        matches!(self, Self::Love)
    }

    /// Look up the lid contour for one role of this mood.
    pub fn curve(self, role: LidRole) -> CurveFn {
        match (self, role) {
            (Self::Happy | Self::Love, LidRole::Upper) => happy_upper,
            (Self::Happy | Self::Love, LidRole::Lower) => happy_lower,
            (Self::Angry, LidRole::Upper) => angry_upper,
            (Self::Angry, LidRole::Lower) => angry_lower,
            (Self::Sad, LidRole::Upper) => sad_upper,
            (Self::Sad, LidRole::Lower) => sad_lower,
            (Self::Scared, LidRole::Upper) => scared_upper,
            (Self::Scared, LidRole::Lower) => scared_lower,
            (Self::Sleepy, LidRole::Upper) => sleepy_upper,
            (Self::Sleepy, LidRole::Lower) => sleepy_lower,
            (Self::Suspicious, LidRole::Upper) => suspicious_upper,
            (Self::Suspicious, LidRole::Lower) => suspicious_lower,
            (Self::Surprised, LidRole::Upper) => surprised_upper,
            (Self::Surprised, LidRole::Lower) => surprised_lower,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = EyeError;

    fn from_str(s: &str) -> EyeResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                EyeError::validation(format!(
                    "unknown mood '{wanted}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

fn norm(x: u32) -> f64 {
    let c = f64::from(EYELID_CENTER);
    (f64::from(x) - c) / c
}

/// Shallow bowl, mostly open.
pub fn happy_upper(x: u32) -> f64 {
    let t = norm(x);
    30.0 + 20.0 * (t * t)
}

/// Gentle smile line near the bottom.
pub fn happy_lower(x: u32) -> f64 {
    let t = norm(x);
    210.0 + 15.0 * (1.0 - t * t)
}

/// Lopsided V. The signed linear term makes the left half steeper than the right.
pub fn angry_upper(x: u32) -> f64 {
    let t = norm(x);
    80.0 + 50.0 * t.abs() - 20.0 * t
}

/// Pushed up in the center for a narrow slit.
pub fn angry_lower(x: u32) -> f64 {
    let t = norm(x);
    170.0 - 30.0 * (1.0 - t * t)
}

/// Higher in the center, drooping at the corners.
pub fn sad_upper(x: u32) -> f64 {
    let t = norm(x);
    50.0 + 40.0 * (t * t) + 15.0 * t.abs()
}

pub fn sad_lower(x: u32) -> f64 {
    let t = norm(x);
    210.0 - 10.0 * (1.0 - t * t)
}

pub fn scared_upper(x: u32) -> f64 {
    let t = norm(x);
    15.0 + 10.0 * (t * t)
}

pub fn scared_lower(x: u32) -> f64 {
    let t = norm(x);
    225.0 - 10.0 * (t * t)
}

/// Heavy droop covering a little over half the eye.
pub fn sleepy_upper(x: u32) -> f64 {
    let t = norm(x);
    130.0 + 15.0 * (t * t)
}

pub fn sleepy_lower(x: u32) -> f64 {
    let t = norm(x);
    200.0 + 10.0 * (1.0 - t * t)
}

pub fn suspicious_upper(x: u32) -> f64 {
    let t = norm(x);
    110.0 + 10.0 * (t * t)
}

pub fn suspicious_lower(x: u32) -> f64 {
    let t = norm(x);
    150.0 - 10.0 * (1.0 - t * t)
}

pub fn surprised_upper(x: u32) -> f64 {
    let t = norm(x);
    10.0 + 15.0 * (t * t)
}

pub fn surprised_lower(x: u32) -> f64 {
    let t = norm(x);
    230.0 - 15.0 * (t * t)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/lids.rs"]
mod tests;
