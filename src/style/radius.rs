//! Border radius: `rounded-<scale>` and `rounded-<corner>-<scale>` tokens.
//!
//! Tokens are scanned in input order. Per-corner tokens accumulate; the
//! first bare `rounded-<scale>` stops the scan and applies to all four
//! corners, discarding whatever per-corner values came before it.

use std::str::FromStr;

use crate::style::error::UnknownKeyword;
use crate::style::tokenizer::TokenSet;

/// A single corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    /// Radius in logical pixels.
    Fixed(f32),
    /// Fully rounded (pill / circle).
    Infinite,
}

impl Radius {
    pub const ZERO: Radius = Radius::Fixed(0.0);

    /// The radius as `f32`, with `Infinite` mapped to `f32::INFINITY`.
    pub fn to_f32(self) -> f32 {
        match self {
            Radius::Fixed(v) => v,
            Radius::Infinite => f32::INFINITY,
        }
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius::ZERO
    }
}

/// Named radius scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusScale {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
    Xl9,
    Xl10,
    Full,
}

/// Scale keywords and their radii.
pub const RADIUS_SCALE: [(&str, RadiusScale, Radius); 15] = [
    ("none", RadiusScale::None, Radius::Fixed(0.0)),
    ("sm", RadiusScale::Sm, Radius::Fixed(8.0)),
    ("md", RadiusScale::Md, Radius::Fixed(16.0)),
    ("lg", RadiusScale::Lg, Radius::Fixed(24.0)),
    ("xl", RadiusScale::Xl, Radius::Fixed(32.0)),
    ("2xl", RadiusScale::Xl2, Radius::Fixed(48.0)),
    ("3xl", RadiusScale::Xl3, Radius::Fixed(64.0)),
    ("4xl", RadiusScale::Xl4, Radius::Fixed(80.0)),
    ("5xl", RadiusScale::Xl5, Radius::Fixed(100.0)),
    ("6xl", RadiusScale::Xl6, Radius::Fixed(120.0)),
    ("7xl", RadiusScale::Xl7, Radius::Fixed(140.0)),
    ("8xl", RadiusScale::Xl8, Radius::Fixed(160.0)),
    ("9xl", RadiusScale::Xl9, Radius::Fixed(180.0)),
    ("10xl", RadiusScale::Xl10, Radius::Fixed(200.0)),
    ("full", RadiusScale::Full, Radius::Infinite),
];

impl RadiusScale {
    /// The radius this scale step stands for.
    pub fn radius(self) -> Radius {
        RADIUS_SCALE
            .iter()
            .find(|(_, scale, _)| *scale == self)
            .map(|(_, _, radius)| *radius)
            .unwrap_or_default()
    }
}

impl FromStr for RadiusScale {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RADIUS_SCALE
            .iter()
            .find(|(keyword, _, _)| *keyword == s)
            .map(|(_, scale, _)| *scale)
            .ok_or_else(|| UnknownKeyword::new("radius scale", s))
    }
}

/// Scale keyword to radius; unknown keywords are zero.
fn scale_radius(keyword: &str) -> Radius {
    match keyword.parse::<RadiusScale>() {
        Ok(scale) => scale.radius(),
        Err(_) => {
            tracing::trace!(keyword, "unknown radius scale, using zero");
            Radius::ZERO
        }
    }
}

/// One of the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FromStr for Corner {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tl" => Ok(Corner::TopLeft),
            "tr" => Ok(Corner::TopRight),
            "bl" => Ok(Corner::BottomLeft),
            "br" => Ok(Corner::BottomRight),
            other => Err(UnknownKeyword::new("corner", other)),
        }
    }
}

/// Radii of the four corners of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: Radius,
    pub top_right: Radius,
    pub bottom_left: Radius,
    pub bottom_right: Radius,
}

impl CornerRadii {
    /// The same radius on every corner.
    pub fn all(radius: Radius) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    /// Returns `true` if all four corners share one radius.
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }

    pub fn get(&self, corner: Corner) -> Radius {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    pub fn set(&mut self, corner: Corner, radius: Radius) {
        match corner {
            Corner::TopLeft => self.top_left = radius,
            Corner::TopRight => self.top_right = radius,
            Corner::BottomLeft => self.bottom_left = radius,
            Corner::BottomRight => self.bottom_right = radius,
        }
    }
}

/// Resolve corner radii from a token set. Never fails.
pub fn resolve_radius(tokens: &TokenSet<'_>) -> CornerRadii {
    let mut radii = CornerRadii::default();

    for rest in tokens.with_prefix("rounded-") {
        match rest.split_once('-') {
            Some((corner, scale)) => match corner.parse::<Corner>() {
                Ok(corner) => radii.set(corner, scale_radius(scale)),
                Err(_) => tracing::trace!(corner, "ignoring unknown rounded corner"),
            },
            None => return CornerRadii::all(scale_radius(rest)),
        }
    }

    radii
}
