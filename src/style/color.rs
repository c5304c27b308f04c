//! Background color resolution: `bg-<family>-<shade>` tokens.
//!
//! A family is one of three things:
//! - a palette family with a nine-step shade scale (`red`, `blue`, ...)
//! - a fixed literal (`black`, `white`, `transparent`), shade ignored
//! - a theme role (`primary`, `onSurface`, ...) looked up through a
//!   [`ThemeLookup`], shade ignored
//!
//! This is the only resolver that fails: a missing `bg-` token or an
//! unknown family is an error, never a default.

use std::fmt;
use std::str::FromStr;

use crate::style::error::{StyleError, UnknownKeyword};
use crate::style::tokenizer::TokenSet;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Create a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Create an opaque color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns this color with its alpha channel replaced by `opacity`
    /// (clamped to `0.0..=1.0`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u32;
        Color((self.0 & 0x00FF_FFFF) | alpha << 24)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A fixed palette family with shades `100`..`900`.
///
/// `Orange` extends the seven classic families (red, blue, green, yellow,
/// purple, pink, gray); `bg-orange-*` resolves instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFamily {
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Gray,
}

// Shade tables, index 0 is shade 100.
const RED: [u32; 9] = [
    0xFFFFCDD2, 0xFFEF9A9A, 0xFFE57373, 0xFFEF5350, 0xFFF44336, 0xFFE53935, 0xFFD32F2F,
    0xFFC62828, 0xFFB71C1C,
];
const ORANGE: [u32; 9] = [
    0xFFFFE0B2, 0xFFFFCC80, 0xFFFFB74D, 0xFFFFA726, 0xFFFF9800, 0xFFFB8C00, 0xFFF57C00,
    0xFFEF6C00, 0xFFE65100,
];
const BLUE: [u32; 9] = [
    0xFFBBDEFB, 0xFF90CAF9, 0xFF64B5F6, 0xFF42A5F5, 0xFF2196F3, 0xFF1E88E5, 0xFF1976D2,
    0xFF1565C0, 0xFF0D47A1,
];
const GREEN: [u32; 9] = [
    0xFFC8E6C9, 0xFFA5D6A7, 0xFF81C784, 0xFF66BB6A, 0xFF4CAF50, 0xFF43A047, 0xFF388E3C,
    0xFF2E7D32, 0xFF1B5E20,
];
const YELLOW: [u32; 9] = [
    0xFFFFF9C4, 0xFFFFF59D, 0xFFFFF176, 0xFFFFEE58, 0xFFFFEB3B, 0xFFFDD835, 0xFFFBC02D,
    0xFFF9A825, 0xFFF57F17,
];
const PURPLE: [u32; 9] = [
    0xFFE1BEE7, 0xFFCE93D8, 0xFFBA68C8, 0xFFAB47BC, 0xFF9C27B0, 0xFF8E24AA, 0xFF7B1FA2,
    0xFF6A1B9A, 0xFF4A148C,
];
const PINK: [u32; 9] = [
    0xFFF8BBD0, 0xFFF48FB1, 0xFFF06292, 0xFFEC407A, 0xFFE91E63, 0xFFD81B60, 0xFFC2185B,
    0xFFAD1457, 0xFF880E4F,
];
const GRAY: [u32; 9] = [
    0xFFF5F5F5, 0xFFEEEEEE, 0xFFE0E0E0, 0xFFBDBDBD, 0xFF9E9E9E, 0xFF757575, 0xFF616161,
    0xFF424242, 0xFF212121,
];

impl PaletteFamily {
    /// Every family, in declaration order.
    pub const ALL: [PaletteFamily; 8] = [
        PaletteFamily::Red,
        PaletteFamily::Orange,
        PaletteFamily::Blue,
        PaletteFamily::Green,
        PaletteFamily::Yellow,
        PaletteFamily::Purple,
        PaletteFamily::Pink,
        PaletteFamily::Gray,
    ];

    /// The keyword used in `bg-<family>-<shade>`.
    pub fn name(self) -> &'static str {
        match self {
            PaletteFamily::Red => "red",
            PaletteFamily::Orange => "orange",
            PaletteFamily::Blue => "blue",
            PaletteFamily::Green => "green",
            PaletteFamily::Yellow => "yellow",
            PaletteFamily::Purple => "purple",
            PaletteFamily::Pink => "pink",
            PaletteFamily::Gray => "gray",
        }
    }

    fn shades(self) -> &'static [u32; 9] {
        match self {
            PaletteFamily::Red => &RED,
            PaletteFamily::Orange => &ORANGE,
            PaletteFamily::Blue => &BLUE,
            PaletteFamily::Green => &GREEN,
            PaletteFamily::Yellow => &YELLOW,
            PaletteFamily::Purple => &PURPLE,
            PaletteFamily::Pink => &PINK,
            PaletteFamily::Gray => &GRAY,
        }
    }

    /// The family's canonical color (its 500 shade).
    pub fn default_color(self) -> Color {
        Color(self.shades()[4])
    }

    /// Look up a shade keyword (`"100"`..`"900"`); anything else yields the
    /// family default.
    pub fn shade(self, shade: &str) -> Color {
        let index = match shade {
            "100" => 0,
            "200" => 1,
            "300" => 2,
            "400" => 3,
            "500" => 4,
            "600" => 5,
            "700" => 6,
            "800" => 7,
            "900" => 8,
            _ => {
                tracing::trace!(family = self.name(), shade, "unknown shade, using family default");
                return self.default_color();
            }
        };
        Color(self.shades()[index])
    }
}

impl FromStr for PaletteFamily {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| UnknownKeyword::new("palette family", s))
    }
}

// ---------------------------------------------------------------------------
// Theme roles
// ---------------------------------------------------------------------------

/// A semantic color slot resolved against the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    Primary,
    Secondary,
    Tertiary,
    Surface,
    OnSurface,
    OnPrimary,
    OnSecondary,
    OnTertiary,
    OnError,
}

impl ThemeRole {
    /// Every role, in declaration order.
    pub const ALL: [ThemeRole; 9] = [
        ThemeRole::Primary,
        ThemeRole::Secondary,
        ThemeRole::Tertiary,
        ThemeRole::Surface,
        ThemeRole::OnSurface,
        ThemeRole::OnPrimary,
        ThemeRole::OnSecondary,
        ThemeRole::OnTertiary,
        ThemeRole::OnError,
    ];

    /// The keyword used in `bg-<role>-<anything>`.
    pub fn name(self) -> &'static str {
        match self {
            ThemeRole::Primary => "primary",
            ThemeRole::Secondary => "secondary",
            ThemeRole::Tertiary => "tertiary",
            ThemeRole::Surface => "surface",
            ThemeRole::OnSurface => "onSurface",
            ThemeRole::OnPrimary => "onPrimary",
            ThemeRole::OnSecondary => "onSecondary",
            ThemeRole::OnTertiary => "onTertiary",
            ThemeRole::OnError => "onError",
        }
    }
}

impl FromStr for ThemeRole {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownKeyword::new("theme role", s))
    }
}

/// Maps theme roles to concrete colors. Supplied by the host toolkit.
///
/// A [`StyleContext`](crate::StyleContext) only accepts `Sync` lookups so it
/// can be shared between threads.
pub trait ThemeLookup {
    fn role_color(&self, role: ThemeRole) -> Color;
}

impl<F> ThemeLookup for F
where
    F: Fn(ThemeRole) -> Color,
{
    fn role_color(&self, role: ThemeRole) -> Color {
        self(role)
    }
}

/// A concrete color scheme covering every [`ThemeRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_tertiary: Color,
    pub on_error: Color,
}

impl Theme {
    /// Material baseline light scheme.
    pub const fn light() -> Self {
        Self {
            primary: Color(0xFF6750A4),
            secondary: Color(0xFF625B71),
            tertiary: Color(0xFF7D5260),
            surface: Color(0xFFFEF7FF),
            on_surface: Color(0xFF1D1B20),
            on_primary: Color(0xFFFFFFFF),
            on_secondary: Color(0xFFFFFFFF),
            on_tertiary: Color(0xFFFFFFFF),
            on_error: Color(0xFFFFFFFF),
        }
    }

    /// Material baseline dark scheme.
    pub const fn dark() -> Self {
        Self {
            primary: Color(0xFFD0BCFF),
            secondary: Color(0xFFCCC2DC),
            tertiary: Color(0xFFEFB8C8),
            surface: Color(0xFF141218),
            on_surface: Color(0xFFE6E0E9),
            on_primary: Color(0xFF381E72),
            on_secondary: Color(0xFF332D41),
            on_tertiary: Color(0xFF492532),
            on_error: Color(0xFF601410),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeLookup for Theme {
    fn role_color(&self, role: ThemeRole) -> Color {
        match role {
            ThemeRole::Primary => self.primary,
            ThemeRole::Secondary => self.secondary,
            ThemeRole::Tertiary => self.tertiary,
            ThemeRole::Surface => self.surface,
            ThemeRole::OnSurface => self.on_surface,
            ThemeRole::OnPrimary => self.on_primary,
            ThemeRole::OnSecondary => self.on_secondary,
            ThemeRole::OnTertiary => self.on_tertiary,
            ThemeRole::OnError => self.on_error,
        }
    }
}

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// Every family name a `bg-` token may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Palette(PaletteFamily),
    Black,
    White,
    Transparent,
    Role(ThemeRole),
}

impl FromStr for ColorFamily {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(ColorFamily::Black),
            "white" => Ok(ColorFamily::White),
            "transparent" => Ok(ColorFamily::Transparent),
            _ => s
                .parse::<PaletteFamily>()
                .map(ColorFamily::Palette)
                .or_else(|_| s.parse::<ThemeRole>().map(ColorFamily::Role))
                .map_err(|_| UnknownKeyword::new("color family", s)),
        }
    }
}

impl ColorFamily {
    /// Resolve this family with `shade`. Only palette families read the shade.
    pub fn resolve(self, shade: &str, theme: &dyn ThemeLookup) -> Color {
        match self {
            ColorFamily::Palette(family) => family.shade(shade),
            ColorFamily::Black => Color::BLACK,
            ColorFamily::White => Color::WHITE,
            ColorFamily::Transparent => Color::TRANSPARENT,
            ColorFamily::Role(role) => theme.role_color(role),
        }
    }
}

/// Split a token into `(family, shade)` if it has the `bg-<family>-<shade>`
/// shape: exactly two `-`-separated parts after `bg-`, the second non-empty.
pub fn split_background(token: &str) -> Option<(&str, &str)> {
    let rest = token.strip_prefix("bg-")?;
    let (family, shade) = rest.split_once('-')?;
    if shade.is_empty() || shade.contains('-') {
        return None;
    }
    Some((family, shade))
}

/// Resolve the background color of `style`.
///
/// The first token (in scan order) with the `bg-<family>-<shade>` shape
/// decides. `style` is only used for error messages.
pub fn resolve_color(
    tokens: &TokenSet<'_>,
    style: &str,
    theme: &dyn ThemeLookup,
) -> Result<Color, StyleError> {
    let (family, shade) = tokens
        .iter()
        .find_map(split_background)
        .ok_or_else(|| StyleError::MissingBackground {
            style: style.to_string(),
        })?;

    let family: ColorFamily = family.parse().map_err(|_| StyleError::UnknownColorFamily {
        family: family.to_string(),
        style: style.to_string(),
    })?;

    Ok(family.resolve(shade, theme))
}
