//! Style resolution entry point: [`tailwind`] and its [`StyleContext`].

use crate::style::axis::{resolve_axis, AxisSizing};
use crate::style::color::{resolve_color, split_background, Color, Theme, ThemeLookup};
use crate::style::error::StyleError;
use crate::style::radius::{resolve_radius, CornerRadii};
use crate::style::sizing::{resolve_box_sizing, BoxSizing};
use crate::style::tokenizer::TokenSet;

// ---------------------------------------------------------------------------
// StyleContext
// ---------------------------------------------------------------------------

/// Ambient values a style string is resolved against.
///
/// The ambient width and height are only needed by fractional sizing
/// tokens (`w-1/2`, `h-1/3`, ...).
pub struct StyleContext<'t> {
    /// Width of the enclosing layout context.
    pub ambient_width: Option<f32>,
    /// Height of the enclosing layout context.
    pub ambient_height: Option<f32>,
    theme: &'t (dyn ThemeLookup + Sync),
}

static DEFAULT_THEME: Theme = Theme::light();

impl Default for StyleContext<'static> {
    fn default() -> Self {
        Self {
            ambient_width: None,
            ambient_height: None,
            theme: &DEFAULT_THEME,
        }
    }
}

impl StyleContext<'static> {
    /// Context with no ambient dimensions and the light theme.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'t> StyleContext<'t> {
    /// Set both ambient dimensions (builder).
    pub fn with_ambient(mut self, width: f32, height: f32) -> Self {
        self.ambient_width = Some(width);
        self.ambient_height = Some(height);
        self
    }

    /// Set the ambient width (builder).
    pub fn with_ambient_width(mut self, width: f32) -> Self {
        self.ambient_width = Some(width);
        self
    }

    /// Set the ambient height (builder).
    pub fn with_ambient_height(mut self, height: f32) -> Self {
        self.ambient_height = Some(height);
        self
    }

    /// Swap in another theme lookup (builder).
    pub fn with_theme<'u>(self, theme: &'u (dyn ThemeLookup + Sync)) -> StyleContext<'u> {
        StyleContext {
            ambient_width: self.ambient_width,
            ambient_height: self.ambient_height,
            theme,
        }
    }

    /// The theme lookup in use.
    pub fn theme(&self) -> &'t (dyn ThemeLookup + Sync) {
        self.theme
    }
}

impl std::fmt::Debug for StyleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleContext")
            .field("ambient_width", &self.ambient_width)
            .field("ambient_height", &self.ambient_height)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// ResolvedStyle
// ---------------------------------------------------------------------------

/// Everything a style string resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// The style string this was resolved from.
    pub style: String,
    pub axis: AxisSizing,
    pub size: BoxSizing,
    /// `None` when the style has no background token.
    pub background: Option<Color>,
    pub radius: CornerRadii,
}

impl ResolvedStyle {
    /// The background color, for constructs that must paint one.
    pub fn background(&self) -> Result<Color, StyleError> {
        self.background.ok_or_else(|| StyleError::MissingBackground {
            style: self.style.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a style string.
///
/// A missing background is not an error here (see
/// [`ResolvedStyle::background`]); a background token naming an unknown
/// family is.
pub fn tailwind(style: &str, ctx: &StyleContext<'_>) -> Result<ResolvedStyle, StyleError> {
    let tokens = TokenSet::parse(style);

    let axis = resolve_axis(&tokens);
    let size = resolve_box_sizing(&tokens, ctx.ambient_width, ctx.ambient_height)?;
    let background = if tokens.iter().any(|t| split_background(t).is_some()) {
        Some(resolve_color(&tokens, style, ctx.theme)?)
    } else {
        None
    };
    let radius = resolve_radius(&tokens);

    tracing::debug!(style, tokens = tokens.len(), ?axis, ?size, ?background, "resolved style");

    Ok(ResolvedStyle {
        style: style.to_string(),
        axis,
        size,
        background,
        radius,
    })
}

/// Resolve only the axis parameters of `style`.
pub fn tailwind_axis(style: &str) -> AxisSizing {
    resolve_axis(&TokenSet::parse(style))
}

/// Resolve only the width and height of `style`.
pub fn tailwind_size(style: &str, ctx: &StyleContext<'_>) -> Result<BoxSizing, StyleError> {
    resolve_box_sizing(&TokenSet::parse(style), ctx.ambient_width, ctx.ambient_height)
}

/// Resolve the mandatory background color of `style`.
pub fn tailwind_color(style: &str, ctx: &StyleContext<'_>) -> Result<Color, StyleError> {
    resolve_color(&TokenSet::parse(style), style, ctx.theme)
}

/// Resolve only the corner radii of `style`.
pub fn tailwind_radius(style: &str) -> CornerRadii {
    resolve_radius(&TokenSet::parse(style))
}
