//! Visual effect descriptors: blur, opacity, fixed size, scrolling, and a
//! frosted (backdrop-blurred, clipped) panel.
//!
//! These are plain values. The host toolkit turns them into its own
//! widgets; only the layout-relevant parts are folded into a taffy style
//! here.

use taffy::prelude::*;

use crate::layout::resolve_size;
use crate::style::color::Color;
use crate::style::error::StyleError;
use crate::style::radius::CornerRadii;
use crate::style::resolver::{tailwind, tailwind_size, StyleContext};
use crate::style::sizing::{BoxSizing, Length};

/// Which way a scroll view scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// A single effect applied around a child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Gaussian blur with the given sigmas (never negative).
    Blur { sigma_x: f32, sigma_y: f32 },
    /// Opacity in `0.0..=1.0`.
    Opacity(f32),
    /// A fixed-size box.
    FixedSize { width: Length, height: Length },
    /// Scrollable along one axis.
    Scroll(ScrollAxis),
}

/// A child together with the effects wrapped around it, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorated<T> {
    pub child: T,
    effects: Vec<Effect>,
}

impl<T> Decorated<T> {
    /// Wrap `child` with no effects.
    pub fn new(child: T) -> Self {
        Self {
            child,
            effects: Vec::new(),
        }
    }

    /// Blur with the same sigma on both axes.
    pub fn blur(self, sigma: f32) -> Self {
        self.blur_xy(sigma, sigma)
    }

    /// Blur with separate sigmas. Negative sigmas are clamped to zero.
    pub fn blur_xy(mut self, sigma_x: f32, sigma_y: f32) -> Self {
        self.effects.push(Effect::Blur {
            sigma_x: sigma_x.max(0.0),
            sigma_y: sigma_y.max(0.0),
        });
        self
    }

    /// Fade. `opacity` is clamped to `0.0..=1.0`; NaN leaves the child opaque.
    pub fn opacity(mut self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
        self.effects.push(Effect::Opacity(opacity));
        self
    }

    /// Fix the box size.
    pub fn sized(mut self, width: Length, height: Length) -> Self {
        self.effects.push(Effect::FixedSize { width, height });
        self
    }

    /// Fix the box size from the `w-*` / `h-*` tokens of a style string.
    /// Every other token is ignored.
    pub fn sized_by(self, style: &str, ctx: &StyleContext<'_>) -> Result<Self, StyleError> {
        let BoxSizing { width, height } = tailwind_size(style, ctx)?;
        Ok(self.sized(width, height))
    }

    /// Make the child scrollable.
    pub fn scrollable(mut self, axis: ScrollAxis) -> Self {
        self.effects.push(Effect::Scroll(axis));
        self
    }

    /// Effects in application order, innermost first.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Combined opacity of every opacity effect.
    pub fn effective_opacity(&self) -> f32 {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Opacity(o) => Some(*o),
                _ => None,
            })
            .product()
    }

    /// Fold the layout-relevant effects into a taffy style.
    ///
    /// Later `FixedSize` effects override earlier ones; each scroll effect
    /// turns on scrolling for its axis.
    pub fn layout_style(&self) -> Style {
        let mut style = Style::default();
        for effect in &self.effects {
            match *effect {
                Effect::FixedSize { width, height } => {
                    style.size = resolve_size(&BoxSizing { width, height });
                }
                Effect::Scroll(ScrollAxis::Vertical) => {
                    style.overflow.y = taffy::style::Overflow::Scroll;
                }
                Effect::Scroll(ScrollAxis::Horizontal) => {
                    style.overflow.x = taffy::style::Overflow::Scroll;
                }
                Effect::Blur { .. } | Effect::Opacity(_) => {}
            }
        }
        style
    }
}

/// A clipped panel with a blurred backdrop and a translucent fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrostedPanel {
    /// Backdrop blur sigma.
    pub sigma: f32,
    pub background: Color,
    pub radius: CornerRadii,
    pub size: BoxSizing,
}

impl FrostedPanel {
    /// Build a panel from a style string. The style must carry a `bg-` token.
    pub fn from_style(style: &str, sigma: f32, ctx: &StyleContext<'_>) -> Result<Self, StyleError> {
        let resolved = tailwind(style, ctx)?;
        Ok(Self {
            sigma: sigma.max(0.0),
            background: resolved.background()?,
            radius: resolved.radius,
            size: resolved.size,
        })
    }

    /// Taffy style of the panel's clip box.
    pub fn layout_style(&self) -> Style {
        Style {
            size: resolve_size(&self.size),
            overflow: taffy::geometry::Point {
                x: taffy::style::Overflow::Clip,
                y: taffy::style::Overflow::Clip,
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::radius::Radius;
    use pretty_assertions::assert_eq;

    #[test]
    fn effects_keep_order() {
        let d = Decorated::new("child")
            .blur(4.0)
            .opacity(0.5)
            .scrollable(ScrollAxis::Horizontal);
        assert_eq!(
            d.effects(),
            &[
                Effect::Blur {
                    sigma_x: 4.0,
                    sigma_y: 4.0
                },
                Effect::Opacity(0.5),
                Effect::Scroll(ScrollAxis::Horizontal),
            ]
        );
        assert_eq!(d.child, "child");
    }

    #[test]
    fn opacity_and_blur_are_clamped() {
        let d = Decorated::new(()).opacity(1.5).opacity(-1.0).blur_xy(-2.0, 3.0);
        assert_eq!(
            d.effects(),
            &[
                Effect::Opacity(1.0),
                Effect::Opacity(0.0),
                Effect::Blur {
                    sigma_x: 0.0,
                    sigma_y: 3.0
                },
            ]
        );
    }

    #[test]
    fn nan_opacity_is_opaque() {
        let d = Decorated::new(()).opacity(f32::NAN).opacity(0.5);
        assert_eq!(d.effects()[0], Effect::Opacity(1.0));
        assert_eq!(d.effective_opacity(), 0.5);
    }

    #[test]
    fn effective_opacity_multiplies() {
        let d = Decorated::new(()).opacity(0.5).blur(1.0).opacity(0.5);
        assert_eq!(d.effective_opacity(), 0.25);
        assert_eq!(Decorated::new(()).effective_opacity(), 1.0);
    }

    #[test]
    fn layout_style_from_size_and_scroll() {
        let d = Decorated::new(())
            .sized(Length::Fixed(10.0), Length::Infinite)
            .scrollable(ScrollAxis::Vertical);
        let style = d.layout_style();
        assert_eq!(style.size.width, Dimension::from_length(10.0));
        assert_eq!(style.size.height, Dimension::from_percent(1.0));
        assert_eq!(style.overflow.y, taffy::style::Overflow::Scroll);
        assert_eq!(style.overflow.x, taffy::style::Overflow::Visible);
    }

    #[test]
    fn sized_by_style_string() {
        let ctx = StyleContext::new().with_ambient(100.0, 60.0);
        let d = Decorated::new(()).sized_by("w-1/4 h-1/3", &ctx).unwrap();
        assert_eq!(
            d.effects(),
            &[Effect::FixedSize {
                width: Length::Fixed(25.0),
                height: Length::Fixed(20.0),
            }]
        );
    }

    #[test]
    fn sized_by_ignores_color_tokens() {
        let ctx = StyleContext::new().with_ambient(100.0, 60.0);
        let d = Decorated::new(())
            .sized_by("w-full h-1/2 bg-teal-500", &ctx)
            .unwrap();
        assert_eq!(
            d.effects(),
            &[Effect::FixedSize {
                width: Length::Infinite,
                height: Length::Fixed(30.0),
            }]
        );
    }

    #[test]
    fn sized_by_propagates_missing_ambient() {
        let err = Decorated::new(())
            .sized_by("w-1/4", &StyleContext::new())
            .unwrap_err();
        assert!(matches!(err, StyleError::MissingAmbient { .. }));
    }

    #[test]
    fn frosted_panel_from_style() {
        let ctx = StyleContext::new();
        let panel = FrostedPanel::from_style("bg-white-0 rounded-lg w-full", 8.0, &ctx).unwrap();
        assert_eq!(panel.background, Color::WHITE);
        assert_eq!(panel.radius, CornerRadii::all(Radius::Fixed(24.0)));
        assert_eq!(panel.size.width, Length::Infinite);
        assert_eq!(panel.sigma, 8.0);

        let style = panel.layout_style();
        assert_eq!(style.overflow.x, taffy::style::Overflow::Clip);
        assert_eq!(style.size.width, Dimension::from_percent(1.0));
    }

    #[test]
    fn frosted_panel_requires_background() {
        let err = FrostedPanel::from_style("rounded-lg", 8.0, &StyleContext::new()).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingBackground {
                style: "rounded-lg".into()
            }
        );
    }

    #[test]
    fn frosted_panel_rejects_unknown_family() {
        let err = FrostedPanel::from_style("bg-teal-200", 8.0, &StyleContext::new()).unwrap_err();
        assert!(err.is_unresolved_color());
    }
}
