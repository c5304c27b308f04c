//! Box sizing: `w-*` and `h-*` tokens resolved against ambient dimensions.

use std::fmt;

use crate::style::error::{Dimension, StyleError};
use crate::style::tokenizer::TokenSet;

/// A resolved width or height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// A fixed number of logical pixels.
    Fixed(f32),
    /// Unbounded: take all the space offered.
    Infinite,
}

impl Length {
    /// The value a dimension gets when no sizing token applies.
    pub const UNSET: Length = Length::Fixed(0.0);

    /// Returns `true` for [`Length::Infinite`].
    pub fn is_infinite(&self) -> bool {
        matches!(self, Length::Infinite)
    }

    /// The length as `f32`, with `Infinite` mapped to `f32::INFINITY`.
    pub fn to_f32(self) -> f32 {
        match self {
            Length::Fixed(v) => v,
            Length::Infinite => f32::INFINITY,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::UNSET
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Infinite => write!(f, "infinite"),
            Length::Fixed(v) if v.fract() == 0.0 => write!(f, "{}", *v as i64),
            Length::Fixed(v) => write!(f, "{v}"),
        }
    }
}

/// Resolved width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSizing {
    pub width: Length,
    pub height: Length,
}

/// A recognized sizing value, before the ambient dimension is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeValue {
    Full,
    Fraction(u8),
}

fn parse_size_value(value: &str) -> Option<SizeValue> {
    match value {
        "full" => Some(SizeValue::Full),
        "1/2" => Some(SizeValue::Fraction(2)),
        "1/3" => Some(SizeValue::Fraction(3)),
        "1/4" => Some(SizeValue::Fraction(4)),
        "1/5" => Some(SizeValue::Fraction(5)),
        _ => None,
    }
}

/// Resolve one dimension: the first token under `prefix` with a recognized
/// value wins. Unrecognized values are skipped.
fn resolve_dimension(
    tokens: &TokenSet<'_>,
    prefix: &str,
    ambient: Option<f32>,
    dimension: Dimension,
) -> Result<Length, StyleError> {
    for value in tokens.with_prefix(prefix) {
        match parse_size_value(value) {
            Some(SizeValue::Full) => return Ok(Length::Infinite),
            Some(SizeValue::Fraction(divisor)) => {
                let ambient = ambient.ok_or_else(|| StyleError::MissingAmbient {
                    token: format!("{prefix}{value}"),
                    dimension,
                })?;
                return Ok(Length::Fixed(ambient / f32::from(divisor)));
            }
            None => {
                tracing::trace!(prefix, value, "ignoring unknown size value");
            }
        }
    }
    Ok(Length::UNSET)
}

/// Resolve width and height from a token set.
///
/// The ambient dimensions are only consulted for fractional tokens; a
/// fractional token without one is a [`StyleError::MissingAmbient`].
pub fn resolve_box_sizing(
    tokens: &TokenSet<'_>,
    ambient_width: Option<f32>,
    ambient_height: Option<f32>,
) -> Result<BoxSizing, StyleError> {
    Ok(BoxSizing {
        width: resolve_dimension(tokens, "w-", ambient_width, Dimension::Width)?,
        height: resolve_dimension(tokens, "h-", ambient_height, Dimension::Height)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sizing(style: &str, w: Option<f32>, h: Option<f32>) -> Result<BoxSizing, StyleError> {
        resolve_box_sizing(&TokenSet::parse(style), w, h)
    }

    #[test]
    fn test_unset_is_zero() {
        let s = sizing("min bg-red-500", None, None).unwrap();
        assert_eq!(s.width, Length::Fixed(0.0));
        assert_eq!(s.height, Length::Fixed(0.0));
    }

    #[test]
    fn test_full_and_half() {
        let s = sizing("w-full h-1/2", Some(300.0), Some(400.0)).unwrap();
        assert_eq!(
            s,
            BoxSizing {
                width: Length::Infinite,
                height: Length::Fixed(200.0),
            }
        );
    }

    #[test]
    fn test_all_fractions() {
        for (token, expected) in [("w-1/2", 60.0), ("w-1/3", 40.0), ("w-1/4", 30.0), ("w-1/5", 24.0)] {
            let s = sizing(token, Some(120.0), None).unwrap();
            assert_eq!(s.width, Length::Fixed(expected), "{token}");
        }
    }

    #[test]
    fn test_full_needs_no_ambient() {
        let s = sizing("w-full h-full", None, None).unwrap();
        assert!(s.width.is_infinite());
        assert!(s.height.is_infinite());
    }

    #[test]
    fn test_unknown_value_keeps_scanning() {
        let s = sizing("w-2/3 w-1/4", Some(100.0), None).unwrap();
        assert_eq!(s.width, Length::Fixed(25.0));
    }

    #[test]
    fn test_unknown_value_only_is_unset() {
        let s = sizing("w-screen h-auto", Some(100.0), Some(100.0)).unwrap();
        assert_eq!(s, BoxSizing::default());
    }

    #[test]
    fn test_first_recognized_in_input_order_wins() {
        let s = sizing("w-1/2 w-full", Some(100.0), None).unwrap();
        assert_eq!(s.width, Length::Fixed(50.0));
        let s = sizing("w-full w-1/2", Some(100.0), None).unwrap();
        assert_eq!(s.width, Length::Infinite);
    }

    #[test]
    fn test_fraction_without_ambient_fails() {
        let err = sizing("w-full h-1/3", Some(100.0), None).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingAmbient {
                token: "h-1/3".into(),
                dimension: Dimension::Height,
            }
        );
    }

    #[test]
    fn test_width_does_not_read_height_tokens() {
        let s = sizing("h-1/2", None, Some(10.0)).unwrap();
        assert_eq!(s.width, Length::UNSET);
        assert_eq!(s.height, Length::Fixed(5.0));
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Fixed(200.0).to_string(), "200");
        assert_eq!(Length::Fixed(33.5).to_string(), "33.5");
        assert_eq!(Length::Infinite.to_string(), "infinite");
        assert_eq!(Length::Infinite.to_f32(), f32::INFINITY);
    }
}
