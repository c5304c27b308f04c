//! Errors raised while resolving a style string.

use std::fmt;

/// Which ambient dimension a fractional sizing token needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// Errors from style resolution.
///
/// Only color resolution fails on bad input; every other unrecognized token
/// is ignored. [`StyleError::MissingAmbient`] is a caller contract violation,
/// not a malformed style string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("no background color token in style `{style}`")]
    MissingBackground { style: String },
    #[error("unknown color family `{family}` in style `{style}`")]
    UnknownColorFamily { family: String, style: String },
    #[error("`{token}` needs an ambient {dimension} but none was supplied")]
    MissingAmbient { token: String, dimension: Dimension },
}

impl StyleError {
    /// Returns `true` for the two ways a background color can fail to resolve.
    pub fn is_unresolved_color(&self) -> bool {
        matches!(
            self,
            StyleError::MissingBackground { .. } | StyleError::UnknownColorFamily { .. }
        )
    }
}

/// Error returned by the `FromStr` impls of keyword enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} keyword: {keyword}")]
pub struct UnknownKeyword {
    pub kind: &'static str,
    pub keyword: String,
}

impl UnknownKeyword {
    pub(crate) fn new(kind: &'static str, keyword: &str) -> Self {
        Self {
            kind,
            keyword: keyword.to_string(),
        }
    }
}
