//! Axis sizing: main-axis size mode and main/cross alignment keywords.
//!
//! Alignment keywords are scanned in their declaration order, not in the
//! order they appear in the style string. With both `main-start` and
//! `main-end` present, `main-start` wins because it is declared first.

use std::str::FromStr;

use crate::style::error::UnknownKeyword;
use crate::style::tokenizer::TokenSet;

/// How much space a flex box takes along its main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAxisSize {
    /// Fill the available space.
    #[default]
    Max,
    /// Shrink to the children.
    Min,
}

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Placement of children along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

/// Main-axis keywords in scan order.
pub const MAIN_AXIS_KEYWORDS: [(&str, MainAxisAlignment); 6] = [
    ("main-start", MainAxisAlignment::Start),
    ("main-center", MainAxisAlignment::Center),
    ("main-end", MainAxisAlignment::End),
    ("main-sb", MainAxisAlignment::SpaceBetween),
    ("main-sa", MainAxisAlignment::SpaceAround),
    ("main-se", MainAxisAlignment::SpaceEvenly),
];

/// Cross-axis keywords in scan order.
pub const CROSS_AXIS_KEYWORDS: [(&str, CrossAxisAlignment); 5] = [
    ("cross-start", CrossAxisAlignment::Start),
    ("cross-center", CrossAxisAlignment::Center),
    ("cross-end", CrossAxisAlignment::End),
    ("cross-stretch", CrossAxisAlignment::Stretch),
    ("cross-baseline", CrossAxisAlignment::Baseline),
];

impl FromStr for MainAxisAlignment {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MAIN_AXIS_KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == s)
            .map(|(_, alignment)| *alignment)
            .ok_or_else(|| UnknownKeyword::new("main-axis alignment", s))
    }
}

impl FromStr for CrossAxisAlignment {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CROSS_AXIS_KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == s)
            .map(|(_, alignment)| *alignment)
            .ok_or_else(|| UnknownKeyword::new("cross-axis alignment", s))
    }
}

/// Resolved axis parameters for a flex box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSizing {
    pub main_axis_size: MainAxisSize,
    pub main_axis_alignment: MainAxisAlignment,
    pub cross_axis_alignment: CrossAxisAlignment,
}

/// Resolve axis sizing from a token set. Never fails.
pub fn resolve_axis(tokens: &TokenSet<'_>) -> AxisSizing {
    // Only `min` is a keyword; there is no `max`.
    let main_axis_size = if tokens.contains("min") {
        MainAxisSize::Min
    } else {
        MainAxisSize::Max
    };

    let main_axis_alignment = first_present(tokens, &MAIN_AXIS_KEYWORDS).unwrap_or_default();
    let cross_axis_alignment = first_present(tokens, &CROSS_AXIS_KEYWORDS).unwrap_or_default();

    AxisSizing {
        main_axis_size,
        main_axis_alignment,
        cross_axis_alignment,
    }
}

fn first_present<T: Copy>(tokens: &TokenSet<'_>, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| tokens.contains(keyword))
        .map(|(_, value)| *value)
}
