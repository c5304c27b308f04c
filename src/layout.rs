//! Resolved style -> taffy Style conversion.
//!
//! Maps a [`ResolvedStyle`] onto the flex container the host toolkit lays
//! out: direction, main/cross alignment, main-axis size mode and box size.
//! Paint parameters (background, corner radii) have no taffy counterpart
//! and are left to the caller.

use taffy::prelude::*;

use crate::style::axis::{AxisSizing, CrossAxisAlignment, MainAxisAlignment, MainAxisSize};
use crate::style::resolver::ResolvedStyle;
use crate::style::sizing::{BoxSizing, Length};

/// Direction of a flex box's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Children laid out left to right.
    #[default]
    Row,
    /// Children laid out top to bottom.
    Column,
}

/// Convert a [`Length`] into a taffy [`Dimension`].
///
/// - `Fixed(v)` -> length `v` (an unset length is a zero length)
/// - `Infinite` -> 100% of the parent
pub fn resolve_length(length: Length) -> Dimension {
    match length {
        Length::Fixed(v) => Dimension::from_length(v),
        Length::Infinite => Dimension::from_percent(1.0),
    }
}

/// Convert [`BoxSizing`] into a taffy size.
pub fn resolve_size(size: &BoxSizing) -> Size<Dimension> {
    Size {
        width: resolve_length(size.width),
        height: resolve_length(size.height),
    }
}

fn resolve_justify(alignment: MainAxisAlignment) -> JustifyContent {
    match alignment {
        MainAxisAlignment::Start => JustifyContent::FlexStart,
        MainAxisAlignment::Center => JustifyContent::Center,
        MainAxisAlignment::End => JustifyContent::FlexEnd,
        MainAxisAlignment::SpaceBetween => JustifyContent::SpaceBetween,
        MainAxisAlignment::SpaceAround => JustifyContent::SpaceAround,
        MainAxisAlignment::SpaceEvenly => JustifyContent::SpaceEvenly,
    }
}

fn resolve_align(alignment: CrossAxisAlignment) -> AlignItems {
    match alignment {
        CrossAxisAlignment::Start => AlignItems::FlexStart,
        CrossAxisAlignment::Center => AlignItems::Center,
        CrossAxisAlignment::End => AlignItems::FlexEnd,
        CrossAxisAlignment::Stretch => AlignItems::Stretch,
        CrossAxisAlignment::Baseline => AlignItems::Baseline,
    }
}

/// Apply axis parameters to an existing taffy style.
///
/// `MainAxisSize::Max` lets the box grow into the free space of its parent
/// (`flex_grow: 1`); `Min` keeps it at its content size.
pub fn apply_axis(style: &mut Style, axis: &AxisSizing, direction: Direction) {
    style.display = Display::Flex;
    style.flex_direction = match direction {
        Direction::Row => FlexDirection::Row,
        Direction::Column => FlexDirection::Column,
    };
    style.justify_content = Some(resolve_justify(axis.main_axis_alignment));
    style.align_items = Some(resolve_align(axis.cross_axis_alignment));
    style.flex_grow = match axis.main_axis_size {
        MainAxisSize::Max => 1.0,
        MainAxisSize::Min => 0.0,
    };
}

/// Build the taffy style of a flex box from a resolved style string.
pub fn flex_style(resolved: &ResolvedStyle, direction: Direction) -> Style {
    let mut style = Style::default();
    apply_axis(&mut style, &resolved.axis, direction);
    style.size = resolve_size(&resolved.size);
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::resolver::{tailwind, StyleContext};
    use pretty_assertions::assert_eq;

    fn resolved(style: &str) -> ResolvedStyle {
        tailwind(style, &StyleContext::new().with_ambient(200.0, 40.0)).unwrap()
    }

    #[test]
    fn resolve_fixed_length() {
        assert_eq!(resolve_length(Length::Fixed(12.0)), Dimension::from_length(12.0));
    }

    #[test]
    fn resolve_unset_length_is_zero() {
        assert_eq!(resolve_length(Length::UNSET), Dimension::from_length(0.0));
    }

    #[test]
    fn resolve_infinite_length() {
        assert_eq!(resolve_length(Length::Infinite), Dimension::from_percent(1.0));
    }

    #[test]
    fn defaults_map_to_flex_start() {
        let style = flex_style(&resolved(""), Direction::Row);
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.justify_content, Some(JustifyContent::FlexStart));
        assert_eq!(style.align_items, Some(AlignItems::FlexStart));
        assert_eq!(style.flex_grow, 1.0);
    }

    #[test]
    fn column_min_space_between_stretch() {
        let style = flex_style(&resolved("min main-sb cross-stretch"), Direction::Column);
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.justify_content, Some(JustifyContent::SpaceBetween));
        assert_eq!(style.align_items, Some(AlignItems::Stretch));
        assert_eq!(style.flex_grow, 0.0);
    }

    #[test]
    fn every_main_alignment_maps() {
        for (keyword, expected) in [
            ("main-center", JustifyContent::Center),
            ("main-end", JustifyContent::FlexEnd),
            ("main-sa", JustifyContent::SpaceAround),
            ("main-se", JustifyContent::SpaceEvenly),
        ] {
            let style = flex_style(&resolved(keyword), Direction::Row);
            assert_eq!(style.justify_content, Some(expected), "{keyword}");
        }
    }

    #[test]
    fn cross_end_and_baseline() {
        let end = flex_style(&resolved("cross-end"), Direction::Row);
        assert_eq!(end.align_items, Some(AlignItems::FlexEnd));
        let baseline = flex_style(&resolved("cross-baseline"), Direction::Row);
        assert_eq!(baseline.align_items, Some(AlignItems::Baseline));
    }

    #[test]
    fn size_from_fractions() {
        let style = flex_style(&resolved("w-1/2 h-full"), Direction::Row);
        assert_eq!(style.size.width, Dimension::from_length(100.0));
        assert_eq!(style.size.height, Dimension::from_percent(1.0));
    }

    #[test]
    fn centered_row_lays_out_children() {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let leaf = Style {
            size: Size {
                width: Dimension::from_length(10.0),
                height: Dimension::from_length(10.0),
            },
            ..Default::default()
        };
        let a = tree.new_leaf(leaf.clone()).unwrap();
        let b = tree.new_leaf(leaf).unwrap();

        let root_style = flex_style(
            &resolved("w-1/2 h-1/2 main-center cross-center"),
            Direction::Row,
        );
        let root = tree.new_with_children(root_style, &[a, b]).unwrap();
        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(200.0),
                height: AvailableSpace::Definite(40.0),
            },
        )
        .unwrap();

        // Root is 100x20; the two 10x10 children are centered on both axes.
        let la = tree.layout(a).unwrap();
        let lb = tree.layout(b).unwrap();
        assert_eq!((la.location.x, la.location.y), (40.0, 5.0));
        assert_eq!((lb.location.x, lb.location.y), (50.0, 5.0));
    }
}
