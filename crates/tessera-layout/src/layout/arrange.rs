//! Main-axis arrangement of a container's children.
//!
//! [CSS Flexible Box Layout Module Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! A simplified single-pass flex layout: items keep their own outer size
//! (no grow or shrink), are packed along the main axis with
//! `justify-content`, placed on the cross axis with `align-items`, and may
//! break into further lines with `flex-wrap`. Rows and columns run through
//! the same code with the axes swapped.
//!
//! Overflow is not clamped: when the items are larger than the container,
//! the free space is negative and space-distributing policies produce
//! negative gaps.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::box_model::{Point, Size};
use crate::units::Axis;

/// [§ 8.2 Axis Alignment: the justify-content property](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JustifyContent {
    /// "Flex items are packed toward the start of the line."
    #[default]
    Start,
    /// "Flex items are packed toward the center of the line."
    Center,
    /// "Flex items are packed toward the end of the line."
    End,
    /// "Flex items are evenly distributed in the line." No space at either
    /// end.
    SpaceBetween,
    /// "Flex items are evenly distributed in the line, with half-size
    /// spaces on either end."
    SpaceAround,
    /// Equal space between items and at both ends.
    SpaceEvenly,
}

/// [§ 8.3 Cross-axis Alignment: the align-items property](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AlignItems {
    /// Cross-start edge of the item flush with the line's cross-start edge.
    #[default]
    Start,
    /// Item centered in the container's cross extent.
    Center,
    /// Cross-end edge of the item flush with the container's cross-end edge.
    End,
}

/// [§ 5.2 Flex Line Wrapping: the flex-wrap property](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WrapMode {
    /// "The flex container is single-line."
    #[default]
    NoWrap,
    /// "The flex container is multi-line."
    Wrap,
}

/// Parameters of a main-axis arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexLayout {
    /// Main axis: horizontal for a row, vertical for a column.
    pub orientation: Axis,
    /// Main-axis distribution.
    pub justify: JustifyContent,
    /// Cross-axis placement.
    pub align: AlignItems,
    /// Whether items may break onto further lines.
    pub wrap: WrapMode,
    /// Space between adjacent items and between lines, in pixels.
    pub gap: f32,
}

impl Default for FlexLayout {
    fn default() -> Self {
        Self::row()
    }
}

impl FlexLayout {
    /// A start-packed, non-wrapping row with no gap.
    #[must_use]
    pub const fn row() -> Self {
        Self {
            orientation: Axis::Horizontal,
            justify: JustifyContent::Start,
            align: AlignItems::Start,
            wrap: WrapMode::NoWrap,
            gap: 0.0,
        }
    }

    /// A start-packed, non-wrapping column with no gap.
    #[must_use]
    pub const fn column() -> Self {
        Self {
            orientation: Axis::Vertical,
            ..Self::row()
        }
    }

    /// Builder: justification.
    #[must_use]
    pub const fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Builder: cross-axis alignment.
    #[must_use]
    pub const fn align(mut self, align: AlignItems) -> Self {
        self.align = align;
        self
    }

    /// Builder: wrapping.
    #[must_use]
    pub const fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Builder: gap.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}

/// How a node places its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Arrangement {
    /// Children keep whatever position they were given.
    #[default]
    None,
    /// Children flow along one axis.
    MainAxis(FlexLayout),
}

/// Leading offset and effective gap for a line.
///
/// [§ 8.2 Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// Returns `(leading_offset, gap)`. The configured gap is only an input;
/// space-distributing policies return a replacement without touching the
/// layout's own value. The leading offset is never negative.
#[allow(clippy::cast_precision_loss)]
fn justify(policy: JustifyContent, free_space: f32, gap: f32, count: usize) -> (f32, f32) {
    let (lead, gap) = match policy {
        JustifyContent::Start => (0.0, gap),
        JustifyContent::Center => (free_space / 2.0, gap),
        JustifyContent::End => (free_space, gap),
        // A single item keeps the configured gap; there is nothing to
        // divide the space between.
        JustifyContent::SpaceBetween if count > 1 => (0.0, free_space / (count - 1) as f32),
        JustifyContent::SpaceBetween => (0.0, gap),
        JustifyContent::SpaceAround => {
            let gap = free_space / count as f32;
            (gap / 2.0, gap)
        }
        JustifyContent::SpaceEvenly => {
            let gap = free_space / (count + 1) as f32;
            (gap, gap)
        }
    };
    (lead.max(0.0), gap)
}

/// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
fn cross_offset(policy: AlignItems, container_cross: f32, item_cross: f32) -> f32 {
    match policy {
        AlignItems::Start => 0.0,
        AlignItems::Center => (container_cross - item_cross) / 2.0,
        AlignItems::End => container_cross - item_cross,
    }
}

/// Place `items` inside a content area at `origin` with extent `extent`.
///
/// `items` are the children's outer sizes in order; the result holds the
/// margin-box position of each. An empty slice yields an empty result.
///
/// # Algorithm
///
/// ```text
/// free  = extent.main - (Σ item.main + gap × (n - 1))
/// (lead, gap) = justify(free)
/// cursor = origin.main + lead
/// for each item:
///     if wrapping and cursor + item.main > origin.main + extent.main:
///         cursor = origin.main
///         line  += tallest cross extent on the line + gap
///     position = (cursor, origin.cross + line + align(extent.cross, item.cross))
///     cursor  += item.main + gap
/// ```
///
/// Free space is computed once for all items, so on wrapped lines the
/// justification of the first line carries over. An item that overflows
/// always starts a new line, even the first one, which leaves an empty
/// line of height `gap` above it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn arrange(layout: &FlexLayout, origin: Point, extent: Size, items: &[Size]) -> Vec<Point> {
    if items.is_empty() {
        return Vec::new();
    }

    let main_axis = layout.orientation;
    let cross_axis = main_axis.cross();
    let count = items.len();

    // STEP 1: Total occupied main-axis extent.
    let occupied: f32 = items.iter().map(|item| item.along(main_axis)).sum::<f32>()
        + layout.gap * (count - 1) as f32;

    // STEP 2: Free space, unclamped.
    let container_main = extent.along(main_axis);
    let container_cross = extent.along(cross_axis);
    let free_space = container_main - occupied;

    // STEP 3: Justification.
    let (lead, gap) = justify(layout.justify, free_space, layout.gap, count);

    #[cfg(feature = "layout-trace")]
    eprintln!(
        "[ARRANGE] {main_axis} n={count} extent={container_main}x{container_cross} \
         free={free_space} justify={} lead={lead} gap={gap}",
        layout.justify
    );

    let origin_main = origin.along(main_axis);
    let origin_cross = origin.along(cross_axis);
    let main_limit = origin_main + container_main;

    let mut cursor = origin_main + lead;
    let mut line_offset = 0.0_f32;
    let mut line_cross = 0.0_f32;

    // STEP 4-6: Walk items, wrapping and aligning.
    items
        .iter()
        .map(|item| {
            let item_main = item.along(main_axis);
            let item_cross = item.along(cross_axis);

            if layout.wrap == WrapMode::Wrap && cursor + item_main > main_limit {
                cursor = origin_main;
                line_offset += line_cross + gap;
                line_cross = 0.0;

                #[cfg(feature = "layout-trace")]
                eprintln!("[ARRANGE] wrap: new line at cross offset {line_offset}");
            }

            let cross = origin_cross
                + line_offset
                + cross_offset(layout.align, container_cross, item_cross);
            let position = Point::from_axes(main_axis, cursor, cross);

            cursor += item_main + gap;
            line_cross = line_cross.max(item_cross);
            position
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_never_leads_negative() {
        let (lead, gap) = justify(JustifyContent::Center, -40.0, 5.0, 2);
        assert!(lead.abs() < f32::EPSILON);
        assert!((gap - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_space_between_single_item_keeps_gap() {
        let (lead, gap) = justify(JustifyContent::SpaceBetween, 90.0, 7.0, 1);
        assert!(lead.abs() < f32::EPSILON);
        assert!((gap - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_free_space_gives_negative_gap() {
        let (_, gap) = justify(JustifyContent::SpaceBetween, -30.0, 0.0, 4);
        assert!((gap + 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_keywords_round_trip_through_strum() {
        assert_eq!(
            "space-evenly".parse::<JustifyContent>(),
            Ok(JustifyContent::SpaceEvenly)
        );
        assert_eq!(AlignItems::Center.to_string(), "center");
        assert_eq!("no-wrap".parse::<WrapMode>(), Ok(WrapMode::NoWrap));
    }
}
