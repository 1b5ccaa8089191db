//! Author-set style.
//!
//! A [`Style`] is declarative and textual: lengths stay strings until the
//! layout pass resolves them against the viewport and the node's parent.
//! Nothing here is derived state; the box model is recomputed from it every
//! frame.

mod color;
mod length;

use serde::{Deserialize, Serialize};

pub use color::ColorValue;
pub use length::LengthValue;

use crate::units::Axis;

/// One side of a box, in the fixed order top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Edge {
    /// Index into the `[top, right, bottom, left]` arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Axis a length on this edge is measured along: vertical for top and
    /// bottom, horizontal for left and right.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Right | Self::Left => Axis::Horizontal,
        }
    }
}

/// Declarative style of a node.
///
/// Edge arrays are ordered top, right, bottom, left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    /// Identifier used to address the node among its siblings.
    pub id: String,
    /// Free-form tag carried for hosts; layout ignores it.
    pub class_name: String,
    /// Content width.
    pub width: String,
    /// Content height.
    pub height: String,
    /// Margin per edge.
    pub margin: [String; 4],
    /// Border width per edge.
    pub border: [String; 4],
    /// Padding per edge.
    pub padding: [String; 4],
    /// Corner radii in pixels: top-left, top-right, bottom-right, bottom-left.
    pub border_radius: [f32; 4],
    /// Invisible nodes and their whole subtree are not painted.
    pub visible: bool,
    /// Border stroke color.
    pub border_color: ColorValue,
    /// Background fill color.
    pub background_color: ColorValue,
    /// Paint order among siblings within the same container.
    pub local_stack_order: i32,
    /// Negative: in flow. Non-negative: absolute, painted by the compositor
    /// in global order.
    pub global_stack_order: i32,
}

impl Default for Style {
    fn default() -> Self {
        let zero = || ["0", "0", "0", "0"].map(String::from);
        Self {
            id: String::new(),
            class_name: String::new(),
            width: "0".to_string(),
            height: "0".to_string(),
            margin: zero(),
            border: zero(),
            padding: zero(),
            border_radius: [0.0; 4],
            visible: true,
            border_color: ColorValue::BLACK,
            background_color: ColorValue::TRANSPARENT,
            local_stack_order: 0,
            global_stack_order: -1,
        }
    }
}

impl Style {
    /// A default style with the given content size.
    #[must_use]
    pub fn sized(width: &str, height: &str) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
            ..Self::default()
        }
    }

    /// Whether the node opts out of local flow painting and into the
    /// compositor.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.global_stack_order >= 0
    }

    /// Builder: set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Builder: same margin on all four edges.
    #[must_use]
    pub fn with_margin(mut self, value: &str) -> Self {
        self.margin = [value, value, value, value].map(String::from);
        self
    }

    /// Builder: same border width on all four edges.
    #[must_use]
    pub fn with_border(mut self, value: &str) -> Self {
        self.border = [value, value, value, value].map(String::from);
        self
    }

    /// Builder: same padding on all four edges.
    #[must_use]
    pub fn with_padding(mut self, value: &str) -> Self {
        self.padding = [value, value, value, value].map(String::from);
        self
    }

    /// Builder: background color.
    #[must_use]
    pub const fn with_background(mut self, color: ColorValue) -> Self {
        self.background_color = color;
        self
    }

    /// Builder: border color.
    #[must_use]
    pub const fn with_border_color(mut self, color: ColorValue) -> Self {
        self.border_color = color;
        self
    }

    /// Builder: local stack order.
    #[must_use]
    pub const fn with_local_order(mut self, order: i32) -> Self {
        self.local_stack_order = order;
        self
    }

    /// Builder: global stack order (non-negative makes the node absolute).
    #[must_use]
    pub const fn with_global_order(mut self, order: i32) -> Self {
        self.global_stack_order = order;
        self
    }

    /// Builder: visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
