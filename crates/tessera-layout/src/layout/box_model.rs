//! Box model types.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::{Deserialize, Serialize};

use crate::style::{Edge, Style};
use crate::units::{Axis, ResolveContext, resolve};

/// A point in window space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Build a point from a main-axis and a cross-axis coordinate.
    #[must_use]
    pub const fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Self {
        match main_axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// A width and a height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at `origin` with extent `size`.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow outward by `edges` on every side.
    #[must_use]
    pub fn expand(&self, edges: &EdgeSizes) -> Self {
        Self {
            x: self.x - edges.left,
            y: self.y - edges.top,
            width: self.width + edges.left + edges.right,
            height: self.height + edges.top + edges.bottom,
        }
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// Resolve four style strings (top, right, bottom, left), clamping each
    /// to zero.
    ///
    /// Top and bottom resolve on the vertical axis, left and right on the
    /// horizontal axis.
    #[must_use]
    pub fn resolve(values: &[String; 4], ctx: &ResolveContext) -> Self {
        let side = |edge: Edge| resolve(&values[edge.index()], edge.axis(), ctx).max(0.0);
        Self {
            top: side(Edge::Top),
            right: side(Edge::Right),
            bottom: side(Edge::Bottom),
            left: side(Edge::Left),
        }
    }

    /// Size of one edge.
    #[must_use]
    pub const fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Sum of the two edges crossed when moving along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }
}

/// Resolved geometry of one node, recomputed every layout pass.
///
/// [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
///
/// Positions are not stored here; every rectangle query takes the node's
/// margin-box origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxModel {
    /// Content width and height.
    pub content: Size,
    /// Padding per edge.
    pub padding: EdgeSizes,
    /// Border width per edge.
    pub border: EdgeSizes,
    /// Margin per edge.
    pub margin: EdgeSizes,
}

impl BoxModel {
    /// Resolve every length of `style` against `ctx`.
    ///
    /// Negative and malformed lengths become `0`, so every edge and both
    /// content dimensions are non-negative.
    #[must_use]
    pub fn compute(style: &Style, ctx: &ResolveContext) -> Self {
        Self {
            content: Size::new(
                resolve(&style.width, Axis::Horizontal, ctx).max(0.0),
                resolve(&style.height, Axis::Vertical, ctx).max(0.0),
            ),
            padding: EdgeSizes::resolve(&style.padding, ctx),
            border: EdgeSizes::resolve(&style.border, ctx),
            margin: EdgeSizes::resolve(&style.margin, ctx),
        }
    }

    // [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    //
    // ┌─────────────────────────────────────────┐  ← position
    // │              margin-top                 │
    // │   ┌─────────────────────────────────┐   │
    // │   │          border-top             │   │
    // │   │   ┌─────────────────────────┐   │   │
    // │   │   │      padding-top        │   │   │
    // │   │   │   ┌─────────────────┐   │   │   │
    // │ m │ b │ p │     CONTENT     │ p │ b │ m │
    // │   │   │   └─────────────────┘   │   │   │
    // │   │   │      padding-bottom     │   │   │
    // │   │   └─────────────────────────┘   │   │
    // │   │          border-bottom          │   │
    // │   └─────────────────────────────────┘   │
    // │              margin-bottom              │
    // └─────────────────────────────────────────┘
    //
    // Each rectangle is the previous one expanded by one layer.

    /// Content plus padding plus border. Margin is excluded.
    ///
    /// ```text
    /// width  = content.width  + padding.left + padding.right + border.left + border.right
    /// height = content.height + padding.top + padding.bottom + border.top + border.bottom
    /// ```
    #[must_use]
    pub fn outer_size(&self) -> Size {
        Size::new(
            self.content.width
                + self.padding.along(Axis::Horizontal)
                + self.border.along(Axis::Horizontal),
            self.content.height
                + self.padding.along(Axis::Vertical)
                + self.border.along(Axis::Vertical),
        )
    }

    /// Top-left of the content area for a node whose margin box starts at
    /// `position`.
    #[must_use]
    pub fn content_origin(&self, position: Point) -> Point {
        Point::new(
            position.x + self.margin.left + self.border.left + self.padding.left,
            position.y + self.margin.top + self.border.top + self.padding.top,
        )
    }

    /// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    /// "The content box contains the actual content of the element."
    #[must_use]
    pub fn content_rect(&self, position: Point) -> Rect {
        Rect::from_origin_size(self.content_origin(position), self.content)
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub fn padding_rect(&self, position: Point) -> Rect {
        self.content_rect(position).expand(&self.padding)
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub fn border_rect(&self, position: Point) -> Rect {
        self.padding_rect(position).expand(&self.border)
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub fn margin_rect(&self, position: Point) -> Rect {
        self.border_rect(position).expand(&self.margin)
    }
}
