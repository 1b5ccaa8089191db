//! Layout nodes.
//!
//! A [`Node`] pairs author-set [`Style`] with the geometry the layout pass
//! derives from it. Tree structure lives in [`crate::tree::LayoutTree`]; a
//! node with children is a container, one with an [`Arrangement`] also
//! positions them.

use serde::Serialize;

use crate::layout::{Arrangement, BoxModel, Point, Rect, Size};
use crate::style::Style;

/// One node of the layout tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Node {
    /// Declarative style, set by the application.
    pub style: Style,
    /// How children are placed.
    pub arrangement: Arrangement,
    /// Geometry from the last layout pass.
    pub box_model: BoxModel,
    /// Window-space top-left of the margin box from the last layout pass.
    pub position: Point,
}

impl Node {
    /// A node with the given style and arrangement and no geometry yet.
    #[must_use]
    pub fn new(style: Style, arrangement: Arrangement) -> Self {
        Self {
            style,
            arrangement,
            box_model: BoxModel::default(),
            position: Point::default(),
        }
    }

    /// Whether the node is painted by the compositor rather than by its
    /// parent.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.style.is_absolute()
    }

    /// Top-left of the content area.
    #[must_use]
    pub fn content_position(&self) -> Point {
        self.box_model.content_origin(self.position)
    }

    /// Content width and height.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.box_model.content
    }

    /// Content area.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.box_model.content_rect(self.position)
    }

    /// Content plus padding.
    #[must_use]
    pub fn padding_rect(&self) -> Rect {
        self.box_model.padding_rect(self.position)
    }

    /// Content plus padding plus border: the painted area.
    #[must_use]
    pub fn border_rect(&self) -> Rect {
        self.box_model.border_rect(self.position)
    }

    /// Everything, margin included.
    #[must_use]
    pub fn margin_rect(&self) -> Rect {
        self.box_model.margin_rect(self.position)
    }

    /// Content plus padding plus border, margin excluded.
    #[must_use]
    pub fn outer_size(&self) -> Size {
        self.box_model.outer_size()
    }
}
