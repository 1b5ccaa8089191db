//! Display List - a recording backend
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! Every call made on the [`RenderBackend`] is stored as a
//! [`DisplayCommand`], in painting order (back to front). A host can replay
//! the list later on another backend.

use serde::Serialize;

use super::backend::{CornerRadii, RenderBackend};
use crate::config::Viewport;
use crate::layout::Rect;
use crate::style::ColorValue;

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "op")]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    ///
    /// Used for backgrounds.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: ColorValue,
        /// Corner radii.
        radii: CornerRadii,
    },
    /// Stroke a rectangle's outline.
    ///
    /// Used for borders.
    StrokeRect {
        /// Outer edge of the outline.
        rect: Rect,
        /// Stroke color.
        color: ColorValue,
        /// Stroke width in pixels.
        thickness: f32,
        /// Corner radii.
        radii: CornerRadii,
    },
}

impl DisplayCommand {
    /// The rectangle the command covers.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        match self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => *rect,
        }
    }

    /// Replay the command on `backend`.
    pub fn apply(&self, backend: &mut dyn RenderBackend) {
        match self {
            Self::FillRect { rect, color, radii } => backend.fill_rect(*rect, color, radii),
            Self::StrokeRect {
                rect,
                color,
                thickness,
                radii,
            } => backend.stroke_rect(*rect, color, *thickness, radii),
        }
    }
}

/// A list of display commands plus the viewport size it reports.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
    viewport: Viewport,
}

impl DisplayList {
    /// Create a new empty display list reporting the default viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty display list reporting `viewport`.
    #[must_use]
    pub const fn with_viewport(viewport: Viewport) -> Self {
        Self {
            commands: Vec::new(),
            viewport,
        }
    }

    /// Change the reported viewport, as a window resize would.
    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get all commands in the display list.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Number of commands in the display list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the display list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every command, keeping the viewport.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay every command on `backend`, in order.
    pub fn replay(&self, backend: &mut dyn RenderBackend) {
        for command in &self.commands {
            command.apply(backend);
        }
    }
}

impl RenderBackend for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: &ColorValue, radii: &CornerRadii) {
        self.push(DisplayCommand::FillRect {
            rect,
            color: *color,
            radii: *radii,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &ColorValue, thickness: f32, radii: &CornerRadii) {
        self.push(DisplayCommand::StrokeRect {
            rect,
            color: *color,
            thickness,
            radii: *radii,
        });
    }

    fn viewport_size(&self) -> Viewport {
        self.viewport
    }
}
