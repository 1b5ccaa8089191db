//! The rendering backend contract.

use serde::{Deserialize, Serialize};

use crate::config::Viewport;
use crate::layout::Rect;
use crate::style::ColorValue;

/// [§ 5 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// Corner radii in pixels. All zeros means sharp corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    /// Top-left radius.
    pub top_left: f32,
    /// Top-right radius.
    pub top_right: f32,
    /// Bottom-right radius.
    pub bottom_right: f32,
    /// Bottom-left radius.
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Whether every corner is sharp.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }
}

impl From<[f32; 4]> for CornerRadii {
    /// Order: top-left, top-right, bottom-right, bottom-left.
    fn from([top_left, top_right, bottom_right, bottom_left]: [f32; 4]) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

/// A surface the paint pass draws on.
///
/// Callers skip fully transparent colors and non-positive stroke
/// thicknesses, so implementations may assume both are meaningful.
pub trait RenderBackend {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: &ColorValue, radii: &CornerRadii);

    /// Stroke the outline of `rect`, inside its bounds, `thickness` pixels
    /// wide.
    fn stroke_rect(&mut self, rect: Rect, color: &ColorValue, thickness: f32, radii: &CornerRadii);

    /// Current pixel size of the surface.
    fn viewport_size(&self) -> Viewport;
}
