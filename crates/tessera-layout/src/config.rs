//! Engine configuration.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Pixel dimensions of the rendering surface.
///
/// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
///
/// "The viewport-percentage lengths are relative to the size of the
/// initial containing block."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Which parent dimension a percentage length is measured against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PercentBasis {
    /// Horizontal percentages read the parent's height and vertical
    /// percentages read the parent's width.
    ///
    /// This is the long-standing behavior of the engine and remains the
    /// default until product confirms which basis is intended.
    #[default]
    CrossAxis,
    /// Horizontal percentages read the parent's width and vertical
    /// percentages read the parent's height, as in CSS.
    SameAxis,
}

/// Knobs that change layout results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutConfig {
    /// Basis for `%` lengths.
    pub percent_basis: PercentBasis,
}
