//! Unit resolution.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Turns a style length string into pixels, given the size of the parent
//! and of the viewport. Resolution is a pure function of its inputs: the
//! same text against the same [`ResolveContext`] always yields the same
//! value, so callers are free to resolve redundantly.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use tessera_common::warning::warn_once;

use crate::config::{PercentBasis, Viewport};
use crate::error::UnitError;
use crate::style::LengthValue;

/// A layout axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The orthogonal axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Resolved content size of the parent node, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentSize {
    /// Parent content width.
    pub width: f32,
    /// Parent content height.
    pub height: f32,
}

impl ParentSize {
    /// The parent dimension along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The parent dimension a percentage on `axis` is measured against.
    #[must_use]
    pub const fn percent_basis(self, axis: Axis, basis: PercentBasis) -> f32 {
        match basis {
            PercentBasis::CrossAxis => self.along(axis.cross()),
            PercentBasis::SameAxis => self.along(axis),
        }
    }
}

/// Everything a length needs to become pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolveContext {
    /// `None` for the root node, where percentages resolve to zero.
    pub parent: Option<ParentSize>,
    /// Current surface size.
    pub viewport: Viewport,
    /// Which parent dimension `%` reads.
    pub percent_basis: PercentBasis,
}

impl ResolveContext {
    /// Context for a node without a parent.
    #[must_use]
    pub fn root(viewport: Viewport) -> Self {
        Self {
            parent: None,
            viewport,
            percent_basis: PercentBasis::default(),
        }
    }

    /// Same context with the given parent size.
    #[must_use]
    pub const fn with_parent(mut self, parent: ParentSize) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Same context with the given percentage basis.
    #[must_use]
    pub const fn with_percent_basis(mut self, basis: PercentBasis) -> Self {
        self.percent_basis = basis;
        self
    }
}

/// Resolve `text` to pixels along `axis`.
///
/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "Percentage values are always relative to another quantity, for example
/// a length." Here that quantity is a parent content dimension chosen by
/// [`ResolveContext::percent_basis`]. Without a parent a percentage is `0`.
///
/// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
///
/// `vw` and `vh` scale the viewport width and height regardless of `axis`.
///
/// # Errors
///
/// Returns the [`UnitError`] from parsing, or [`UnitError::OutOfRange`] if
/// the scaled result is not finite.
pub fn try_resolve(text: &str, axis: Axis, ctx: &ResolveContext) -> Result<f32, UnitError> {
    let pixels = match LengthValue::parse(text)? {
        LengthValue::Px(value) => value,
        LengthValue::Percent(value) => ctx.parent.map_or(0.0, |parent| {
            parent.percent_basis(axis, ctx.percent_basis) * value / 100.0
        }),
        LengthValue::Vw(value) => value * ctx.viewport.width / 100.0,
        LengthValue::Vh(value) => value * ctx.viewport.height / 100.0,
    };

    if pixels.is_finite() {
        Ok(pixels)
    } else {
        Err(UnitError::OutOfRange(text.to_string()))
    }
}

/// Resolve `text` to pixels, substituting `0` for malformed input.
///
/// Failures are reported once per distinct message through
/// [`warn_once`] under the `"Units"` component and never abort a frame.
#[must_use]
pub fn resolve(text: &str, axis: Axis, ctx: &ResolveContext) -> f32 {
    try_resolve(text, axis, ctx).unwrap_or_else(|err| {
        warn_once("Units", &err.to_string());
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_axis_percent_reads_opposite_dimension() {
        let ctx = ResolveContext::root(Viewport::default()).with_parent(ParentSize {
            width: 200.0,
            height: 100.0,
        });
        assert!((resolve("50%", Axis::Horizontal, &ctx) - 50.0).abs() < f32::EPSILON);
        assert!((resolve("50%", Axis::Vertical, &ctx) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_same_axis_percent_reads_own_dimension() {
        let ctx = ResolveContext::root(Viewport::default())
            .with_parent(ParentSize {
                width: 200.0,
                height: 100.0,
            })
            .with_percent_basis(PercentBasis::SameAxis);
        assert!((resolve("50%", Axis::Horizontal, &ctx) - 100.0).abs() < f32::EPSILON);
        assert!((resolve("50%", Axis::Vertical, &ctx) - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overflowing_viewport_product_is_out_of_range() {
        let ctx = ResolveContext::root(Viewport::new(f32::MAX, 1.0));
        assert_eq!(
            try_resolve("1000vw", Axis::Horizontal, &ctx),
            Err(UnitError::OutOfRange("1000vw".to_string()))
        );
    }
}
