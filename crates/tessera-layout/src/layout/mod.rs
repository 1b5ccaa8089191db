//! Box model geometry and the arrangement algorithm.
//!
//! # Relevant Specifications
//!
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS Flexible Box Layout Module Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! # Module Structure
//!
//! - [`box_model`] - Points, sizes, rectangles, edge sizes and [`BoxModel`]
//! - [`arrange`] - Main-axis arrangement of a container's children

pub mod arrange;
pub mod box_model;

// Re-exports for convenience
pub use arrange::{AlignItems, Arrangement, FlexLayout, JustifyContent, WrapMode, arrange};
pub use box_model::{BoxModel, EdgeSizes, Point, Rect, Size};
