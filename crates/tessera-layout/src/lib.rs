//! Retained-mode layout engine for a tree of styled rectangular nodes.
//!
//! # Scope
//!
//! This crate implements:
//! - **Unit resolution** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - `px`, unitless, `%`, `vw`, `vh`
//!   - Non-fatal diagnostics for malformed values
//!
//! - **Box model** ([CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Margin, border and padding per edge
//!   - Content, padding, border and margin rectangles
//!
//! - **Main-axis arrangement** ([CSS Flexbox Level 1](https://www.w3.org/TR/css-flexbox-1/), simplified)
//!   - Row and column orientation through one algorithm
//!   - `justify-content`, `align-items`, wrapping, gaps
//!
//! - **Stacking** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html), simplified)
//!   - Local stack order among siblings
//!   - Global stack order through the [`Compositor`]
//!
//! # Frame protocol
//!
//! ```text
//! Style → UnitResolver → BoxModel → arrange → layout_pass → paint_pass → Compositor::flush
//! ```
//!
//! # Not Implemented
//!
//! - Text layout and intrinsic sizing
//! - Grid layout
//! - Animation and hit-testing

/// Engine configuration and viewport.
pub mod config;
/// Errors raised by unit parsing.
pub mod error;
/// Frame-scoped global stacking.
pub mod compositor;
/// Layout and paint passes and the frame driver.
pub mod frame;
/// Box model geometry and the arrangement algorithm.
pub mod layout;
/// Layout nodes.
pub mod node;
/// Paint backend contract and display list.
pub mod paint;
/// Author-set style.
pub mod style;
/// The node tree with viewport-aware unit resolution.
pub mod tree;
/// Unit resolution.
pub mod units;

// Re-exports for convenience
pub use compositor::Compositor;
pub use config::{LayoutConfig, PercentBasis, Viewport};
pub use error::UnitError;
pub use frame::{FrameDriver, FrameStats, layout_pass, paint_pass};
pub use layout::{
    AlignItems, Arrangement, BoxModel, EdgeSizes, FlexLayout, JustifyContent, Point, Rect, Size,
    WrapMode, arrange,
};
pub use node::Node;
pub use paint::{CornerRadii, DisplayCommand, DisplayList, RenderBackend};
pub use style::{ColorValue, Edge, LengthValue, Style};
pub use tessera_tree::{NodeId, TreeError};
pub use tree::LayoutTree;
pub use units::{Axis, ParentSize, ResolveContext, resolve, try_resolve};
