//! Painting.
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The core never rasterizes. It paints through the [`RenderBackend`]
//! trait, which a host implements over its drawing surface:
//!
//! ```text
//! LayoutTree → paint_pass / Compositor::flush → RenderBackend
//!                                                  ↓
//!                                    Canvas (pixels) or DisplayList (commands)
//! ```
//!
//! [`DisplayList`] is the recording backend: it stores every command in
//! order, which makes paint order directly observable.

mod backend;
mod display_list;
mod painter;

pub use backend::{CornerRadii, RenderBackend};
pub use display_list::{DisplayCommand, DisplayList};
pub use painter::paint_box;
