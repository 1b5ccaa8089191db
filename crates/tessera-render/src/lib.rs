//! Software rendering backend for the Tessera layout engine.
//!
//! [`Canvas`] implements [`tessera_layout::RenderBackend`] over an RGBA pixel
//! buffer, so a frame can be rendered headless and written out as a PNG.
//!
//! # Architecture
//!
//! The canvas is the final stage in the pipeline:
//!
//! ```text
//! Style → Layout → Paint → Canvas
//!                    ↓        ↓
//!               (commands) → Pixels
//! ```
//!
//! The canvas knows nothing about styles, layout, or the node tree. It only
//! fills and strokes rectangles.

mod canvas;

pub use canvas::Canvas;
