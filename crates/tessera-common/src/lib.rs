//! Common utilities for the Tessera layout engine.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Warning System** - deduplicated, colored diagnostics for recoverable
//!   conditions (malformed unit strings, misuse that degrades to zero geometry)

pub mod warning;
