//! Utility functions and helpers for the core pipeline.
//!
//! ## Module Structure
//!
//! - `glob_matcher`: Ant-style path pattern matching (`*`, `**`)
//! - `sanitize`: Conversion of arbitrary text into generated identifiers

pub mod glob_matcher;
pub mod sanitize;

pub use glob_matcher::*;
pub use sanitize::*;
