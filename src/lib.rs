//! resgen - typed constants for locale resource bundles
//!
//! resgen scans source roots for locale-specific resource files (`labels.properties`,
//! `labels_nl_NL.properties`, ...), groups them into logical bundles and derives the
//! identifiers a code generator needs: one type name per bundle and one constant per key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and the validated run configuration
//! - `core`: Scanning, parsing and the bundle model
//! - `error`: Error type shared by the library
//! - `issues`: Reportable findings (locale validation, key collisions)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod utils;
