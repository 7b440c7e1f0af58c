//! Core data types of the resource model.
//!
//! ## Module Structure
//!
//! - `key`: BundleKey (constant identifier + original key)
//! - `locale`: LocaleVariant, one locale's key set, and file name splitting
//! - `bundle`: LogicalBundle, all locale variants under one generated-type name

pub mod bundle;
pub mod key;
pub mod locale;

pub use bundle::{InvalidBundle, LogicalBundle};
pub use key::BundleKey;
pub use locale::{DEFAULT_LOCALE, KeyCollision, LocaleVariant, split_file_name};
