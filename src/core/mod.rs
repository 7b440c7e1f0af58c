//! Resource bundle model built from locale-specific resource files.
//!
//! ## Module Structure
//!
//! - `utils`: Path pattern matching and identifier sanitizing
//! - `filter`: Which scanned files are resource bundles
//! - `file_scanner`: Recursive listing of a source root
//! - `parsers`: Key extraction from `.properties` and XML properties files
//! - `data`: BundleKey, LocaleVariant and LogicalBundle
//! - `alias`: Package alias resolution
//! - `registry`: Bundle identity and grouping of locale variants
//! - `model`: The finished model handed to code generation
//! - `pipeline`: One generation run from configuration to model
//!
//! ## Generation Run
//!
//! 1. **Scan** (`file_scanner::scan_files`)
//!    - Walk every source root and keep files accepted by the configured filter
//!
//! 2. **Group** (`registry::BundleRegistry`)
//!    - Read each file's keys and merge it into its logical bundle by derived name
//!
//! 3. **Validate** (`registry::BundleRegistry::validate`, optional)
//!    - Fail when the locales of a bundle define different numbers of keys

pub mod alias;
pub mod data;
pub mod file_scanner;
pub mod filter;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod registry;
pub mod utils;

pub use alias::PackageAliases;
pub use data::{
    BundleKey, DEFAULT_LOCALE, InvalidBundle, KeyCollision, LocaleVariant, LogicalBundle,
    split_file_name,
};
pub use file_scanner::scan_files;
pub use filter::{DEFAULT_INCLUDE, ExactNameFilter, FileFilter, Filter, GlobFilter};
pub use model::{ResourceModel, RootName};
pub use pipeline::{GenerateResult, generate};
pub use registry::{BundleIdentity, BundleRegistry, bundle_name, package_of, resolve_identity};
pub use utils::{PathMatcher, constant_identifier, match_path, sanitize, type_identifier};
