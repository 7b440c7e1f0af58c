use std::collections::HashMap;

use crate::error::{Error, Result};

/// Exact-match substitutes for package names, used when naming bundles.
///
/// `org.capatect.test → test` turns `OrgCapatectTestResources` into `TestResources`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageAliases {
    aliases: HashMap<String, String>,
}

impl PackageAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both `package` and `alias` must be non-blank. A later alias for the same package wins.
    pub fn insert(&mut self, package: impl Into<String>, alias: impl Into<String>) -> Result<()> {
        let package = package.into();
        let alias = alias.into();
        if package.trim().is_empty() {
            return Err(Error::invalid_argument("aliased package may not be empty"));
        }
        if alias.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "alias for package '{}' may not be empty",
                package
            )));
        }
        self.aliases.insert(package, alias);
        Ok(())
    }

    /// The alias configured for `package`, or `package` itself. Case-sensitive.
    pub fn alias_for<'a>(&'a self, package: &'a str) -> &'a str {
        self.aliases
            .get(package)
            .map(String::as_str)
            .unwrap_or(package)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
