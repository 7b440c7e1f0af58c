use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{BundleKey, BundleRegistry};
use crate::error::{Error, Result};

/// Fully qualified name of the root type that nests one generated type per bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootName {
    package: String,
    name: String,
}

impl RootName {
    pub const DEFAULT: &str = "R";

    /// Parses a dotted name such as `com.example.R`. Every segment must be non-empty.
    pub fn parse(qualified: &str) -> Result<Self> {
        let qualified = qualified.trim();
        if qualified.is_empty() {
            return Err(Error::invalid_argument("root name may not be empty"));
        }

        let segments: Vec<&str> = qualified.split('.').collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::invalid_argument(format!(
                "root name '{}' contains an empty segment",
                qualified
            )));
        }

        let (name, package) = segments
            .split_last()
            .map(|(name, package)| (name.to_string(), package.join(".")))
            .unwrap_or_default();
        Ok(Self { package, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Empty for a root type in the default package.
    pub fn package(&self) -> &str {
        &self.package
    }
}

impl Default for RootName {
    fn default() -> Self {
        Self {
            package: String::new(),
            name: Self::DEFAULT.to_string(),
        }
    }
}

/// Result of a generation run, consumed by code emitters.
#[derive(Debug)]
pub struct ResourceModel {
    root: RootName,
    registry: BundleRegistry,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelView<'a> {
    pub root_name: &'a str,
    pub root_package: &'a str,
    pub bundles: Vec<BundleView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleView<'a> {
    pub name: &'a str,
    pub package: &'a str,
    /// Constant identifiers per locale tag.
    pub locales: BTreeMap<&'a str, Vec<&'a str>>,
    /// Union of the keys of every locale.
    pub keys: Vec<BundleKey>,
}

impl ResourceModel {
    pub fn new(root: RootName, registry: BundleRegistry) -> Self {
        Self { root, registry }
    }

    pub fn root(&self) -> &RootName {
        &self.root
    }

    pub fn registry(&self) -> &BundleRegistry {
        &self.registry
    }

    /// Serializable snapshot, bundles ordered by name.
    pub fn view(&self) -> ModelView<'_> {
        let bundles = self
            .registry
            .bundles()
            .map(|bundle| BundleView {
                name: bundle.name(),
                package: bundle.package().unwrap_or_default(),
                locales: bundle
                    .variants()
                    .map(|v| (v.tag(), v.keys().iter().map(BundleKey::identifier).collect()))
                    .collect(),
                keys: bundle.all_unique_keys().into_iter().collect(),
            })
            .collect();

        ModelView {
            root_name: self.root.name(),
            root_package: self.root.package(),
            bundles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.view())
    }
}
