//! Per-run registry of logical bundles keyed by canonical generated-type name.
//!
//! Every generation run builds its own registry and drops it afterwards.

use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
};

use crate::config::Configuration;
use crate::core::{
    PackageAliases,
    data::{InvalidBundle, KeyCollision, LocaleVariant, LogicalBundle, split_file_name},
    utils::{sanitize, type_identifier},
};
use crate::error::{Error, Result};
use crate::utils::capitalize_first;

const PACKAGE_SEPARATOR: &str = ".";

/// Where a resource file belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleIdentity {
    /// Canonical generated-type name, e.g. `OrgCapatectTestResources`.
    pub name: String,
    /// Package after alias resolution, e.g. `org.capatect.test` or `test`.
    pub package: String,
    /// Locale tag from the file name; empty for the default locale.
    pub locale: String,
}

/// Dotted package of `file`, relative to the first source root containing it.
///
/// Files outside every root are in the default (empty) package.
pub fn package_of(file: &Path, source_roots: &[PathBuf]) -> String {
    let Some(dir) = file.parent() else {
        return String::new();
    };

    source_roots
        .iter()
        .find_map(|root| dir.strip_prefix(root).ok())
        .map(|relative| {
            relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(PACKAGE_SEPARATOR)
        })
        .unwrap_or_default()
}

/// Generated-type name for a bundle file in `package`.
///
/// Every package segment is sanitized and title-cased, followed by the title-cased file
/// stem without locale and extension.
///
/// ```
/// use resgen::core::bundle_name;
///
/// assert_eq!(bundle_name("", "resources.properties"), "Resources");
/// assert_eq!(
///     bundle_name("org.capatect.test", "resources_nl_NL.properties"),
///     "OrgCapatectTestResources"
/// );
/// ```
pub fn bundle_name(package: &str, file_name: &str) -> String {
    let (stem, _) = split_file_name(file_name);

    let mut name: String = package
        .split(PACKAGE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| capitalize_first(&sanitize(segment)))
        .collect();
    name.push_str(&type_identifier(stem));
    name
}

pub fn resolve_identity(
    file: &Path,
    source_roots: &[PathBuf],
    aliases: &PackageAliases,
) -> Result<BundleIdentity> {
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::invalid_argument(format!("'{}' has no usable file name", file.display()))
        })?;

    let package = package_of(file, source_roots);
    let package = aliases.alias_for(&package).to_string();
    let name = bundle_name(&package, file_name);
    if name.is_empty() {
        return Err(Error::invalid_argument(format!(
            "cannot derive a bundle name for '{}'",
            file.display()
        )));
    }

    let (_, locale) = split_file_name(file_name);
    Ok(BundleIdentity {
        name,
        package,
        locale: locale.to_string(),
    })
}

#[derive(Debug, Default)]
pub struct BundleRegistry {
    bundles: BTreeMap<String, LogicalBundle>,
}

impl BundleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundle named `name`, created empty on first request.
    pub fn get_or_create(&mut self, name: &str) -> &mut LogicalBundle {
        self.bundles
            .entry(name.to_string())
            .or_insert_with(|| LogicalBundle::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&LogicalBundle> {
        self.bundles.get(name)
    }

    /// Bundles ordered by name.
    pub fn bundles(&self) -> impl Iterator<Item = &LogicalBundle> {
        self.bundles.values()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Reads `file` and adds it as a locale variant of the bundle it resolves to.
    pub fn add_resource_file(
        &mut self,
        file: &Path,
        config: &Configuration,
    ) -> Result<&LogicalBundle> {
        let identity = resolve_identity(file, config.source_roots(), config.aliases())?;
        let variant = LocaleVariant::from_file(file)?;
        self.add_variant(&identity, variant, file)
    }

    /// Adds an already-read variant under `identity`. `file` is only used for errors.
    pub fn add_variant(
        &mut self,
        identity: &BundleIdentity,
        variant: LocaleVariant,
        file: &Path,
    ) -> Result<&LogicalBundle> {
        let bundle = self.get_or_create(&identity.name);
        bundle.set_package_once(&identity.package);
        bundle
            .add_variant(variant)
            .map_err(|conflict| Error::IdentityConflict {
                bundle: identity.name.clone(),
                path: file.to_path_buf(),
                conflict,
            })?;
        Ok(bundle)
    }

    pub fn invalid_bundles(&self) -> Vec<InvalidBundle> {
        self.bundles.values().filter_map(LogicalBundle::to_invalid).collect()
    }

    /// Fails with every bundle whose locales define different numbers of keys.
    pub fn validate(&self) -> Result<()> {
        let bundles = self.invalid_bundles();
        if bundles.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation { bundles })
        }
    }

    /// Key collisions of every bundle, with the bundle name.
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &KeyCollision)> {
        self.bundles
            .values()
            .flat_map(|b| b.collisions().map(move |c| (b.name(), c)))
    }
}
