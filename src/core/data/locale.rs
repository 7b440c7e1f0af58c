use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::core::data::BundleKey;
use crate::core::parsers;
use crate::error::{Conflict, Error, Result};

/// Tag of the unlocalized variant.
pub const DEFAULT_LOCALE: &str = "";

const LOCALE_SEPARATOR: char = '_';
const EXTENSION_SEPARATOR: char = '.';

/// Splits a resource file name into its bundle stem and locale tag.
///
/// Everything from the first `.` on is the extension. If what remains contains a `_`, the
/// stem ends there and the rest is the locale tag; otherwise the tag is the default one.
///
/// ```
/// use resgen::core::split_file_name;
///
/// assert_eq!(split_file_name("labels_nl_NL.properties"), ("labels", "nl_NL"));
/// assert_eq!(split_file_name("labels.properties"), ("labels", ""));
/// assert_eq!(split_file_name("labels.v2_nl.properties"), ("labels", ""));
/// ```
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    let base = file_name
        .split_once(EXTENSION_SEPARATOR)
        .map_or(file_name, |(base, _)| base);
    match base.split_once(LOCALE_SEPARATOR) {
        Some((stem, locale)) => (stem, locale),
        None => (base, DEFAULT_LOCALE),
    }
}

/// Two original keys in one file that map to the same constant identifier.
/// The first one seen is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCollision {
    pub identifier: String,
    pub kept: String,
    pub dropped: String,
    pub file: PathBuf,
}

/// One locale's contribution to a bundle.
#[derive(Debug, Clone)]
pub struct LocaleVariant {
    tag: String,
    keys: BTreeSet<BundleKey>,
    files: Vec<PathBuf>,
    collisions: Vec<KeyCollision>,
}

impl LocaleVariant {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            keys: BTreeSet::new(),
            files: Vec::new(),
            collisions: Vec::new(),
        }
    }

    /// Builds a variant from original key strings, as if read from `file`.
    ///
    /// Keys sanitizing to the same identifier coalesce and are recorded as collisions.
    /// Fails if a key sanitizes to an empty identifier.
    pub fn from_keys<I, S>(tag: impl Into<String>, file: impl Into<PathBuf>, originals: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let file = file.into();
        let mut variant = Self::new(tag);

        for original in originals {
            let original = original.into();
            let Some(key) = BundleKey::new(original.as_str()) else {
                return Err(Error::parse(
                    &file,
                    format!("key {:?} does not yield an identifier", original),
                ));
            };
            if let Some(existing) = variant.keys.get(&key) {
                variant.collisions.push(KeyCollision {
                    identifier: key.identifier().to_string(),
                    kept: existing.original().to_string(),
                    dropped: original,
                    file: file.clone(),
                });
                continue;
            }
            variant.keys.insert(key);
        }

        variant.files.push(file);
        Ok(variant)
    }

    /// Reads a resource file. The locale tag comes from its file name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let file_name = absolute
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::parse(&absolute, "file name is not valid UTF-8"))?;
        let (_, tag) = split_file_name(file_name);
        let tag = tag.to_string();

        let originals =
            parsers::read_keys(&absolute).map_err(|e| Error::parse(&absolute, format!("{:#}", e)))?;

        Self::from_keys(tag, absolute, originals)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_default(&self) -> bool {
        self.tag == DEFAULT_LOCALE
    }

    pub fn keys(&self) -> &BTreeSet<BundleKey> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Files this variant was read from.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    /// Adds the keys of `other`, which must have the same tag and no key in common.
    ///
    /// On error `self` is left unchanged.
    pub fn merge(&mut self, other: LocaleVariant) -> Result<(), Conflict> {
        if other.tag != self.tag {
            return Err(Conflict::LocaleMismatch {
                expected: self.tag.clone(),
                found: other.tag,
            });
        }

        let duplicates: Vec<String> = other
            .keys
            .intersection(&self.keys)
            .map(|k| k.identifier().to_string())
            .collect();
        if !duplicates.is_empty() {
            return Err(Conflict::DuplicateKeys {
                locale: self.tag.clone(),
                keys: duplicates,
            });
        }

        self.keys.extend(other.keys);
        self.files.extend(other.files);
        self.collisions.extend(other.collisions);
        Ok(())
    }
}

/// Same locale means same tag.
impl PartialEq for LocaleVariant {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for LocaleVariant {}
