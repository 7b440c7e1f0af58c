use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use serde::Serialize;

use crate::core::utils::constant_identifier;

/// A resource key: the constant identifier generated for it plus the text it came from.
///
/// Equality, hashing and ordering only look at the identifier, so two original keys that
/// sanitize to the same identifier are the same `BundleKey`.
#[derive(Debug, Clone, Serialize)]
pub struct BundleKey {
    identifier: String,
    original: String,
}

impl BundleKey {
    /// Returns `None` when nothing of `original` survives sanitization.
    pub fn new(original: impl Into<String>) -> Option<Self> {
        let original = original.into();
        let identifier = constant_identifier(&original);
        if identifier.is_empty() {
            return None;
        }
        Some(Self {
            identifier,
            original,
        })
    }

    /// Constant identifier, e.g. `PERSON_FIRSTNAME`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Key as written in the resource file, e.g. `person.firstname`.
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl PartialEq for BundleKey {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for BundleKey {}

impl Hash for BundleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl PartialOrd for BundleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BundleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier.cmp(&other.identifier)
    }
}
