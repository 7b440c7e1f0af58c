use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::data::{BundleKey, KeyCollision, LocaleVariant};
use crate::error::Conflict;

/// All locale variants of one resource bundle, under its canonical generated-type name.
#[derive(Debug, Clone)]
pub struct LogicalBundle {
    name: String,
    package: Option<String>,
    variants: BTreeMap<String, LocaleVariant>,
}

/// A bundle whose locales do not define the same number of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidBundle {
    pub name: String,
    /// Key count per locale tag, default locale first.
    pub key_counts: Vec<(String, usize)>,
}

impl LogicalBundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            variants: BTreeMap::new(),
        }
    }

    /// Canonical generated-type name. Fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias-resolved package the name was derived from, if known.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Records the package the first time it is given; later calls are ignored.
    pub fn set_package_once(&mut self, package: &str) {
        if self.package.is_none() {
            self.package = Some(package.to_string());
        }
    }

    /// Variants ordered by locale tag, default locale first.
    pub fn variants(&self) -> impl Iterator<Item = &LocaleVariant> {
        self.variants.values()
    }

    pub fn variant(&self, tag: &str) -> Option<&LocaleVariant> {
        self.variants.get(tag)
    }

    pub fn locale_tags(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Stores `variant` under its tag, merging into the existing variant for that tag.
    pub fn add_variant(&mut self, variant: LocaleVariant) -> Result<(), Conflict> {
        match self.variants.get_mut(variant.tag()) {
            Some(existing) => existing.merge(variant),
            None => {
                self.variants.insert(variant.tag().to_string(), variant);
                Ok(())
            }
        }
    }

    /// True when every locale defines the same number of keys.
    ///
    /// Only counts are compared: two locales with equally many but different keys pass.
    pub fn is_valid(&self) -> bool {
        let mut counts = self.variants.values().map(LocaleVariant::len);
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }

    /// Union of the keys of every locale.
    pub fn all_unique_keys(&self) -> BTreeSet<BundleKey> {
        self.variants
            .values()
            .flat_map(|v| v.keys().iter().cloned())
            .collect()
    }

    pub fn key_counts(&self) -> Vec<(String, usize)> {
        self.variants
            .iter()
            .map(|(tag, v)| (tag.clone(), v.len()))
            .collect()
    }

    pub fn collisions(&self) -> impl Iterator<Item = &KeyCollision> {
        self.variants.values().flat_map(|v| v.collisions().iter())
    }

    pub(crate) fn to_invalid(&self) -> Option<InvalidBundle> {
        if self.is_valid() {
            return None;
        }
        Some(InvalidBundle {
            name: self.name.clone(),
            key_counts: self.key_counts(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn variant(tag: &str, keys: &[&str]) -> LocaleVariant {
        LocaleVariant::from_keys(tag, format!("labels_{tag}.properties"), keys.iter().copied())
            .unwrap()
    }

    #[test]
    fn test_one_variant_per_tag() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b"])).unwrap();
        bundle.add_variant(variant("nl_NL", &["a", "b"])).unwrap();
        bundle.add_variant(variant("", &["c"])).unwrap();

        assert_eq!(bundle.locale_tags().collect::<Vec<_>>(), vec!["", "nl_NL"]);
        assert_eq!(bundle.variant("").unwrap().len(), 3);
    }

    #[test]
    fn test_merge_conflict_is_reported() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b"])).unwrap();

        let err = bundle.add_variant(variant("", &["b"])).unwrap_err();

        assert!(matches!(err, Conflict::DuplicateKeys { .. }));
        assert_eq!(bundle.variant("").unwrap().len(), 2);
    }

    #[test]
    fn test_is_valid_with_equal_counts() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b", "c"])).unwrap();
        bundle.add_variant(variant("nl_NL", &["a", "b", "c"])).unwrap();
        assert!(bundle.is_valid());
        assert_eq!(bundle.to_invalid(), None);
    }

    #[test]
    fn test_is_invalid_with_different_counts() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b", "c"])).unwrap();
        bundle.add_variant(variant("en_US", &["a", "b"])).unwrap();

        assert!(!bundle.is_valid());
        assert_eq!(
            bundle.to_invalid(),
            Some(InvalidBundle {
                name: "Labels".to_string(),
                key_counts: vec![("".to_string(), 3), ("en_US".to_string(), 2)],
            })
        );
    }

    #[test]
    fn test_same_count_different_keys_is_valid() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b"])).unwrap();
        bundle.add_variant(variant("de", &["a", "x"])).unwrap();
        assert!(bundle.is_valid());
    }

    #[test]
    fn test_empty_and_single_variant_bundles_are_valid() {
        let mut bundle = LogicalBundle::new("Labels");
        assert!(bundle.is_valid());
        bundle.add_variant(variant("", &["a"])).unwrap();
        assert!(bundle.is_valid());
    }

    #[test]
    fn test_all_unique_keys_is_union() {
        let mut bundle = LogicalBundle::new("Labels");
        bundle.add_variant(variant("", &["a", "b"])).unwrap();
        bundle.add_variant(variant("fr", &["b", "c"])).unwrap();

        let keys: Vec<String> = bundle
            .all_unique_keys()
            .iter()
            .map(|k| k.identifier().to_string())
            .collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_package_is_fixed_at_first_set() {
        let mut bundle = LogicalBundle::new("TestResources");
        bundle.set_package_once("test");
        bundle.set_package_once("other");
        assert_eq!(bundle.package(), Some("test"));
    }
}
