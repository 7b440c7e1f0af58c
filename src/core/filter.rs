//! Predicates deciding which scanned files are resource bundles.
//!
//! The set of filters is closed and chosen when the configuration is built. Both variants
//! look at a file's path relative to the source root it was found under.

use enum_dispatch::enum_dispatch;

use crate::core::utils::PathMatcher;
use crate::error::{Error, Result};

/// Default include pattern: every `.properties` file at any depth.
pub const DEFAULT_INCLUDE: &str = "**/*.properties";

#[enum_dispatch]
pub trait FileFilter {
    /// True if the file at `relative_path` should be treated as a resource bundle.
    fn matches(&self, relative_path: &str) -> bool;
}

#[enum_dispatch(FileFilter)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Glob(GlobFilter),
    ExactName(ExactNameFilter),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Glob(GlobFilter {
            matcher: PathMatcher::new([DEFAULT_INCLUDE]),
        })
    }
}

/// Accepts paths matching at least one Ant-style pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobFilter {
    matcher: PathMatcher,
}

impl GlobFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_matcher(PathMatcher::new(patterns))
    }

    pub fn from_matcher(matcher: PathMatcher) -> Result<Self> {
        if matcher.patterns().is_empty() {
            return Err(Error::invalid_argument(
                "at least one include pattern is required",
            ));
        }
        if matcher.patterns().iter().any(|p| p.trim().is_empty()) {
            return Err(Error::invalid_argument("include patterns may not be empty"));
        }
        Ok(Self { matcher })
    }

    pub fn patterns(&self) -> &[String] {
        self.matcher.patterns()
    }
}

impl FileFilter for GlobFilter {
    fn matches(&self, relative_path: &str) -> bool {
        self.matcher.matches(relative_path)
    }
}

/// Accepts files whose name equals one of the configured names, ignoring case.
/// Directories leading up to the file are not considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactNameFilter {
    names: Vec<String>,
    separator: char,
}

impl ExactNameFilter {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_separator(names, std::path::MAIN_SEPARATOR)
    }

    pub fn with_separator<I, S>(names: I, separator: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::invalid_argument("at least one file name is required"));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(Error::invalid_argument("file names may not be empty"));
        }
        Ok(Self { names, separator })
    }
}

impl FileFilter for ExactNameFilter {
    fn matches(&self, relative_path: &str) -> bool {
        let file_name = relative_path
            .rsplit(self.separator)
            .next()
            .unwrap_or(relative_path);
        self.names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_filter_accepts_properties_at_any_depth() {
        let filter = Filter::default();
        let sep = std::path::MAIN_SEPARATOR;
        assert!(filter.matches("labels.properties"));
        assert!(filter.matches(&format!("org{sep}test{sep}labels_nl_NL.properties")));
        assert!(!filter.matches("labels.xml"));
    }

    #[test]
    fn test_glob_filter_rejects_empty_patterns() {
        let err = GlobFilter::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = GlobFilter::new(["**/*.properties", " "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_glob_filter_dispatch() {
        let filter: Filter = GlobFilter::from_matcher(PathMatcher::with_separator(
            ["**/*.xml"],
            '/',
        ))
        .unwrap()
        .into();
        assert!(filter.matches("org/labels.xml"));
        assert!(!filter.matches("org/labels.properties"));
    }

    #[test]
    fn test_exact_name_filter_ignores_case_and_directories() {
        let filter: Filter = ExactNameFilter::with_separator(["labels.properties"], '/')
            .unwrap()
            .into();
        assert!(filter.matches("labels.properties"));
        assert!(filter.matches("org/test/Labels.PROPERTIES"));
        assert!(!filter.matches("org/test/labels_nl.properties"));
    }

    #[test]
    fn test_exact_name_filter_requires_names() {
        let err = ExactNameFilter::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
