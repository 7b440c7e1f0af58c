//! Issue types for generation results.
//!
//! Each issue carries what the CLI needs to print it. The core never prints; it
//! returns invalid bundles and key collisions as data, and they become issues here.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::core::{BundleRegistry, InvalidBundle, KeyCollision};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    LocaleKeyCount,
    KeyCollision,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::LocaleKeyCount => write!(f, "locale-key-count"),
            Rule::KeyCollision => write!(f, "key-collision"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Locales of one bundle define different numbers of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeyCountIssue {
    pub bundle: InvalidBundle,
}

/// Two keys of one file sanitize to the same constant identifier; one was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollisionIssue {
    pub bundle: String,
    pub collision: KeyCollision,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    LocaleKeyCount(LocaleKeyCountIssue),
    KeyCollision(KeyCollisionIssue),
}

impl Issue {
    pub fn from_invalid_bundles(bundles: &[InvalidBundle]) -> Vec<Issue> {
        bundles
            .iter()
            .cloned()
            .map(|bundle| Issue::from(LocaleKeyCountIssue { bundle }))
            .collect()
    }

    pub fn from_collisions(registry: &BundleRegistry) -> Vec<Issue> {
        registry
            .collisions()
            .map(|(bundle, collision)| {
                Issue::from(KeyCollisionIssue {
                    bundle: bundle.to_string(),
                    collision: collision.clone(),
                })
            })
            .collect()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A logical bundle, spread over several files.
    Bundle { name: &'a str },
    /// A single resource file.
    File { path: &'a Path },
}

#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" lines, one entry per line.
    fn details(&self) -> Vec<String> {
        Vec::new()
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for LocaleKeyCountIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Bundle {
            name: &self.bundle.name,
        }
    }

    fn message(&self) -> String {
        format!(
            "locales of `{}` define different numbers of keys",
            self.bundle.name
        )
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::LocaleKeyCount
    }

    fn details(&self) -> Vec<String> {
        self.bundle
            .key_counts
            .iter()
            .map(|(tag, count)| format!("{}: {} key(s)", locale_label(tag), count))
            .collect()
    }
}

impl Report for KeyCollisionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.collision.file,
        }
    }

    fn message(&self) -> String {
        format!(
            "`{}` and `{}` both become `{}`",
            self.collision.kept, self.collision.dropped, self.collision.identifier
        )
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::KeyCollision
    }

    fn details(&self) -> Vec<String> {
        vec![format!(
            "`{}` in bundle `{}` keeps `{}`",
            self.collision.identifier, self.bundle, self.collision.kept
        )]
    }
}

/// Display label of a locale tag; the default locale has an empty tag.
pub fn locale_label(tag: &str) -> &str {
    if tag.is_empty() { "(default)" } else { tag }
}
