//! Error types for a generation run.
//!
//! Every error aborts the run that raised it. There is no partial model and no retry path.

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::core::InvalidBundle;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or malformed. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A directory under a source root could not be listed.
    #[error("failed to scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A resource file could not be opened or decoded.
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// Two locale variants of one bundle could not be merged.
    #[error("bundle `{bundle}` cannot take {}: {conflict}", .path.display())]
    IdentityConflict {
        bundle: String,
        path: PathBuf,
        conflict: Conflict,
    },

    /// One or more bundles define a different number of keys per locale.
    #[error("{} resource bundle(s) do not define the same number of keys for all locales: {}", .bundles.len(), bundle_names(.bundles))]
    Validation { bundles: Vec<InvalidBundle> },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Scan,
    Parse,
    IdentityConflict,
    Validation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Scan { .. } => ErrorKind::Scan,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::IdentityConflict { .. } => ErrorKind::IdentityConflict,
            Error::Validation { .. } => ErrorKind::Validation,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Error::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Why a locale variant could not be merged into another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("locale `{found}` cannot be merged into locale `{expected}`")]
    LocaleMismatch { expected: String, found: String },

    #[error("locale `{locale}` already defines {}", .keys.join(", "))]
    DuplicateKeys { locale: String, keys: Vec<String> },
}

fn bundle_names(bundles: &[InvalidBundle]) -> String {
    bundles
        .iter()
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
