use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// One line of the per-bundle summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub name: String,
    /// Key count per locale tag, default locale first.
    pub key_counts: Vec<(String, usize)>,
    pub unique_key_count: usize,
}

#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Empty when locale validation failed.
    pub bundles: Vec<BundleSummary>,
    pub files: Vec<PathBuf>,
    /// Model JSON for `--json`.
    pub json: Option<String>,
    /// File the model JSON was written to.
    pub written_to: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running resgen commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// Invalid bundles and key collisions found during the run.
    pub issues: Vec<Issue>,
}
