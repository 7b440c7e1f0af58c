//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow resgen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BundleSummary, CommandResult, CommandSummary, GenerateSummary, InitSummary,
};
use crate::issues::{Issue, Report, ReportLocation, Severity, locale_label};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer, followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        print_issue(issue, writer);
    }

    print_problem_count(issues, writer);
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(result, summary),
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

fn print_generate(result: &CommandResult, summary: &GenerateSummary) {
    // Keep stdout parseable when it carries the model JSON.
    if let Some(json) = &summary.json {
        report_to(&result.issues, &mut io::stderr().lock());
        println!("{}", json);
        return;
    }

    let mut stdout = io::stdout().lock();
    report_to(&result.issues, &mut stdout);
    if result.error_count > 0 {
        return;
    }

    print_bundles_to(&summary.bundles, &mut stdout);
    print_success_to(summary, &mut stdout);
}

/// Print one line per bundle: name, key count per locale, and the unique key count.
pub fn print_bundles_to<W: Write>(bundles: &[BundleSummary], writer: &mut W) {
    let name_width = bundles
        .iter()
        .map(|b| UnicodeWidthStr::width(b.name.as_str()))
        .max()
        .unwrap_or(0);

    for bundle in bundles {
        let padding = name_width - UnicodeWidthStr::width(bundle.name.as_str());
        let locales = bundle
            .key_counts
            .iter()
            .map(|(tag, count)| format!("{}: {}", locale_label(tag), count))
            .collect::<Vec<_>>()
            .join(", ");

        let _ = writeln!(
            writer,
            "  {}{:padding$}  {}  {}",
            bundle.name.bold(),
            "",
            locales,
            format!("{} {}", bundle.unique_key_count, plural(bundle.unique_key_count, "key", "keys"))
                .dimmed(),
            padding = padding
        );
    }
}

pub fn print_success_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let bundle_count = summary.bundles.len();
    let file_count = summary.files.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} from {} {}",
            bundle_count,
            plural(bundle_count, "bundle", "bundles"),
            file_count,
            plural(file_count, "file", "files")
        )
        .green()
    );

    if let Some(path) = &summary.written_to {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Wrote model to {}", path.display()).green()
        );
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Bundle { name } => {
            let _ = writeln!(writer, "  {} bundle {}", "-->".blue(), name);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
        }
    }

    for detail in issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), detail);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_problem_count<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
