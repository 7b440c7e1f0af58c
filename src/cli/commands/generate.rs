use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::{GenerateArgs, GenerateCommand};
use super::{BundleSummary, CommandResult, CommandSummary, GenerateSummary};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{LogicalBundle, pipeline},
    error::Error,
    issues::{Issue, Report, Severity},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let verbose = args.common.verbose;

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;

    if verbose {
        if loaded.from_file {
            eprintln!(
                "{} using {}",
                "note:".bold().cyan(),
                loaded.base_dir.join(CONFIG_FILE_NAME).display()
            );
        } else {
            eprintln!(
                "{} no {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }
    }

    let mut config = loaded.config;
    apply_overrides(&mut config, args, &cwd);
    config.validate()?;

    let configuration = config.to_builder(&loaded.base_dir)?.build()?;

    if verbose {
        for root in configuration.source_roots() {
            eprintln!("{} {}", "Scanning".bold(), root.display());
        }
    }

    let result = match pipeline::generate(&configuration) {
        Ok(result) => result,
        Err(Error::Validation { bundles }) => {
            return Ok(finish(
                GenerateSummary::default(),
                Issue::from_invalid_bundles(&bundles),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    if verbose {
        for file in &result.files {
            eprintln!("  {} {}", "read".dimmed(), file.display());
        }
    }

    let registry = result.model.registry();
    let mut summary = GenerateSummary {
        bundles: registry.bundles().map(summarize).collect(),
        files: result.files.clone(),
        json: None,
        written_to: None,
    };

    if args.json || configuration.output().is_some() {
        let json = result
            .model
            .to_json()
            .context("Failed to serialize bundle model")?;

        if let Some(output) = configuration.output() {
            write_output(output, &json)?;
            summary.written_to = Some(output.to_path_buf());
        }
        if args.json {
            summary.json = Some(json);
        }
    }

    Ok(finish(summary, Issue::from_collisions(registry)))
}

/// CLI flags replace the matching config values. Paths given on the command line are
/// relative to the working directory.
fn apply_overrides(config: &mut Config, args: &GenerateArgs, cwd: &Path) {
    if !args.source_roots.is_empty() {
        config.source_roots = args
            .source_roots
            .iter()
            .map(|root| cwd.join(root).to_string_lossy().into_owned())
            .collect();
    }
    if !args.includes.is_empty() {
        config.includes = args.includes.clone();
        config.file_names.clear();
    }
    if !args.file_names.is_empty() {
        config.file_names = args.file_names.clone();
    }
    config.aliases.extend(args.aliases.iter().cloned());
    if args.validate {
        config.validate_locales = true;
    }
    if let Some(root_name) = &args.root_name {
        config.root_name = root_name.clone();
    }
    if let Some(output) = &args.output {
        config.output = Some(cwd.join(output).to_string_lossy().into_owned());
    }
}

fn summarize(bundle: &LogicalBundle) -> BundleSummary {
    BundleSummary {
        name: bundle.name().to_string(),
        key_counts: bundle.key_counts(),
        unique_key_count: bundle.all_unique_keys().len(),
    }
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn finish(summary: GenerateSummary, issues: Vec<Issue>) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();

    CommandResult {
        summary: CommandSummary::Generate(summary),
        error_count,
        issues,
    }
}
