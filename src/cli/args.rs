//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Build the bundle model from the configured source roots
//! - `init`: Initialize resgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory to scan for resource files (overrides config file).
    /// Can be specified multiple times.
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,

    /// Pattern selecting resource files, e.g. "**/*.xml" (overrides config file).
    /// Can be specified multiple times.
    #[arg(long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Exact resource file name, compared case-insensitively (overrides includes).
    /// Can be specified multiple times.
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_names: Vec<String>,

    /// Package alias as PACKAGE=ALIAS, e.g. org.example.web=web.
    /// Can be specified multiple times.
    #[arg(long = "alias", value_name = "PACKAGE=ALIAS", value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,

    /// Fail when the locales of a bundle define different numbers of keys
    #[arg(long)]
    pub validate: bool,

    /// Qualified name of the root type (overrides config file)
    #[arg(long)]
    pub root_name: Option<String>,

    /// Write the model JSON to this file (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the model JSON to stdout instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group resource files into bundles and derive type and constant names
    Generate(GenerateCommand),
    /// Initialize a new .resgenrc.json configuration file
    Init,
}

fn parse_alias(value: &str) -> Result<(String, String), String> {
    let (package, alias) = value
        .split_once('=')
        .ok_or_else(|| format!("expected PACKAGE=ALIAS, got \"{}\"", value))?;
    let (package, alias) = (package.trim(), alias.trim());
    if package.is_empty() || alias.is_empty() {
        return Err(format!("package and alias may not be empty in \"{}\"", value));
    }
    Ok((package.to_string(), alias.to_string()))
}
