use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_INCLUDE, ExactNameFilter, Filter, GlobFilter, PackageAliases, RootName,
};
use crate::error::Error;

pub const CONFIG_FILE_NAME: &str = ".resgenrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub file_names: Vec<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub validate_locales: bool,
    #[serde(default = "default_root_name")]
    pub root_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_source_roots() -> Vec<String> {
    vec![".".to_string()]
}

fn default_includes() -> Vec<String> {
    vec![DEFAULT_INCLUDE.to_string()]
}

fn default_root_name() -> String {
    RootName::DEFAULT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_roots: default_source_roots(),
            includes: default_includes(),
            file_names: Vec::new(),
            aliases: BTreeMap::new(),
            validate_locales: false,
            root_name: default_root_name(),
            output: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Checks everything that does not need the file system; whether the source roots
    /// exist is left to [`ConfigurationBuilder::build`].
    pub fn validate(&self) -> Result<()> {
        if self.source_roots.is_empty() {
            bail!("'sourceRoots' must name at least one directory");
        }
        if self.source_roots.iter().any(|r| r.trim().is_empty()) {
            bail!("Empty entry in 'sourceRoots'");
        }

        if self.file_names.is_empty() && self.includes.is_empty() {
            bail!("'includes' must contain at least one pattern");
        }
        if self.includes.iter().any(|p| p.trim().is_empty()) {
            bail!("Empty pattern in 'includes'");
        }
        if self.file_names.iter().any(|n| n.trim().is_empty()) {
            bail!("Empty name in 'fileNames'");
        }

        for (package, alias) in &self.aliases {
            if package.trim().is_empty() {
                bail!("Empty package name in 'aliases'");
            }
            if alias.trim().is_empty() {
                bail!("Empty alias for package \"{}\" in 'aliases'", package);
            }
        }

        RootName::parse(&self.root_name).context("Invalid 'rootName'")?;

        Ok(())
    }

    /// Turns the file representation into a builder, resolving relative paths against
    /// `base_dir`.
    pub fn to_builder(&self, base_dir: &Path) -> crate::error::Result<ConfigurationBuilder> {
        let filter = if self.file_names.is_empty() {
            Filter::from(GlobFilter::new(self.includes.iter().cloned())?)
        } else {
            Filter::from(ExactNameFilter::new(self.file_names.iter().cloned())?)
        };

        let mut builder = ConfigurationBuilder::new()
            .filter(filter)
            .validate_locales(self.validate_locales)
            .root_name(&self.root_name);
        for root in &self.source_roots {
            builder = builder.source_root(base_dir.join(root));
        }
        for (package, alias) in &self.aliases {
            builder = builder.alias(package, alias);
        }
        if let Some(output) = &self.output {
            builder = builder.output(base_dir.join(output));
        }
        Ok(builder)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}

/// Validated settings of one generation run.
#[derive(Debug, Clone)]
pub struct Configuration {
    source_roots: Vec<PathBuf>,
    filter: Filter,
    aliases: PackageAliases,
    validate_locales: bool,
    root_name: RootName,
    output: Option<PathBuf>,
}

impl Configuration {
    /// Absolute, canonical source roots in configuration order.
    pub fn source_roots(&self) -> &[PathBuf] {
        &self.source_roots
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn aliases(&self) -> &PackageAliases {
        &self.aliases
    }

    pub fn validate_locales(&self) -> bool {
        self.validate_locales
    }

    pub fn root_name(&self) -> &RootName {
        &self.root_name
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Collects settings and checks them once in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    source_roots: Vec<PathBuf>,
    filter: Option<Filter>,
    aliases: Vec<(String, String)>,
    validate_locales: bool,
    root_name: Option<String>,
    output: Option<PathBuf>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_root(mut self, root: impl AsRef<Path>) -> Self {
        self.source_roots.push(root.as_ref().to_path_buf());
        self
    }

    /// Defaults to a glob filter for `**/*.properties`.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn alias(mut self, package: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.push((package.into(), alias.into()));
        self
    }

    pub fn validate_locales(mut self, validate: bool) -> Self {
        self.validate_locales = validate;
        self
    }

    /// Defaults to `R`.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> crate::error::Result<Configuration> {
        if self.source_roots.is_empty() {
            return Err(Error::invalid_argument(
                "at least one source root is required",
            ));
        }

        let mut source_roots: Vec<PathBuf> = Vec::with_capacity(self.source_roots.len());
        for root in &self.source_roots {
            if !root.is_dir() {
                return Err(Error::invalid_argument(format!(
                    "source root '{}' is not an existing directory",
                    root.display()
                )));
            }
            let root = root.canonicalize().map_err(|e| {
                Error::invalid_argument(format!(
                    "cannot resolve source root '{}': {}",
                    root.display(),
                    e
                ))
            })?;
            if !source_roots.contains(&root) {
                source_roots.push(root);
            }
        }

        let mut aliases = PackageAliases::new();
        for (package, alias) in self.aliases {
            aliases.insert(package, alias)?;
        }

        let root_name = match &self.root_name {
            Some(name) => RootName::parse(name)?,
            None => RootName::default(),
        };

        Ok(Configuration {
            source_roots,
            filter: self.filter.unwrap_or_default(),
            aliases,
            validate_locales: self.validate_locales,
            root_name,
            output: self.output,
        })
    }
}
