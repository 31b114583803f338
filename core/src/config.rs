#![deny(missing_docs)]

//! # Configuration
//!
//! Optional YAML file holding project defaults for schema test generation.
//!
//! ```yaml
//! schema_dir: schema-examples
//! target: src/tests/schema.rs
//! namespace: schemas
//! macro_name: json_deserialize_test!
//! extension: json
//! prefix_file: scripts/schema_prefix.rs
//! ```
//!
//! Relative paths in the file are taken relative to the file's own directory.
//! Command line values override file values; file values override built-in defaults.

use crate::error::{AppError, AppResult};
use crate::schema_tests::{TestTemplate, DEFAULT_EXTENSION, DEFAULT_MACRO, DEFAULT_NAMESPACE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory scanned for example files.
pub const DEFAULT_SCHEMA_DIR: &str = "schema-examples";

/// File name picked up automatically from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "devgen.yaml";

/// Raw config file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory of example files.
    pub schema_dir: Option<PathBuf>,
    /// File to overwrite. Absent means stdout.
    pub target: Option<PathBuf>,
    /// Module path of the example types.
    pub namespace: Option<String>,
    /// Macro invocation prefix.
    pub macro_name: Option<String>,
    /// Artifact extension.
    pub extension: Option<String>,
    /// File whose contents replace the built-in prefix.
    pub prefix_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parses YAML text.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        // An empty document is a valid "no overrides" config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Loads `path`, rebasing relative paths onto the directory containing it.
    ///
    /// # Errors
    ///
    /// * `AppError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        let config = Self::from_yaml(&text)?;
        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    /// Joins every relative path onto `base`. Absolute paths are left alone.
    pub fn relative_to(self, base: &Path) -> Self {
        let rebase = |p: Option<PathBuf>| p.map(|p| base.join(p));
        Self {
            schema_dir: rebase(self.schema_dir),
            target: rebase(self.target),
            prefix_file: rebase(self.prefix_file),
            ..self
        }
    }

    /// Loads `path` if it exists, otherwise returns the empty config.
    pub fn load_optional(path: &Path) -> AppResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// See [`FileConfig::schema_dir`].
    pub schema_dir: Option<PathBuf>,
    /// See [`FileConfig::target`].
    pub target: Option<PathBuf>,
    /// See [`FileConfig::namespace`].
    pub namespace: Option<String>,
    /// See [`FileConfig::macro_name`].
    pub macro_name: Option<String>,
    /// See [`FileConfig::extension`].
    pub extension: Option<String>,
    /// See [`FileConfig::prefix_file`].
    pub prefix_file: Option<PathBuf>,
}

/// Fully resolved settings for one schema test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTestSettings {
    /// Directory scanned.
    pub schema_dir: PathBuf,
    /// File to overwrite, or `None` for stdout.
    pub target: Option<PathBuf>,
    /// Statement template.
    pub template: TestTemplate,
    /// Artifact extension without the dot.
    pub extension: String,
    /// Replacement prefix file.
    pub prefix_file: Option<PathBuf>,
}

impl SchemaTestSettings {
    /// Merges command line overrides over the file config over the defaults.
    pub fn resolve(file: FileConfig, cli: Overrides) -> Self {
        Self {
            schema_dir: cli
                .schema_dir
                .or(file.schema_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_DIR)),
            target: cli.target.or(file.target),
            template: TestTemplate {
                macro_name: cli
                    .macro_name
                    .or(file.macro_name)
                    .unwrap_or_else(|| DEFAULT_MACRO.to_string()),
                namespace: cli
                    .namespace
                    .or(file.namespace)
                    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            },
            extension: cli
                .extension
                .or(file.extension)
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            prefix_file: cli.prefix_file.or(file.prefix_file),
        }
    }

    /// The text preserved at the top of the target file.
    ///
    /// # Errors
    ///
    /// * `AppError::Io` if the configured prefix file cannot be read.
    pub fn prefix(&self) -> AppResult<String> {
        match &self.prefix_file {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => Ok(self.template.default_prefix()),
        }
    }
}
