//! Configuration file support for depgraph.
//!
//! Provides JSON-based configuration through `config.json` files: the file
//! schema, loading, merging with command-line arguments, and validation of
//! the effective settings.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::SourceMode;
use crate::cli::Args;
use crate::graph_exploration::domain::PackageName;
use crate::shared::error::GraphError;
use crate::shared::Result;

/// Top-level configuration file schema.
///
/// Every field is optional; command-line arguments override file values
/// during merging.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository: Option<String>,
    pub mode: Option<String>,
    pub filter_substring: Option<String>,
    pub output_file: Option<String>,
    pub ascii_tree: Option<bool>,
    pub max_depth: Option<i64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Load config from a path. A missing file silently yields the default
/// (empty) configuration; a file that exists but cannot be read or parsed
/// is an error.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_json::from_str(&content).map_err(|e| GraphError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging the config file with CLI arguments.
///
/// CLI values win over file values; `ascii_tree` is enabled if either side
/// enables it. Anything still unset falls back to defaults: nuget mode,
/// unlimited depth, no filter, `graph` as the output base name.
#[derive(Debug, Clone)]
pub struct Settings {
    pub package: PackageName,
    pub repository: String,
    pub mode: SourceMode,
    pub filter_substring: String,
    pub output_file: String,
    pub ascii_tree: bool,
    pub max_depth: usize,
}

impl Settings {
    /// Merges and validates the configuration sources.
    ///
    /// # Errors
    /// Returns an error if no package name is given, test mode lacks a
    /// repository path, the file's mode value is unknown, or max_depth
    /// is negative.
    pub fn from_sources(config: ConfigFile, args: &Args) -> Result<Self> {
        let package_raw = args
            .package
            .clone()
            .or(config.package_name)
            .unwrap_or_default();
        if package_raw.is_empty() {
            return Err(GraphError::MissingPackageName.into());
        }
        let package = PackageName::new(package_raw)?;

        let mode = match (args.mode, config.mode) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => {
                SourceMode::from_str(&raw).map_err(|_| GraphError::InvalidMode { value: raw })?
            }
            (None, None) => SourceMode::Nuget,
        };

        let repository = args
            .repository
            .clone()
            .or(config.repository)
            .unwrap_or_default();
        if mode == SourceMode::Test && repository.is_empty() {
            return Err(GraphError::MissingRepository.into());
        }

        let max_depth_raw = args.max_depth.or(config.max_depth).unwrap_or(0);
        if max_depth_raw < 0 {
            return Err(GraphError::InvalidMaxDepth {
                value: max_depth_raw,
            }
            .into());
        }

        Ok(Self {
            package,
            repository,
            mode,
            filter_substring: args.filter.clone().or(config.filter_substring).unwrap_or_default(),
            output_file: args
                .output
                .clone()
                .or(config.output_file)
                .unwrap_or_else(|| "graph".to_string()),
            ascii_tree: args.ascii_tree || config.ascii_tree.unwrap_or(false),
            max_depth: max_depth_raw as usize,
        })
    }

    /// Key-value view of the settings for the configuration report,
    /// in stable alphabetical key order.
    pub fn display_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ascii_tree", self.ascii_tree.to_string()),
            ("filter_substring", self.filter_substring.clone()),
            ("max_depth", self.max_depth.to_string()),
            ("mode", self.mode.to_string()),
            ("output_file", self.output_file.clone()),
            ("package_name", self.package.as_str().to_string()),
            ("repository", self.repository.clone()),
        ]
    }
}
