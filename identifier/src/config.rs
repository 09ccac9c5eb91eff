use std::env;
use std::path::Path;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::File;
use serde::Deserialize;

use crate::registry::IdentifierOptions;

pub use config::FileFormat;

/// Declarative identifier chain configuration.
///
/// `identifiers` is ordered: the first entry is the first identifier tried.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct IdentificationConfig {
    #[serde(default)]
    pub identifiers: Vec<IdentifierConfig>,
}

/// One identifier entry.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IdentifierConfig {
    /// Registry name, also used as key in error sets
    pub name: String,

    /// Type name resolved through the identifier factory
    #[serde(rename = "type")]
    pub type_name: String,

    /// Constructor options, passed through untouched
    #[serde(default)]
    pub options: IdentifierOptions,
}

impl IdentificationConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 2. Default config file (config/identifiers.toml)
    ///
    /// `RUN_MODE` defaults to `development`. The identifier list is ordered,
    /// so a file defining `identifiers` replaces the whole list of the files
    /// below it instead of merging entries.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Load configuration from `directory` for the given run mode.
    ///
    /// Both files are optional; with neither present the chain is empty.
    ///
    /// # Errors
    /// * `ConfigError` - A file is malformed or does not match the shape
    pub fn load_from(directory: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let default_file = directory.join("identifiers");
        let run_mode_file = directory.join(run_mode);

        let configuration = ConfigBuilder::builder()
            .add_source(File::from(default_file).required(false))
            .add_source(File::from(run_mode_file).required(false))
            .build()?;

        tracing::debug!(
            directory = %directory.display(),
            run_mode = %run_mode,
            "Identifier configuration loaded"
        );

        configuration.try_deserialize()
    }

    /// Parse configuration from an in-memory document.
    ///
    /// # Arguments
    /// * `contents` - Configuration document
    /// * `format` - Document format (TOML, JSON, YAML, ...)
    ///
    /// # Errors
    /// * `ConfigError` - Document is malformed or does not match the shape
    pub fn from_str(contents: &str, format: FileFormat) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(contents, format))
            .build()?
            .try_deserialize()
    }

    /// Registry names in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|entry| entry.name.as_str())
    }
}
