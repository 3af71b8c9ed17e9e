/// CLI configuration
use crate::error::{CliError, Result};
use mixtape_core::{IdGenerator, SequentialIdGenerator, UuidGenerator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "mixtape.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub ids: IdSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdSettings {
    #[serde(default)]
    pub generator: IdGeneratorKind,

    /// Prefix used by the sequential generator
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdGeneratorKind {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Sort songs right after loading a manifest
    #[serde(default)]
    pub sort_on_load: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `mixtape.toml` in the working
    /// directory is used when present. Environment variables prefixed with
    /// `MIXTAPE_` override file values, with `__` between nested keys
    /// (`MIXTAPE_OUTPUT__FORMAT=json`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MIXTAPE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.ids.generator == IdGeneratorKind::Sequential && self.ids.prefix.is_empty() {
            return Err(CliError::Config(
                "ids.prefix must not be empty for the sequential generator".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the id generator selected by `ids.generator`
    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.ids.generator {
            IdGeneratorKind::Uuid => Arc::new(UuidGenerator),
            IdGeneratorKind::Sequential => {
                Arc::new(SequentialIdGenerator::new(self.ids.prefix.clone()))
            }
        }
    }
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            generator: IdGeneratorKind::default(),
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "id".to_string()
}
