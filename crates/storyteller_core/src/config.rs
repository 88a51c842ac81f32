//! StoryTeller configuration.
//!
//! Configuration is layered, lowest precedence first:
//! - Bundled defaults (include_str! from storyteller.toml)
//! - A TOML file (`--config <path>`, or ./storyteller.toml when present)
//! - `STORYTELLER_*` environment variables (`__` separates nested keys)
//! - Command-line overrides

use crate::BackendConfig;
use config::{Config, Environment, File, FileFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyteller_error::{ConfigError, StoryTellerResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../storyteller.toml");
const LOCAL_CONFIG_FILE: &str = "storyteller.toml";
const ENV_PREFIX: &str = "STORYTELLER";

/// Model identifiers and compute targets.
///
/// Created once at startup and read-only afterwards. Identifiers are opaque
/// here; the model backends reject ones they cannot resolve.
///
/// # Examples
///
/// ```
/// use storyteller_core::StoryTellerConfig;
///
/// let config = StoryTellerConfig::default();
/// assert_eq!(*config.max_new_tokens(), 50);
/// assert_eq!(config.writer(), "gpt2");
///
/// let custom = StoryTellerConfig::builder()
///     .writer("distilgpt2")
///     .max_new_tokens(80u32)
///     .build()
///     .unwrap();
/// assert_eq!(custom.writer(), "distilgpt2");
/// assert_eq!(custom.painter(), config.painter());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct StoryTellerConfig {
    /// Maximum number of tokens for text generation
    max_new_tokens: u32,
    /// Model used for writing the story
    writer: String,
    /// Model used for generating images
    painter: String,
    /// Model used for text-to-speech synthesis
    speaker: String,
    /// Compute target for the writer model
    writer_device: String,
    /// Compute target for the painter model
    painter_device: String,
}

impl Default for StoryTellerConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 50,
            writer: "gpt2".to_string(),
            painter: "stabilityai/stable-diffusion-2".to_string(),
            speaker: "espnet/kan-bayashi_ljspeech_vits".to_string(),
            writer_device: "auto".to_string(),
            painter_device: "auto".to_string(),
        }
    }
}

impl StoryTellerConfig {
    /// Creates a new config builder.
    pub fn builder() -> StoryTellerConfigBuilder {
        StoryTellerConfigBuilder::default()
    }
}

/// Command-line overrides, one optional value per configuration field.
///
/// With the `cli` feature this derives `clap::Args`, so every configuration
/// field becomes a flag typed after the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ConfigOverrides {
    /// Maximum number of tokens for text generation
    #[cfg_attr(feature = "cli", arg(long, alias = "max_new_tokens"))]
    pub max_new_tokens: Option<u32>,
    /// Model used for writing the story
    #[cfg_attr(feature = "cli", arg(long))]
    pub writer: Option<String>,
    /// Model used for generating images
    #[cfg_attr(feature = "cli", arg(long))]
    pub painter: Option<String>,
    /// Model used for text-to-speech synthesis
    #[cfg_attr(feature = "cli", arg(long))]
    pub speaker: Option<String>,
    /// Compute target for the writer model
    #[cfg_attr(feature = "cli", arg(long, alias = "writer_device"))]
    pub writer_device: Option<String>,
    /// Compute target for the painter model
    #[cfg_attr(feature = "cli", arg(long, alias = "painter_device"))]
    pub painter_device: Option<String>,
}

/// Fully resolved settings: model configuration plus backend routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Model identifiers and compute targets
    config: StoryTellerConfig,
    /// Inference endpoint configuration
    backend: BackendConfig,
}

impl Settings {
    /// Assemble settings from already-built parts.
    pub fn new(config: StoryTellerConfig, backend: BackendConfig) -> Self {
        Self { config, backend }
    }

    /// Split into configuration and backend.
    pub fn into_parts(self) -> (StoryTellerConfig, BackendConfig) {
        (self.config, self.backend)
    }

    /// Load settings from every configuration layer.
    ///
    /// `path`, when given, must exist. Without it, `./storyteller.toml` is
    /// read if present.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file cannot be parsed, a value has
    /// the wrong type, or `max_new_tokens` is zero.
    #[instrument(skip(overrides))]
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> StoryTellerResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
            }
            None => builder.add_source(File::new(LOCAL_CONFIG_FILE, FileFormat::Toml).required(false)),
        };

        builder = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("max_new_tokens", overrides.max_new_tokens.map(i64::from))
            .map_err(config_error)?
            .set_override_option("writer", overrides.writer.clone())
            .map_err(config_error)?
            .set_override_option("painter", overrides.painter.clone())
            .map_err(config_error)?
            .set_override_option("speaker", overrides.speaker.clone())
            .map_err(config_error)?
            .set_override_option("writer_device", overrides.writer_device.clone())
            .map_err(config_error)?
            .set_override_option("painter_device", overrides.painter_device.clone())
            .map_err(config_error)?;

        let layered = builder.build().map_err(config_error)?;

        let config: StoryTellerConfig = layered.clone().try_deserialize().map_err(config_error)?;
        let backend: BackendConfig = layered.get("backend").map_err(config_error)?;
        let backend = backend.with_env_token();

        if config.max_new_tokens == 0 {
            return Err(ConfigError::new("max_new_tokens must be a positive integer").into());
        }

        debug!(
            writer = %config.writer,
            painter = %config.painter,
            speaker = %config.speaker,
            base_url = %backend.base_url(),
            "Configuration loaded"
        );

        Ok(Self { config, backend })
    }
}

fn config_error(err: config::ConfigError) -> ConfigError {
    ConfigError::new(err.to_string())
}
