//! Inference endpoint configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default HuggingFace Inference API base URL.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding the inference API token.
pub const API_TOKEN_VAR: &str = "HUGGINGFACE_API_TOKEN";

/// Where model requests are sent.
///
/// A compute target (the `writer_device` / `painter_device` configuration
/// values) selects an endpoint from `devices`. Targets without an entry are
/// served by `base_url`.
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "https://api-inference.huggingface.co/models"
/// wait_for_model = true
///
/// [backend.devices]
/// "cuda:0" = "http://gpu-host:8080/models"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; the model identifier is appended as a path segment
    base_url: String,
    /// Compute target to base URL overrides
    devices: BTreeMap<String, String>,
    /// Ask the API to block while a cold model loads instead of returning 503
    wait_for_model: bool,
    /// Bearer token, read from `HUGGINGFACE_API_TOKEN`
    #[serde(skip)]
    api_token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            devices: BTreeMap::new(),
            wait_for_model: true,
            api_token: None,
        }
    }
}

impl BackendConfig {
    /// Create a backend rooted at `base_url` with no device overrides.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Route `device` to `base_url`.
    pub fn with_device(mut self, device: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.devices.insert(device.into(), base_url.into());
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    /// Read the API token from `HUGGINGFACE_API_TOKEN`, if set.
    pub fn with_env_token(self) -> Self {
        let token = std::env::var(API_TOKEN_VAR).ok().filter(|t| !t.is_empty());
        self.with_api_token(token)
    }

    /// Set whether cold models should be awaited.
    pub fn with_wait_for_model(mut self, wait: bool) -> Self {
        self.wait_for_model = wait;
        self
    }

    /// Base URL serving the given compute target.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_core::BackendConfig;
    ///
    /// let backend = BackendConfig::new("https://hub.example/models")
    ///     .with_device("cuda:0", "http://gpu:8080/models");
    /// assert_eq!(backend.endpoint_for("cuda:0"), "http://gpu:8080/models");
    /// assert_eq!(backend.endpoint_for("cpu"), "https://hub.example/models");
    /// ```
    pub fn endpoint_for(&self, device: &str) -> &str {
        self.devices
            .get(device)
            .map_or(self.base_url.as_str(), String::as_str)
    }
}
