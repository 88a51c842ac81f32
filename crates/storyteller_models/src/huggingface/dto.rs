//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request options shared by every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct HuggingFaceOptions {
    /// Block until a cold model is loaded instead of failing with 503
    wait_for_model: bool,
    /// Allow the API to answer from its response cache
    use_cache: bool,
}

impl HuggingFaceOptions {
    /// Options for a request; the cache is disabled so seeds take effect.
    pub fn new(wait_for_model: bool) -> Self {
        Self {
            wait_for_model,
            use_cache: false,
        }
    }
}

/// Text generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct TextGenerationParameters {
    /// Maximum tokens to generate
    max_new_tokens: u32,
    /// Include the prompt in the returned text
    #[builder(default = "false")]
    return_full_text: bool,
    /// Sample instead of greedy decoding
    #[builder(default = "true")]
    do_sample: bool,
    /// Sampling seed
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

impl TextGenerationParameters {
    /// Creates a new builder for `TextGenerationParameters`.
    pub fn builder() -> TextGenerationParametersBuilder {
        TextGenerationParametersBuilder::default()
    }
}

/// Body of a text-generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextGenerationRequest {
    /// Prompt text
    inputs: String,
    /// Generation parameters
    parameters: TextGenerationParameters,
    /// Request options
    options: HuggingFaceOptions,
}

impl TextGenerationRequest {
    /// Assemble a request body.
    pub fn new(
        inputs: impl Into<String>,
        parameters: TextGenerationParameters,
        options: HuggingFaceOptions,
    ) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
            options,
        }
    }
}

/// One text-generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextGeneration {
    /// Generated text
    generated_text: String,
}

/// Text-to-image parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder, Getters)]
#[builder(default, setter(into))]
pub struct ImageParameters {
    /// Sampling seed
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    /// Concepts the image should avoid
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<String>,
}

impl ImageParameters {
    /// Creates a new builder for `ImageParameters`.
    pub fn builder() -> ImageParametersBuilder {
        ImageParametersBuilder::default()
    }
}

/// Body of a text-to-image request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageRequest {
    /// Image prompt
    inputs: String,
    /// Generation parameters
    parameters: ImageParameters,
    /// Request options
    options: HuggingFaceOptions,
}

impl ImageRequest {
    /// Assemble a request body.
    pub fn new(
        inputs: impl Into<String>,
        parameters: ImageParameters,
        options: HuggingFaceOptions,
    ) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
            options,
        }
    }
}

/// Body of a text-to-speech request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub(crate) struct SpeechRequest {
    inputs: String,
    options: HuggingFaceOptions,
}

impl SpeechRequest {
    pub(crate) fn new(inputs: impl Into<String>, options: HuggingFaceOptions) -> Self {
        Self {
            inputs: inputs.into(),
            options,
        }
    }
}

/// Error body returned by the API alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) error: String,
}
