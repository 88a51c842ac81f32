//! Text generation backend.

use crate::huggingface::{
    HuggingFaceClient, TextGeneration, TextGenerationParameters, TextGenerationRequest,
};
use crate::validate_model_id;
use async_trait::async_trait;
use storyteller_error::{ModelsError, ModelsErrorKind, ModelsResult, StoryTellerResult};
use storyteller_interface::{TextWriter, WriteRequest};
use tracing::{debug, error, instrument};

/// Text generator served by the HuggingFace `text-generation` task.
#[derive(Debug, Clone)]
pub struct HuggingFaceWriter {
    client: HuggingFaceClient,
    model: String,
    url: String,
}

impl HuggingFaceWriter {
    /// Creates a writer for `model` served under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::InvalidModelId`] if the identifier is malformed.
    #[instrument(skip_all, fields(model = %model, base_url = %base_url))]
    pub fn new(client: HuggingFaceClient, model: &str, base_url: &str) -> ModelsResult<Self> {
        validate_model_id(model)?;
        let url = HuggingFaceClient::model_url(base_url, model);

        debug!(model = %model, url = %url, "Created HuggingFace writer");

        Ok(Self {
            client,
            model: model.to_string(),
            url,
        })
    }

    fn parse_generation(body: &[u8]) -> ModelsResult<String> {
        let response_json: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
            error!(error = ?e, "Failed to parse JSON");
            ModelsError::new(ModelsErrorKind::ResponseConversion(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        // Inference API returns a list; text-generation-inference a bare object
        let generation = match response_json {
            serde_json::Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            serde_json::Value::Array(_) => {
                return Err(ModelsError::new(ModelsErrorKind::ResponseConversion(
                    "Empty array response".to_string(),
                )));
            }
            other => other,
        };

        let generation: TextGeneration = serde_json::from_value(generation).map_err(|e| {
            ModelsError::new(ModelsErrorKind::ResponseConversion(format!(
                "Missing generated_text in response: {}",
                e
            )))
        })?;

        Ok(generation.generated_text().clone())
    }
}

#[async_trait]
impl TextWriter for HuggingFaceWriter {
    #[instrument(skip(self, req), fields(model = %self.model, seed = %req.seed()))]
    async fn write(&self, req: &WriteRequest) -> StoryTellerResult<String> {
        let parameters = TextGenerationParameters::builder()
            .max_new_tokens(*req.max_new_tokens())
            .seed(Some(req.seed().value()))
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        let body = TextGenerationRequest::new(req.prompt(), parameters, self.client.options());

        let response = self
            .client
            .post(&self.url, &body, "application/json")
            .await?;
        let bytes = HuggingFaceClient::bytes(response).await?;
        let generated = Self::parse_generation(&bytes)?;

        // Servers that ignore return_full_text echo the prompt back
        let continuation = generated
            .strip_prefix(req.prompt().as_str())
            .unwrap_or(&generated)
            .to_string();

        debug!(chars = continuation.len(), "Story text generated");
        Ok(continuation)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
