//! Shared HTTP client for the HuggingFace Inference API.

use crate::huggingface::dto::{ApiErrorBody, HuggingFaceOptions};
use reqwest::{Client, Response, header};
use serde::Serialize;
use storyteller_core::BackendConfig;
use storyteller_error::{ModelsError, ModelsErrorKind, ModelsResult};
use tracing::{debug, error, instrument};

/// HTTP client shared by the writer, painter and speaker backends.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    http: Client,
    api_token: Option<String>,
    wait_for_model: bool,
}

impl HuggingFaceClient {
    /// Creates a client from backend settings.
    pub fn new(backend: &BackendConfig) -> Self {
        Self {
            http: Client::new(),
            api_token: backend.api_token().clone(),
            wait_for_model: *backend.wait_for_model(),
        }
    }

    /// Request options derived from the backend settings.
    pub fn options(&self) -> HuggingFaceOptions {
        HuggingFaceOptions::new(self.wait_for_model)
    }

    /// URL of `model` under `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_models::HuggingFaceClient;
    ///
    /// assert_eq!(
    ///     HuggingFaceClient::model_url("http://localhost:8080/models/", "gpt2"),
    ///     "http://localhost:8080/models/gpt2"
    /// );
    /// ```
    pub fn model_url(base_url: &str, model: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), model)
    }

    /// POST a JSON body and return the successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::Http`] if the request cannot be sent and
    /// [`ModelsErrorKind::Api`] for non-success statuses.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn post<B>(&self, url: &str, body: &B, accept: &str) -> ModelsResult<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut request = self
            .http
            .post(url)
            .header(header::ACCEPT, accept)
            .json(body);
        if let Some(token) = &self.api_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        debug!(url = %url, accept = %accept, "Sending request to HuggingFace");

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            error!(status = %status, error = %message, "API error");

            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(response)
    }

    /// Read the full response body.
    pub(crate) async fn bytes(response: Response) -> ModelsResult<Vec<u8>> {
        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            ModelsError::new(ModelsErrorKind::Http(format!(
                "Failed to read response: {}",
                e
            )))
        })?;
        debug!(response_len = bytes.len(), "Received response");
        Ok(bytes.to_vec())
    }
}
