//! Text-to-image backend.

use crate::huggingface::{HuggingFaceClient, ImageParameters, ImageRequest};
use crate::validate_model_id;
use async_trait::async_trait;
use image::DynamicImage;
use storyteller_error::{ModelsError, ModelsErrorKind, ModelsResult, StoryTellerResult};
use storyteller_interface::{ImagePainter, PaintRequest};
use tracing::{debug, instrument};

/// Image generator served by the HuggingFace `text-to-image` task.
#[derive(Debug, Clone)]
pub struct HuggingFacePainter {
    client: HuggingFaceClient,
    model: String,
    url: String,
}

impl HuggingFacePainter {
    /// Creates a painter for `model` served under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::InvalidModelId`] if the identifier is malformed.
    #[instrument(skip_all, fields(model = %model, base_url = %base_url))]
    pub fn new(client: HuggingFaceClient, model: &str, base_url: &str) -> ModelsResult<Self> {
        validate_model_id(model)?;
        let url = HuggingFaceClient::model_url(base_url, model);

        debug!(model = %model, url = %url, "Created HuggingFace painter");

        Ok(Self {
            client,
            model: model.to_string(),
            url,
        })
    }
}

#[async_trait]
impl ImagePainter for HuggingFacePainter {
    #[instrument(skip(self, req), fields(model = %self.model, seed = %req.seed()))]
    async fn paint(&self, req: &PaintRequest) -> StoryTellerResult<DynamicImage> {
        let parameters = ImageParameters::builder()
            .seed(Some(req.seed().value()))
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        let body = ImageRequest::new(req.prompt(), parameters, self.client.options());

        let response = self.client.post(&self.url, &body, "image/png").await?;
        let bytes = HuggingFaceClient::bytes(response).await?;

        let image = image::load_from_memory(&bytes).map_err(|e| {
            ModelsError::new(ModelsErrorKind::UnsupportedMedia(format!(
                "Failed to decode image: {}",
                e
            )))
        })?;

        debug!(
            width = image.width(),
            height = image.height(),
            "Image generated"
        );
        Ok(image)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
