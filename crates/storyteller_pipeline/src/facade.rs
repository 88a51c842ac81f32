//! Single entry point to the three model backends.

use image::DynamicImage;
use std::sync::Arc;
use storyteller_core::{AudioClip, Seed, Settings, StoryTellerConfig};
use storyteller_error::{ConfigError, ModelsError, ModelsErrorKind, StoryTellerResult};
use storyteller_interface::{
    ImagePainter, PaintRequest, SpeechSynthesizer, TextWriter, WriteRequest,
};
use storyteller_models::{
    HuggingFaceClient, HuggingFacePainter, HuggingFaceSpeaker, HuggingFaceWriter,
};
use tracing::{debug, info, instrument};

/// Writer, painter and speaker behind one-call-per-modality methods.
///
/// Calls are made one at a time with no retries; failures propagate.
#[derive(Clone)]
pub struct ModelFacade {
    writer: Arc<dyn TextWriter>,
    painter: Arc<dyn ImagePainter>,
    speaker: Arc<dyn SpeechSynthesizer>,
    max_new_tokens: u32,
    seed: Seed,
}

impl std::fmt::Debug for ModelFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelFacade")
            .field("writer", &self.writer.model_name())
            .field("painter", &self.painter.model_name())
            .field("speaker", &self.speaker.model_name())
            .field("max_new_tokens", &self.max_new_tokens)
            .field("seed", &self.seed)
            .finish()
    }
}

impl ModelFacade {
    /// Wrap already-constructed backends.
    pub fn new(
        writer: Arc<dyn TextWriter>,
        painter: Arc<dyn ImagePainter>,
        speaker: Arc<dyn SpeechSynthesizer>,
        max_new_tokens: u32,
        seed: Seed,
    ) -> Self {
        Self {
            writer,
            painter,
            speaker,
            max_new_tokens,
            seed,
        }
    }

    /// Build HuggingFace backends for the configured models.
    ///
    /// The writer and painter are routed by their compute targets; the
    /// speaker uses the backend's base URL.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if any model identifier is malformed or
    /// `max_new_tokens` is zero.
    #[instrument(skip_all, fields(writer = %settings.config().writer()))]
    pub fn from_settings(settings: &Settings, seed: Seed) -> StoryTellerResult<Self> {
        let config: &StoryTellerConfig = settings.config();
        let backend = settings.backend();

        if *config.max_new_tokens() == 0 {
            return Err(ConfigError::new("max_new_tokens must be a positive integer").into());
        }

        let client = HuggingFaceClient::new(backend);
        let writer = HuggingFaceWriter::new(
            client.clone(),
            config.writer(),
            backend.endpoint_for(config.writer_device()),
        )?;
        let painter = HuggingFacePainter::new(
            client.clone(),
            config.painter(),
            backend.endpoint_for(config.painter_device()),
        )?;
        let speaker = HuggingFaceSpeaker::new(client, config.speaker(), backend.base_url())?;

        info!(
            writer = %config.writer(),
            painter = %config.painter(),
            speaker = %config.speaker(),
            "Model backends ready"
        );

        Ok(Self::new(
            Arc::new(writer),
            Arc::new(painter),
            Arc::new(speaker),
            *config.max_new_tokens(),
            seed,
        ))
    }

    /// Seed handed to sampling backends.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Continue `prompt`, returning only the new text.
    #[instrument(skip(self, prompt), fields(model = %self.writer.model_name()))]
    pub async fn write(&self, prompt: &str) -> StoryTellerResult<String> {
        let request = WriteRequest::builder()
            .prompt(prompt)
            .max_new_tokens(self.max_new_tokens)
            .seed(self.seed)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        let story = self.writer.write(&request).await?;
        debug!(chars = story.len(), "Story written");
        Ok(story)
    }

    /// Paint one image for `prompt` with the given seed.
    #[instrument(skip(self, prompt), fields(model = %self.painter.model_name()))]
    pub async fn paint(&self, prompt: &str, seed: Seed) -> StoryTellerResult<DynamicImage> {
        let request = PaintRequest::builder()
            .prompt(prompt)
            .seed(seed)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        self.painter.paint(&request).await
    }

    /// Synthesize speech for `text`.
    #[instrument(skip(self, text), fields(model = %self.speaker.model_name()))]
    pub async fn speak(&self, text: &str) -> StoryTellerResult<AudioClip> {
        self.speaker.speak(text).await
    }
}
