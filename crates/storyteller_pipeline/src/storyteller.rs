//! Pipeline driver.

use crate::{ModelFacade, SegmentBuilder, SentenceSplitter, check_preconditions, write_manifest};
use std::sync::Arc;
use storyteller_core::{
    BackendConfig, Seed, Segment, SegmentOutcome, Settings, StoryReport, StoryRequest,
    StoryTellerConfig,
};
use storyteller_error::{MediaError, PipelineError, PipelineErrorKind, StoryTellerResult};
use storyteller_interface::VideoTool;
use tracing::{debug, info, instrument, warn};

/// Turns a prompt into a narrated slideshow video.
///
/// Holds the configured model backends, the video tool and the sentence
/// splitter. Construction is the only fallible setup step; afterwards every
/// call to [`generate`](Self::generate) is independent.
#[derive(Clone)]
pub struct StoryTeller {
    models: ModelFacade,
    video: Arc<dyn VideoTool>,
    splitter: SentenceSplitter,
}

impl std::fmt::Debug for StoryTeller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryTeller")
            .field("models", &self.models)
            .field("video", &self.video.name())
            .field("splitter", &self.splitter)
            .finish()
    }
}

impl StoryTeller {
    /// Assemble a pipeline from already-constructed parts.
    pub fn new(models: ModelFacade, video: Arc<dyn VideoTool>, splitter: SentenceSplitter) -> Self {
        Self {
            models,
            video,
            splitter,
        }
    }

    /// Check preconditions, then build the model backends from `settings`.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if `ffmpeg` is missing, `language` has no
    /// tokenizer, or a model identifier is invalid. Preconditions are
    /// checked before any backend is constructed.
    #[instrument(skip(settings))]
    pub fn load(settings: &Settings, seed: Seed, language: &str) -> StoryTellerResult<Self> {
        let (ffmpeg, splitter) = check_preconditions(language)?.into_parts();
        let models = ModelFacade::from_settings(settings, seed)?;
        Ok(Self::new(models, Arc::new(ffmpeg), splitter))
    }

    /// Default configuration, default seed, English sentences.
    ///
    /// The API token is read from `HUGGINGFACE_API_TOKEN`.
    pub fn from_default() -> StoryTellerResult<Self> {
        let settings = Settings::new(
            StoryTellerConfig::default(),
            BackendConfig::default().with_env_token(),
        );
        Self::load(&settings, Seed::default(), "english")
    }

    /// Sentence splitter in use.
    pub fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    /// Generate the story, one clip per sentence, and the final video.
    ///
    /// At most `num_images` sentences are used, in story order. A sentence
    /// whose clip cannot be produced is logged and skipped. The manifest is
    /// always written; `ffmpeg` concatenation only runs when at least one
    /// clip exists, so [`StoryReport::final_video`] is `None` when every
    /// sentence failed. A final video left in `output_dir` by an earlier run
    /// is deleted first.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created, the
    /// writer fails, the manifest cannot be written or concatenation fails.
    #[instrument(
        skip_all,
        fields(
            output_dir = %request.output_dir().display(),
            num_images = request.num_images()
        )
    )]
    pub async fn generate(&self, request: &StoryRequest) -> StoryTellerResult<StoryReport> {
        let output_dir = request.output_dir();
        tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
            PipelineError::new(PipelineErrorKind::OutputDirectory {
                path: output_dir.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let story = self.models.write(request.writer_prompt()).await?;
        let sentences: Vec<String> = self
            .splitter
            .split(&story)
            .into_iter()
            .take(*request.num_images())
            .collect();
        info!(sentences = sentences.len(), "Story written");

        let builder = SegmentBuilder::new(
            self.models.clone(),
            self.video.clone(),
            request.painter_prompt_prefix(),
            output_dir,
        );

        let mut outcomes = Vec::with_capacity(sentences.len());
        for (index, sentence) in sentences.iter().enumerate() {
            outcomes.push(builder.outcome(index, sentence).await);
        }

        let produced: Vec<Segment> = outcomes
            .iter()
            .filter_map(SegmentOutcome::segment)
            .cloned()
            .collect();

        let manifest_path = request.manifest_path();
        write_manifest(&manifest_path, &produced).await?;
        remove_stale_video(&request.final_video_path()).await?;

        let final_video = if produced.is_empty() {
            warn!("No segments were produced; skipping concatenation");
            None
        } else {
            let final_video = request.final_video_path();
            self.video.concat(&manifest_path, &final_video).await?;
            info!(
                video = %final_video.display(),
                segments = produced.len(),
                skipped = outcomes.len() - produced.len(),
                "Story video assembled"
            );
            Some(final_video)
        };

        Ok(StoryReport::new(
            story,
            sentences,
            outcomes,
            manifest_path,
            final_video,
        ))
    }
}

/// Delete a final video left by an earlier run into the same directory.
async fn remove_stale_video(path: &std::path::Path) -> StoryTellerResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!(video = %path.display(), "Removed previous final video");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MediaError::io(path.display(), e).into()),
    }
}
