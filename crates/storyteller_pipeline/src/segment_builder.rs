//! Turns one sentence into a captioned, narrated clip.

use crate::ModelFacade;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storyteller_core::{Segment, SegmentOutcome, SegmentPaths, SkippedSentence, SubtitleTiming};
use storyteller_error::StoryTellerResult;
use storyteller_interface::VideoTool;
use storyteller_media::{SubtitleCue, write_png, write_srt, write_wav};
use tracing::{debug, error, info, instrument};

/// Image prompt for a sentence.
///
/// # Examples
///
/// ```
/// use storyteller_pipeline::image_prompt;
///
/// assert_eq!(
///     image_prompt("Beautiful painting", "A unicorn grazed."),
///     "Beautiful painting: A unicorn grazed."
/// );
/// ```
pub fn image_prompt(prefix: &str, sentence: &str) -> String {
    format!("{}: {}", prefix, sentence)
}

/// Produces one segment per sentence inside an output directory.
#[derive(Clone)]
pub struct SegmentBuilder {
    models: ModelFacade,
    video: Arc<dyn VideoTool>,
    painter_prompt_prefix: String,
    output_dir: PathBuf,
}

impl std::fmt::Debug for SegmentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentBuilder")
            .field("models", &self.models)
            .field("video", &self.video.name())
            .field("painter_prompt_prefix", &self.painter_prompt_prefix)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl SegmentBuilder {
    /// Create a builder writing into `output_dir`.
    pub fn new(
        models: ModelFacade,
        video: Arc<dyn VideoTool>,
        painter_prompt_prefix: impl Into<String>,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            models,
            video,
            painter_prompt_prefix: painter_prompt_prefix.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Produce the segment for sentence `index`.
    ///
    /// Paints `"<prefix>: <sentence>"`, narrates the sentence, writes
    /// `<index>.png`, `<index>.wav` and `<index>.srt` (one caption spanning
    /// the narration, rounded up to whole seconds) and muxes them into
    /// `<index>.mp4`.
    ///
    /// # Errors
    ///
    /// Returns the first model, file or tool failure.
    #[instrument(skip(self, sentence))]
    pub async fn build(&self, index: usize, sentence: &str) -> StoryTellerResult<Segment> {
        let paths = SegmentPaths::for_index(&self.output_dir, index);
        let prompt = image_prompt(&self.painter_prompt_prefix, sentence);

        let image = self
            .models
            .paint(&prompt, self.models.seed().for_segment(index))
            .await?;
        let audio = self.models.speak(sentence).await?;

        let duration = audio.whole_seconds();
        let timing = SubtitleTiming::covering(audio.duration_secs());
        debug!(
            duration_secs = duration,
            exact_secs = audio.duration_secs(),
            "Narration synthesized"
        );

        let cue = SubtitleCue::new(sentence, SubtitleTiming::covering(duration as f64));
        write_srt(paths.subtitle(), &[cue]).await?;
        write_png(paths.image(), &image).await?;
        write_wav(paths.audio(), &audio).await?;

        self.video.mux_segment(&paths, duration).await?;

        info!(video = %paths.video().display(), "Segment produced");
        Ok(Segment::new(index, sentence, paths, timing))
    }

    /// Produce the segment for sentence `index`, recording a failure as a skip.
    pub async fn outcome(&self, index: usize, sentence: &str) -> SegmentOutcome {
        match self.build(index, sentence).await {
            Ok(segment) => SegmentOutcome::Produced(segment),
            Err(e) => {
                error!(
                    sentence = index + 1,
                    error = %e,
                    "Error generating video for sentence {}",
                    index + 1
                );
                SegmentOutcome::Skipped(SkippedSentence::new(index, sentence, e.to_string()))
            }
        }
    }
}
