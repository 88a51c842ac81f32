//! Inputs to a single pipeline run.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the ffmpeg concat manifest written into the output directory.
pub const MANIFEST_FILE_NAME: &str = "files.txt";

/// Name of the concatenated video written into the output directory.
pub const FINAL_VIDEO_FILE_NAME: &str = "out.mp4";

/// Arguments to `generate`.
///
/// # Examples
///
/// ```
/// use storyteller_core::StoryRequest;
///
/// let request = StoryRequest::builder()
///     .writer_prompt("A fox crossed the river.")
///     .num_images(3usize)
///     .output_dir("story")
///     .build()
///     .unwrap();
/// assert_eq!(request.painter_prompt_prefix(), "Beautiful painting");
/// assert_eq!(request.manifest_path(), std::path::Path::new("story/files.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
pub struct StoryRequest {
    /// Prompt given to the writer
    writer_prompt: String,
    /// Prefix prepended to every sentence to form the image prompt
    painter_prompt_prefix: String,
    /// Upper bound on the number of sentences turned into segments
    num_images: usize,
    /// Directory receiving every artifact of the run
    output_dir: PathBuf,
}

impl Default for StoryRequest {
    fn default() -> Self {
        Self {
            writer_prompt: "Once upon a time, unicorns roamed the Earth.".to_string(),
            painter_prompt_prefix: "Beautiful painting".to_string(),
            num_images: 10,
            output_dir: PathBuf::from("out"),
        }
    }
}

impl StoryRequest {
    /// Assemble a request from all four inputs.
    pub fn new(
        writer_prompt: impl Into<String>,
        painter_prompt_prefix: impl Into<String>,
        num_images: usize,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            writer_prompt: writer_prompt.into(),
            painter_prompt_prefix: painter_prompt_prefix.into(),
            num_images,
            output_dir: output_dir.into(),
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Path of the concat manifest for this run.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE_NAME)
    }

    /// Path of the final video for this run.
    pub fn final_video_path(&self) -> PathBuf {
        self.output_dir.join(FINAL_VIDEO_FILE_NAME)
    }
}
