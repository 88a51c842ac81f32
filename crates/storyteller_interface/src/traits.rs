//! Trait definitions for model backends and media tools.

use crate::{PaintRequest, WriteRequest};
use async_trait::async_trait;
use image::DynamicImage;
use std::path::Path;
use storyteller_core::{AudioClip, SegmentPaths};
use storyteller_error::StoryTellerResult;

/// A text generator continuing a prompt.
#[async_trait]
pub trait TextWriter: Send + Sync {
    /// Generate a continuation of the prompt.
    ///
    /// Returns only the newly generated text, never the prompt itself.
    async fn write(&self, req: &WriteRequest) -> StoryTellerResult<String>;

    /// Model identifier (e.g., "gpt2").
    fn model_name(&self) -> &str;
}

/// An image generator.
#[async_trait]
pub trait ImagePainter: Send + Sync {
    /// Generate one image for the prompt.
    async fn paint(&self, req: &PaintRequest) -> StoryTellerResult<DynamicImage>;

    /// Model identifier (e.g., "stabilityai/stable-diffusion-2").
    fn model_name(&self) -> &str;
}

/// A text-to-speech synthesizer.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for the text at the synthesizer's fixed sample rate.
    async fn speak(&self, text: &str) -> StoryTellerResult<AudioClip>;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// External tool assembling video files.
#[async_trait]
pub trait VideoTool: Send + Sync {
    /// Mux the image, audio and subtitle at `paths` into `paths.video()`.
    ///
    /// `duration_secs` is the length of the audio track in whole seconds.
    async fn mux_segment(&self, paths: &SegmentPaths, duration_secs: u64)
    -> StoryTellerResult<()>;

    /// Concatenate the clips listed in `manifest` into `output`.
    async fn concat(&self, manifest: &Path, output: &Path) -> StoryTellerResult<()>;

    /// Executable name (e.g., "ffmpeg").
    fn name(&self) -> &str;
}
