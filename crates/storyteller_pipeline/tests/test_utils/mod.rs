//! Mock collaborators for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use image::DynamicImage;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use storyteller_core::{AudioClip, Seed, SegmentPaths};
use storyteller_error::{
    MediaError, MediaErrorKind, ModelsError, ModelsErrorKind, StoryTellerResult,
};
use storyteller_interface::{
    ImagePainter, PaintRequest, SpeechSynthesizer, TextWriter, VideoTool, WriteRequest,
};
use storyteller_pipeline::{ModelFacade, SentenceSplitter, StoryTeller};

/// Writer returning a fixed story, or failing when `story` is `None`.
pub struct ScriptedWriter {
    story: Option<String>,
    pub requests: Mutex<Vec<WriteRequest>>,
}

impl ScriptedWriter {
    pub fn new(story: &str) -> Self {
        Self {
            story: Some(story.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            story: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextWriter for ScriptedWriter {
    async fn write(&self, req: &WriteRequest) -> StoryTellerResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        self.story.clone().ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::Api {
                status: 500,
                message: "writer offline".to_string(),
            })
            .into()
        })
    }

    fn model_name(&self) -> &str {
        "scripted-writer"
    }
}

/// Writer sampling sentences from a fixed vocabulary with a seeded RNG.
pub struct SeededWriter;

const VOCABULARY: [&str; 8] = [
    "The unicorn ran.",
    "A storm gathered.",
    "Night fell quickly.",
    "The river sang.",
    "Dragons slept nearby.",
    "A child laughed.",
    "The moon rose.",
    "Snow covered everything.",
];

#[async_trait]
impl TextWriter for SeededWriter {
    async fn write(&self, req: &WriteRequest) -> StoryTellerResult<String> {
        let mut rng = StdRng::seed_from_u64(req.seed().value());
        let picked: Vec<&str> = (0..*req.max_new_tokens())
            .filter_map(|_| VOCABULARY.choose(&mut rng).copied())
            .collect();
        Ok(format!(" {}", picked.join(" ")))
    }

    fn model_name(&self) -> &str {
        "seeded-writer"
    }
}

/// Painter failing for prompts containing any of `fail_on`.
#[derive(Default)]
pub struct MockPainter {
    fail_on: Vec<String>,
    pub requests: Mutex<Vec<PaintRequest>>,
}

impl MockPainter {
    pub fn failing_on(fail_on: &[&str]) -> Self {
        Self {
            fail_on: fail_on.iter().map(|s| s.to_string()).collect(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImagePainter for MockPainter {
    async fn paint(&self, req: &PaintRequest) -> StoryTellerResult<DynamicImage> {
        self.requests.lock().unwrap().push(req.clone());
        if self.fail_on.iter().any(|f| req.prompt().contains(f.as_str())) {
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: 503,
                message: "painter overloaded".to_string(),
            })
            .into());
        }
        Ok(DynamicImage::ImageRgb8(image::RgbImage::new(4, 4)))
    }

    fn model_name(&self) -> &str {
        "mock-painter"
    }
}

/// Speaker producing 1.5 s of silence at 16 kHz.
#[derive(Default)]
pub struct MockSpeaker {
    pub texts: Mutex<Vec<String>>,
}

#[async_trait]
impl SpeechSynthesizer for MockSpeaker {
    async fn speak(&self, text: &str) -> StoryTellerResult<AudioClip> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(AudioClip::new(vec![0; 24_000], 16_000))
    }

    fn model_name(&self) -> &str {
        "mock-speaker"
    }
}

/// Video tool writing placeholder files and recording its calls.
#[derive(Default)]
pub struct FakeVideoTool {
    fail_mux_for: Vec<usize>,
    pub muxed: Mutex<Vec<(PathBuf, u64)>>,
    pub concats: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeVideoTool {
    pub fn failing_mux_for(indices: &[usize]) -> Self {
        Self {
            fail_mux_for: indices.to_vec(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl VideoTool for FakeVideoTool {
    async fn mux_segment(&self, paths: &SegmentPaths, duration_secs: u64) -> StoryTellerResult<()> {
        let index: usize = paths
            .video()
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse().ok())
            .unwrap_or(usize::MAX);
        if self.fail_mux_for.contains(&index) {
            return Err(MediaError::new(MediaErrorKind::ToolFailed {
                tool: "ffmpeg".to_string(),
                code: Some(1),
                stderr: "Invalid data found when processing input".to_string(),
            })
            .into());
        }
        for input in [paths.image(), paths.audio(), paths.subtitle()] {
            assert!(input.exists(), "missing mux input {}", input.display());
        }
        std::fs::write(paths.video(), b"clip").map_err(|e| MediaError::io(paths.video().display(), e))?;
        self.muxed
            .lock()
            .unwrap()
            .push((paths.video().clone(), duration_secs));
        Ok(())
    }

    async fn concat(&self, manifest: &Path, output: &Path) -> StoryTellerResult<()> {
        std::fs::write(output, b"story").map_err(|e| MediaError::io(output.display(), e))?;
        self.concats
            .lock()
            .unwrap()
            .push((manifest.to_path_buf(), output.to_path_buf()));
        Ok(())
    }

    fn name(&self) -> &str {
        "fake-video"
    }
}

/// Collaborators wired into a `StoryTeller`, kept for inspection.
pub struct Harness {
    pub writer: Arc<ScriptedWriter>,
    pub painter: Arc<MockPainter>,
    pub speaker: Arc<MockSpeaker>,
    pub video: Arc<FakeVideoTool>,
    pub teller: StoryTeller,
}

pub fn harness(writer: ScriptedWriter, painter: MockPainter, video: FakeVideoTool) -> Harness {
    let writer = Arc::new(writer);
    let painter = Arc::new(painter);
    let speaker = Arc::new(MockSpeaker::default());
    let video = Arc::new(video);

    let models = ModelFacade::new(
        writer.clone(),
        painter.clone(),
        speaker.clone(),
        50,
        Seed::new(42),
    );
    let teller = StoryTeller::new(models, video.clone(), SentenceSplitter::default());

    Harness {
        writer,
        painter,
        speaker,
        video,
        teller,
    }
}
