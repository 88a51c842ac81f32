//! Per-sentence artifacts and outcomes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File locations for one sentence's artifacts.
///
/// All four files live directly in the output directory and are named after
/// the zero-based sentence index.
///
/// # Examples
///
/// ```
/// use storyteller_core::SegmentPaths;
/// use std::path::Path;
///
/// let paths = SegmentPaths::for_index("out", 2);
/// assert_eq!(paths.image(), Path::new("out/2.png"));
/// assert_eq!(paths.video_file_name(), Some("2.mp4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SegmentPaths {
    image: PathBuf,
    audio: PathBuf,
    subtitle: PathBuf,
    video: PathBuf,
}

impl SegmentPaths {
    /// Paths for sentence `index` inside `dir`.
    pub fn for_index(dir: impl AsRef<Path>, index: usize) -> Self {
        let dir = dir.as_ref();
        Self {
            image: dir.join(format!("{index}.png")),
            audio: dir.join(format!("{index}.wav")),
            subtitle: dir.join(format!("{index}.srt")),
            video: dir.join(format!("{index}.mp4")),
        }
    }

    /// Bare file name of the video clip, as listed in the concat manifest.
    pub fn video_file_name(&self) -> Option<&str> {
        self.video.file_name().and_then(|name| name.to_str())
    }
}

/// Subtitle display window in seconds from the start of the clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct SubtitleTiming {
    start: f64,
    end: f64,
}

impl SubtitleTiming {
    /// Window from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window covering a clip of `duration` seconds.
    pub fn covering(duration: f64) -> Self {
        Self::new(0.0, duration)
    }
}

/// A sentence successfully turned into a video clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Segment {
    /// Zero-based position of the sentence in the story
    index: usize,
    /// Sentence text, also used as the caption
    sentence: String,
    /// Artifact locations
    paths: SegmentPaths,
    /// Narration window in exact seconds; the written SRT cue rounds its
    /// end up to whole seconds
    timing: SubtitleTiming,
}

impl Segment {
    /// Assemble a produced segment.
    pub fn new(
        index: usize,
        sentence: impl Into<String>,
        paths: SegmentPaths,
        timing: SubtitleTiming,
    ) -> Self {
        Self {
            index,
            sentence: sentence.into(),
            paths,
            timing,
        }
    }
}

/// A sentence that produced no segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SkippedSentence {
    index: usize,
    sentence: String,
    reason: String,
}

impl SkippedSentence {
    /// Record a skipped sentence with the failure message.
    pub fn new(index: usize, sentence: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            index,
            sentence: sentence.into(),
            reason: reason.into(),
        }
    }
}

/// Result of processing one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum SegmentOutcome {
    /// The sentence produced a clip
    Produced(Segment),
    /// The sentence failed and was left out
    Skipped(SkippedSentence),
}

impl SegmentOutcome {
    /// Zero-based sentence index.
    pub fn index(&self) -> usize {
        match self {
            Self::Produced(segment) => segment.index,
            Self::Skipped(skipped) => skipped.index,
        }
    }

    /// The produced segment, if any.
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Self::Produced(segment) => Some(segment),
            Self::Skipped(_) => None,
        }
    }
}
