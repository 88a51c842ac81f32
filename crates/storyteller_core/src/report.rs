//! Summary of a completed run.

use crate::{Segment, SegmentOutcome, SkippedSentence};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What `generate` produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StoryReport {
    /// Raw text returned by the writer
    story: String,
    /// Sentences selected for processing, in story order
    sentences: Vec<String>,
    /// One outcome per selected sentence, in story order
    outcomes: Vec<SegmentOutcome>,
    /// Concat manifest, always written
    manifest_path: PathBuf,
    /// Concatenated video, absent when no segment was produced
    final_video: Option<PathBuf>,
}

impl StoryReport {
    /// Assemble a report.
    pub fn new(
        story: impl Into<String>,
        sentences: Vec<String>,
        outcomes: Vec<SegmentOutcome>,
        manifest_path: impl Into<PathBuf>,
        final_video: Option<PathBuf>,
    ) -> Self {
        Self {
            story: story.into(),
            sentences,
            outcomes,
            manifest_path: manifest_path.into(),
            final_video,
        }
    }

    /// Produced segments in story order.
    pub fn produced(&self) -> impl Iterator<Item = &Segment> {
        self.outcomes.iter().filter_map(SegmentOutcome::segment)
    }

    /// Skipped sentences in story order.
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedSentence> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SegmentOutcome::Skipped(skipped) => Some(skipped),
            SegmentOutcome::Produced(_) => None,
        })
    }

    /// Final video path, if one was written.
    pub fn final_video_path(&self) -> Option<&Path> {
        self.final_video.as_deref()
    }
}
