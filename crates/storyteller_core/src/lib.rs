//! Core data types for the StoryTeller pipeline.
//!
//! This crate provides the configuration record, the per-sentence segment
//! types and the run report shared by every other StoryTeller crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod backend;
mod config;
mod report;
mod request;
mod seed;
mod segment;

pub use audio::AudioClip;
pub use backend::{API_TOKEN_VAR, BackendConfig};
pub use config::{ConfigOverrides, Settings, StoryTellerConfig, StoryTellerConfigBuilder};
pub use report::StoryReport;
pub use request::{
    FINAL_VIDEO_FILE_NAME, MANIFEST_FILE_NAME, StoryRequest, StoryRequestBuilder,
};
pub use seed::Seed;
pub use segment::{Segment, SegmentOutcome, SegmentPaths, SkippedSentence, SubtitleTiming};
