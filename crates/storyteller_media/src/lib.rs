//! Media helpers for the StoryTeller pipeline.
//!
//! - Subtitle timestamps and SRT rendering
//! - PNG and WAV writers for model outputs
//! - A guarded runner for external command-line tools
//! - [`Ffmpeg`], the [`VideoTool`](storyteller_interface::VideoTool) backed by `ffmpeg`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ffmpeg;
mod files;
mod srt;
mod timeline;
mod tool;

pub use ffmpeg::{FFMPEG, Ffmpeg};
pub use files::{write_png, write_wav};
pub use srt::{SubtitleCue, render_srt, write_srt};
pub use timeline::{format_time, make_timeline_string};
pub use tool::{STDERR_TAIL_LINES, ToolCommand, require_tool};
