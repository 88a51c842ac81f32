//! Trait definitions for the StoryTeller pipeline.
//!
//! The pipeline only talks to its collaborators through these traits: one
//! per model modality plus the external video tool.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImagePainter, SpeechSynthesizer, TextWriter, VideoTool};
pub use types::{PaintRequest, PaintRequestBuilder, WriteRequest, WriteRequestBuilder};
