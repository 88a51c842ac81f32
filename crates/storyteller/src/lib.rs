//! StoryTeller - narrated slideshow videos from a text prompt
//!
//! StoryTeller chains three pretrained models: a text generator writes a
//! story, an image generator paints every sentence and a speech synthesizer
//! narrates it. Each sentence becomes a short captioned clip, and `ffmpeg`
//! joins the clips into one video.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storyteller::{StoryRequest, StoryTeller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let teller = StoryTeller::from_default()?;
//!
//!     let request = StoryRequest::builder()
//!         .writer_prompt("Once upon a time, unicorns roamed the Earth.")
//!         .num_images(5usize)
//!         .output_dir("out")
//!         .build()?;
//!
//!     let report = teller.generate(&request).await?;
//!     println!("Final video: {:?}", report.final_video());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! StoryTeller is organized as a workspace with focused crates:
//!
//! - `storyteller_error` - Error types
//! - `storyteller_core` - Configuration, segment and report types
//! - `storyteller_interface` - Model and video tool traits
//! - `storyteller_models` - HuggingFace Inference API backends
//! - `storyteller_media` - Subtitles, media writers and `ffmpeg`
//! - `storyteller_pipeline` - Sentence-to-video orchestration
//!
//! This crate (`storyteller`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;

pub use storyteller_core::*;
pub use storyteller_error::*;
pub use storyteller_interface::*;
pub use storyteller_media::*;
pub use storyteller_models::*;
pub use storyteller_pipeline::*;
