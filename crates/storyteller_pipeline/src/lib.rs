//! Orchestration of the StoryTeller pipeline.
//!
//! [`StoryTeller::generate`] asks the writer for a story, splits it into
//! sentences and turns each sentence into a narrated, captioned clip with a
//! [`SegmentBuilder`]. Clips that could not be produced are skipped; the rest
//! are listed in an ffmpeg concat manifest and joined into one video.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> storyteller_error::StoryTellerResult<()> {
//! use storyteller_core::StoryRequest;
//! use storyteller_pipeline::StoryTeller;
//!
//! let teller = StoryTeller::from_default()?;
//! let report = teller.generate(&StoryRequest::default()).await?;
//! println!("{} clips", report.produced().count());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod facade;
mod manifest;
mod preconditions;
mod segment_builder;
mod sentences;
mod storyteller;

pub use facade::ModelFacade;
pub use manifest::{render_manifest, write_manifest};
pub use preconditions::{Preconditions, check_preconditions};
pub use segment_builder::{SegmentBuilder, image_prompt};
pub use sentences::{Language, SentenceSplitter};
pub use storyteller::StoryTeller;
