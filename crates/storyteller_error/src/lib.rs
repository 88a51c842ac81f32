//! Error types for the StoryTeller pipeline.
//!
//! This crate provides the foundation error types used throughout the StoryTeller workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyteller_error::{ConfigError, StoryTellerResult};
//!
//! fn load() -> StoryTellerResult<String> {
//!     Err(ConfigError::new("missing writer model"))?
//! }
//!
//! match load() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod media;
mod models;
mod pipeline;
mod precondition;

pub use config::ConfigError;
pub use error::{StoryTellerError, StoryTellerErrorKind, StoryTellerResult};
pub use media::{MediaError, MediaErrorKind, MediaResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult};
pub use precondition::{PreconditionError, PreconditionErrorKind};
