//! Runtime dependencies checked before any model is loaded.

use crate::{Language, SentenceSplitter};
use derive_getters::Getters;
use std::str::FromStr;
use storyteller_error::{PreconditionError, PreconditionErrorKind};
use storyteller_media::Ffmpeg;
use tracing::{info, instrument};

/// Resources proven available by [`check_preconditions`].
#[derive(Debug, Clone, Getters)]
pub struct Preconditions {
    /// Located `ffmpeg`
    ffmpeg: Ffmpeg,
    /// Sentence splitter for the requested language
    splitter: SentenceSplitter,
}

impl Preconditions {
    /// Split into the video tool and the sentence splitter.
    pub fn into_parts(self) -> (Ffmpeg, SentenceSplitter) {
        (self.ffmpeg, self.splitter)
    }
}

/// Verify that `ffmpeg` is installed and a tokenizer exists for `language`.
///
/// # Errors
///
/// Returns [`PreconditionErrorKind::ToolNotFound`] or
/// [`PreconditionErrorKind::TokenizerUnavailable`].
#[instrument]
pub fn check_preconditions(language: &str) -> Result<Preconditions, PreconditionError> {
    let ffmpeg = Ffmpeg::locate()?;
    let language = Language::from_str(language).map_err(|_| {
        PreconditionError::new(PreconditionErrorKind::TokenizerUnavailable(
            language.to_string(),
        ))
    })?;

    info!(language = %language, "Preconditions satisfied");

    Ok(Preconditions {
        ffmpeg,
        splitter: SentenceSplitter::new(language),
    })
}
