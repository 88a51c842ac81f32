//! SRT subtitle writer.

use crate::make_timeline_string;
use derive_getters::Getters;
use std::path::Path;
use storyteller_core::SubtitleTiming;
use storyteller_error::{MediaError, MediaResult};
use tracing::{debug, instrument};

/// One caption.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SubtitleCue {
    /// Caption text
    text: String,
    /// Display window
    timing: SubtitleTiming,
}

impl SubtitleCue {
    /// Create a cue.
    pub fn new(text: impl Into<String>, timing: SubtitleTiming) -> Self {
        Self {
            text: text.into(),
            timing,
        }
    }
}

/// Render cues as SRT text, numbered from 1, separated by blank lines.
///
/// # Examples
///
/// ```
/// use storyteller_core::SubtitleTiming;
/// use storyteller_media::{SubtitleCue, render_srt};
///
/// let srt = render_srt(&[SubtitleCue::new("Hello.", SubtitleTiming::covering(3.0))]);
/// assert_eq!(srt, "1\n00:00:00,000 --> 00:00:03,000\nHello.\n");
/// ```
pub fn render_srt(cues: &[SubtitleCue]) -> String {
    let mut output = String::new();

    for (i, cue) in cues.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&make_timeline_string(
            *cue.timing.start(),
            *cue.timing.end(),
        ));
        output.push('\n');
        // Blank lines would terminate the cue early
        for line in cue.text.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}

/// Render `cues` and write them to `path`.
#[instrument(skip_all, fields(path = %path.display(), cues = cues.len()))]
pub async fn write_srt(path: &Path, cues: &[SubtitleCue]) -> MediaResult<()> {
    let contents = render_srt(cues);
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| MediaError::io(path.display(), e))?;
    debug!("Subtitle written");
    Ok(())
}
