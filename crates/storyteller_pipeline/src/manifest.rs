//! ffmpeg concat-demuxer manifest.

use std::path::Path;
use storyteller_core::Segment;
use storyteller_error::{PipelineError, PipelineErrorKind, PipelineResult};
use tracing::{debug, instrument};

/// One `file <name>` line per segment, in the order given.
///
/// Names are the clips' bare file names, escaped for the concat demuxer.
///
/// # Errors
///
/// Returns [`PipelineErrorKind::InvalidSegmentPath`] if a clip path has no
/// UTF-8 file name.
pub fn render_manifest(segments: &[Segment]) -> PipelineResult<String> {
    let mut contents = String::with_capacity(16 * segments.len());

    for segment in segments {
        let name = segment.paths().video_file_name().ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::InvalidSegmentPath(
                segment.paths().video().display().to_string(),
            ))
        })?;
        contents.push_str("file ");
        contents.push_str(&escape(name));
        contents.push('\n');
    }

    Ok(contents)
}

/// Write the manifest for `segments` to `path`, replacing any previous one.
#[instrument(skip_all, fields(path = %path.display(), entries = segments.len()))]
pub async fn write_manifest(path: &Path, segments: &[Segment]) -> PipelineResult<()> {
    let contents = render_manifest(segments)?;
    tokio::fs::write(path, contents).await.map_err(|e| {
        PipelineError::new(PipelineErrorKind::Manifest(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    debug!("Manifest written");
    Ok(())
}

fn escape(name: &str) -> String {
    name.replace('\\', r"\\")
        .replace(' ', r"\ ")
        .replace('\'', r"\'")
}
