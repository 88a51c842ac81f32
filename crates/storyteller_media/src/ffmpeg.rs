//! `ffmpeg` as the pipeline's video tool.

use crate::{ToolCommand, require_tool};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use storyteller_core::SegmentPaths;
use storyteller_error::{MediaError, MediaErrorKind, PreconditionError, StoryTellerResult};
use storyteller_interface::VideoTool;
use tracing::{debug, instrument};

/// Executable name looked up on `PATH`.
pub const FFMPEG: &str = "ffmpeg";

const COMMON_ARGS: [&str; 4] = ["-y", "-hide_banner", "-loglevel", "error"];

/// [`VideoTool`] implemented by shelling out to `ffmpeg`.
///
/// Both operations run inside the directory holding their inputs so that
/// every path on the command line, in the subtitle filter and in the concat
/// manifest is a bare file name.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    /// Locate `ffmpeg` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if it is not installed.
    pub fn locate() -> Result<Self, PreconditionError> {
        Ok(Self {
            program: require_tool(FFMPEG)?,
        })
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command muxing one segment: the still image looped for
    /// `duration_secs`, AAC audio and burned-in subtitles.
    ///
    /// # Errors
    ///
    /// Returns [`MediaErrorKind::Io`] if a segment path has no file name or
    /// the files are not in one directory.
    pub fn mux_command(
        &self,
        paths: &SegmentPaths,
        duration_secs: u64,
    ) -> Result<ToolCommand, MediaError> {
        let dir = parent_dir(paths.video())?;
        for input in [paths.image(), paths.audio(), paths.subtitle()] {
            if parent_dir(input)? != dir {
                return Err(MediaError::io(
                    input.display(),
                    "segment files must share one directory",
                ));
            }
        }

        let image = file_name(paths.image())?;
        let audio = file_name(paths.audio())?;
        let subtitle = file_name(paths.subtitle())?;
        let video = file_name(paths.video())?;

        let mut filter = OsString::from("subtitles=");
        filter.push(&subtitle);

        Ok(ToolCommand::new(&self.program)
            .args(COMMON_ARGS)
            .args(["-loop", "1", "-i"])
            .arg(image)
            .arg("-i")
            .arg(audio)
            .arg("-vf")
            .arg(filter)
            .args([
                "-c:v",
                "libx264",
                "-tune",
                "stillimage",
                "-pix_fmt",
                "yuv420p",
                "-c:a",
                "aac",
                "-b:a",
                "192k",
            ])
            .arg("-t")
            .arg(duration_secs.max(1).to_string())
            .arg("-shortest")
            .arg(video)
            .current_dir(dir))
    }

    /// Command concatenating the clips listed in `manifest` into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaErrorKind::Io`] if either path has no file name.
    pub fn concat_command(&self, manifest: &Path, output: &Path) -> Result<ToolCommand, MediaError> {
        let dir = parent_dir(manifest)?;

        Ok(ToolCommand::new(&self.program)
            .args(COMMON_ARGS)
            .args(["-f", "concat", "-safe", "0", "-i"])
            .arg(file_name(manifest)?)
            .args(["-c", "copy"])
            .arg(output_relative_to(output, &dir)?)
            .current_dir(dir))
    }
}

#[async_trait]
impl VideoTool for Ffmpeg {
    #[instrument(skip(self, paths), fields(video = %paths.video().display()))]
    async fn mux_segment(&self, paths: &SegmentPaths, duration_secs: u64) -> StoryTellerResult<()> {
        self.mux_command(paths, duration_secs)?.run().await?;
        debug!("Segment muxed");
        Ok(())
    }

    #[instrument(skip_all, fields(manifest = %manifest.display(), output = %output.display()))]
    async fn concat(&self, manifest: &Path, output: &Path) -> StoryTellerResult<()> {
        self.concat_command(manifest, output)?.run().await?;
        debug!("Segments concatenated");
        Ok(())
    }

    fn name(&self) -> &str {
        FFMPEG
    }
}

fn file_name(path: &Path) -> Result<OsString, MediaError> {
    path.file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| MediaError::new(MediaErrorKind::Io {
            path: path.display().to_string(),
            message: "path has no file name".to_string(),
        }))
}

fn parent_dir(path: &Path) -> Result<PathBuf, MediaError> {
    file_name(path)?;
    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    })
}

fn output_relative_to(output: &Path, dir: &Path) -> Result<OsString, MediaError> {
    if parent_dir(output)? == dir {
        file_name(output)
    } else if output.is_absolute() {
        Ok(output.as_os_str().to_os_string())
    } else {
        std::path::absolute(output)
            .map(PathBuf::into_os_string)
            .map_err(|e| MediaError::io(output.display(), e))
    }
}
