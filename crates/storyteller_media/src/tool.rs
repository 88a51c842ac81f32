//! Guarded invocation of external command-line tools.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use storyteller_error::{
    MediaError, MediaErrorKind, MediaResult, PreconditionError, PreconditionErrorKind,
};
use tokio::process::Command;
use tracing::{debug, error, instrument};

/// Number of trailing stderr lines kept in a failure message.
pub const STDERR_TAIL_LINES: usize = 20;

/// Locate `name` on the executable search path.
///
/// # Errors
///
/// Returns [`PreconditionErrorKind::ToolNotFound`] if it is missing.
#[instrument]
pub fn require_tool(name: &str) -> Result<PathBuf, PreconditionError> {
    match which::which(name) {
        Ok(path) => {
            debug!(path = %path.display(), "Found external tool");
            Ok(path)
        }
        Err(e) => {
            error!(error = %e, "External tool missing");
            Err(PreconditionError::new(PreconditionErrorKind::ToolNotFound(
                name.to_string(),
            )))
        }
    }
}

/// An external tool invocation.
///
/// Stdout is discarded and stderr is captured only to explain failures.
/// Every child runs with `TOKENIZERS_PARALLELISM=false`.
///
/// # Examples
///
/// ```no_run
/// # async fn demo() -> storyteller_error::MediaResult<()> {
/// use storyteller_media::ToolCommand;
///
/// ToolCommand::new("ffmpeg")
///     .args(["-y", "-i", "in.wav", "out.mp3"])
///     .current_dir("out")
///     .run()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Start building an invocation of `program`.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Run the tool inside `dir`.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Arguments collected so far.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short tool name used in logs and errors.
    pub fn tool_name(&self) -> String {
        Path::new(&self.program)
            .file_stem()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Returns [`MediaErrorKind::ToolSpawn`] if the process cannot start and
    /// [`MediaErrorKind::ToolFailed`] on a non-zero exit, carrying the exit
    /// code and the last [`STDERR_TAIL_LINES`] lines of stderr.
    #[instrument(skip(self), fields(tool = %self.tool_name()))]
    pub async fn run(&self) -> MediaResult<()> {
        let tool = self.tool_name();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .env("TOKENIZERS_PARALLELISM", "false")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        debug!(args = ?self.args, cwd = ?self.current_dir, "Running external tool");

        let output = cmd.output().await.map_err(|e| {
            error!(error = %e, "Failed to spawn external tool");
            MediaError::new(MediaErrorKind::ToolSpawn {
                tool: tool.clone(),
                message: e.to_string(),
            })
        })?;

        if !output.status.success() {
            let stderr = stderr_tail(&output.stderr, STDERR_TAIL_LINES);
            error!(code = ?output.status.code(), stderr = %stderr, "External tool failed");
            return Err(MediaError::new(MediaErrorKind::ToolFailed {
                tool,
                code: output.status.code(),
                stderr,
            }));
        }

        debug!("External tool finished");
        Ok(())
    }
}

fn stderr_tail(stderr: &[u8], lines: usize) -> String {
    let text = String::from_utf8_lossy(stderr);
    let all: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}
