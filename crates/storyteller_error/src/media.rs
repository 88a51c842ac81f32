//! Media file and external tool errors.

/// Specific media error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// Reading or writing a media file failed
    #[display("I/O error on {}: {}", path, message)]
    Io {
        /// Path being accessed
        path: String,
        /// Underlying error message
        message: String,
    },

    /// The external tool could not be started
    #[display("Failed to spawn '{}': {}", tool, message)]
    ToolSpawn {
        /// Tool name
        tool: String,
        /// Underlying error message
        message: String,
    },

    /// The external tool exited unsuccessfully
    #[display("'{}' exited with {}: {}", tool, exit_label(*code), stderr)]
    ToolFailed {
        /// Tool name
        tool: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Tail of the tool's standard error
        stderr: String,
    },

    /// Image encoding failed
    #[display("Image encoding error: {}", _0)]
    ImageEncode(String),

    /// Audio encoding failed
    #[display("Audio encoding error: {}", _0)]
    AudioEncode(String),
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "signal".to_string(),
    }
}

/// Media error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    kind: MediaErrorKind,
    line: u32,
    file: &'static str,
}

impl MediaError {
    /// Create a new media error with caller location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an I/O failure on `path`.
    #[track_caller]
    pub fn io(path: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::new(MediaErrorKind::Io {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaErrorKind {
        &self.kind
    }
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
