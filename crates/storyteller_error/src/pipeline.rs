//! Pipeline orchestration errors.

/// Pipeline-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The output directory could not be created
    #[display("Failed to create output directory {}: {}", path, message)]
    OutputDirectory {
        /// Directory path
        path: String,
        /// Underlying error message
        message: String,
    },

    /// The concat manifest could not be written
    #[display("Failed to write manifest: {}", _0)]
    Manifest(String),

    /// A segment file name could not be derived from its path
    #[display("Invalid segment path: {}", _0)]
    InvalidSegmentPath(String),
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    kind: PipelineErrorKind,
    line: u32,
    file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with caller location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
