//! Fatal precondition errors raised before any model is loaded.

/// Missing runtime dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PreconditionErrorKind {
    /// A required executable is not on `PATH`
    #[display("`{}` not found. Please install `{}` and try again.", _0, _0)]
    ToolNotFound(String),

    /// No sentence tokenizer exists for the requested language
    #[display("Sentence tokenizer unavailable for language '{}'", _0)]
    TokenizerUnavailable(String),
}

/// Precondition error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Precondition Error: {} at line {} in {}", kind, line, file)]
pub struct PreconditionError {
    kind: PreconditionErrorKind,
    line: u32,
    file: &'static str,
}

impl PreconditionError {
    /// Create a new precondition error with caller location tracking.
    #[track_caller]
    pub fn new(kind: PreconditionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PreconditionErrorKind {
        &self.kind
    }
}
