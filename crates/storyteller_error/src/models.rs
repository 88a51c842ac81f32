//! Model backend errors.

/// Model backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// A model identifier could not be resolved into a client
    #[display("Invalid model identifier '{}': {}", model, reason)]
    InvalidModelId {
        /// The offending identifier
        model: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP request could not be sent or its body could not be read
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The inference API answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The response body did not have the expected shape
    #[display("Response conversion error: {}", _0)]
    ResponseConversion(String),

    /// The response carried media the client cannot decode
    #[display("Unsupported media: {}", _0)]
    UnsupportedMedia(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model backend error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
