//! Top-level error wrapper types.

use crate::{
    ConfigError, MediaError, ModelsError, ModelsErrorKind, PipelineError, PreconditionError,
};

/// The foundation error enum every crate in the workspace lifts into.
///
/// # Examples
///
/// ```
/// use storyteller_error::{ConfigError, StoryTellerError};
///
/// let err: StoryTellerError = ConfigError::new("bad value").into();
/// assert!(format!("{}", err).contains("Invalid settings"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryTellerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model backend error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Media file or external tool error
    #[from(MediaError)]
    Media(MediaError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Missing runtime dependency
    #[from(PreconditionError)]
    Precondition(PreconditionError),
}

/// StoryTeller error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyteller_error::{PreconditionError, PreconditionErrorKind, StoryTellerResult};
///
/// fn check() -> StoryTellerResult<()> {
///     Err(PreconditionError::new(PreconditionErrorKind::ToolNotFound("ffmpeg".into())))?
/// }
///
/// let err = check().unwrap_err();
/// assert!(err.is_fatal());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("StoryTeller Error: {}", _0)]
pub struct StoryTellerError(Box<StoryTellerErrorKind>);

impl StoryTellerError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryTellerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryTellerErrorKind {
        &self.0
    }

    /// Whether the error must abort the run before any output is produced.
    ///
    /// Missing tools, unusable configuration and unresolvable model
    /// identifiers are fatal; everything else is scoped to one sentence.
    pub fn is_fatal(&self) -> bool {
        match self.kind() {
            StoryTellerErrorKind::Precondition(_) | StoryTellerErrorKind::Config(_) => true,
            StoryTellerErrorKind::Models(err) => {
                matches!(err.kind, ModelsErrorKind::InvalidModelId { .. })
            }
            StoryTellerErrorKind::Media(_) | StoryTellerErrorKind::Pipeline(_) => false,
        }
    }
}

// Generic From implementation for any type that converts to StoryTellerErrorKind
impl<T> From<T> for StoryTellerError
where
    T: Into<StoryTellerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for StoryTeller operations.
pub type StoryTellerResult<T> = std::result::Result<T, StoryTellerError>;
