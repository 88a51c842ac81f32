//! Errors raised while loading or validating StoryTeller settings.

/// Invalid or unreadable settings, with the location that rejected them.
///
/// Raised for malformed TOML layers, environment values that fail to parse
/// and out-of-range values such as a zero `max_new_tokens`. Always fatal.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid settings: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was rejected
    pub message: String,
    /// Line of the check that failed
    pub line: u32,
    /// File of the check that failed
    pub file: &'static str,
}

impl ConfigError {
    /// Reject the settings with `message`, recording the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_error::ConfigError;
    ///
    /// let err = ConfigError::new("max_new_tokens must be a positive integer");
    /// assert!(err.message.contains("max_new_tokens"));
    /// assert!(err.to_string().starts_with("Invalid settings: max_new_tokens"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
