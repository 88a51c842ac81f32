//! Model identifier validation.

use storyteller_error::{ModelsError, ModelsErrorKind, ModelsResult};

const MAX_MODEL_ID_LEN: usize = 96;

/// Check that `model` is a well-formed hub identifier (`name` or `owner/name`).
///
/// # Errors
///
/// Returns [`ModelsErrorKind::InvalidModelId`] describing the first problem found.
///
/// # Examples
///
/// ```
/// use storyteller_models::validate_model_id;
///
/// assert!(validate_model_id("gpt2").is_ok());
/// assert!(validate_model_id("stabilityai/stable-diffusion-2").is_ok());
/// assert!(validate_model_id("not a model").is_err());
/// assert!(validate_model_id("a/b/c").is_err());
/// ```
pub fn validate_model_id(model: &str) -> ModelsResult<()> {
    let reject = |reason: &str| {
        Err(ModelsError::new(ModelsErrorKind::InvalidModelId {
            model: model.to_string(),
            reason: reason.to_string(),
        }))
    };

    if model.is_empty() {
        return reject("identifier is empty");
    }
    if model.len() > MAX_MODEL_ID_LEN {
        return reject("identifier is too long");
    }

    let parts: Vec<&str> = model.split('/').collect();
    if parts.len() > 2 {
        return reject("expected `name` or `owner/name`");
    }

    for part in parts {
        if part.is_empty() {
            return reject("empty path segment");
        }
        if part.starts_with(['-', '.']) || part.ends_with(['-', '.']) || part.contains("..") {
            return reject("segments may not start or end with '-' or '.', nor contain '..'");
        }
        if let Some(bad) = part
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return reject(&format!("unexpected character {:?}", bad));
        }
    }

    Ok(())
}
