//! Request types passed to model backends.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyteller_core::Seed;

/// A text generation request.
///
/// # Examples
///
/// ```
/// use storyteller_core::Seed;
/// use storyteller_interface::WriteRequest;
///
/// let request = WriteRequest::builder()
///     .prompt("Once upon a time")
///     .max_new_tokens(50u32)
///     .seed(Seed::new(7))
///     .build()
///     .unwrap();
/// assert_eq!(*request.max_new_tokens(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct WriteRequest {
    /// Text the continuation starts from
    prompt: String,
    /// Upper bound on generated tokens
    max_new_tokens: u32,
    /// Sampling seed
    #[builder(default)]
    seed: Seed,
}

impl WriteRequest {
    /// Creates a new request builder.
    pub fn builder() -> WriteRequestBuilder {
        WriteRequestBuilder::default()
    }
}

/// An image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct PaintRequest {
    /// Description of the picture
    prompt: String,
    /// Sampling seed
    #[builder(default)]
    seed: Seed,
}

impl PaintRequest {
    /// Creates a new request builder.
    pub fn builder() -> PaintRequestBuilder {
        PaintRequestBuilder::default()
    }
}
