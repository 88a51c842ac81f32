//! Model backends for the StoryTeller pipeline.
//!
//! Every modality is served by the HuggingFace Inference API (or any
//! server speaking the same protocol, such as a self-hosted inference
//! endpoint selected through [`BackendConfig`](storyteller_core::BackendConfig)).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod huggingface;
mod model_id;

pub use huggingface::{
    HuggingFaceClient, HuggingFaceOptions, HuggingFacePainter, HuggingFaceSpeaker,
    HuggingFaceWriter, ImageParameters, ImageParametersBuilder, ImageRequest, TextGeneration,
    TextGenerationParameters, TextGenerationParametersBuilder, TextGenerationRequest,
};
pub use model_id::validate_model_id;
