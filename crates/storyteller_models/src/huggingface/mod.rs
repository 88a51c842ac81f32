//! HuggingFace Inference API integration.

mod client;
mod dto;
mod painter;
mod speaker;
mod writer;

pub use client::HuggingFaceClient;
pub use dto::{
    HuggingFaceOptions, ImageParameters, ImageParametersBuilder, ImageRequest, TextGeneration,
    TextGenerationParameters, TextGenerationParametersBuilder, TextGenerationRequest,
};
pub use painter::HuggingFacePainter;
pub use speaker::HuggingFaceSpeaker;
pub use writer::HuggingFaceWriter;
