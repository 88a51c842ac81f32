//! Text-to-speech backend.

use crate::huggingface::HuggingFaceClient;
use crate::huggingface::dto::SpeechRequest;
use crate::validate_model_id;
use async_trait::async_trait;
use hound::{SampleFormat, WavReader};
use std::io::Cursor;
use storyteller_core::AudioClip;
use storyteller_error::{ModelsError, ModelsErrorKind, ModelsResult, StoryTellerResult};
use storyteller_interface::SpeechSynthesizer;
use tracing::{debug, instrument};

/// Speech synthesizer served by the HuggingFace `text-to-speech` task.
///
/// Responses must be WAV; multi-channel audio is mixed down to mono and
/// float samples are converted to signed 16-bit.
#[derive(Debug, Clone)]
pub struct HuggingFaceSpeaker {
    client: HuggingFaceClient,
    model: String,
    url: String,
}

impl HuggingFaceSpeaker {
    /// Creates a speaker for `model` served under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::InvalidModelId`] if the identifier is malformed.
    #[instrument(skip_all, fields(model = %model, base_url = %base_url))]
    pub fn new(client: HuggingFaceClient, model: &str, base_url: &str) -> ModelsResult<Self> {
        validate_model_id(model)?;
        let url = HuggingFaceClient::model_url(base_url, model);

        debug!(model = %model, url = %url, "Created HuggingFace speaker");

        Ok(Self {
            client,
            model: model.to_string(),
            url,
        })
    }

    /// Decode a WAV payload into a mono clip.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::UnsupportedMedia`] for anything that is not
    /// 8/16/24/32-bit integer or 32-bit float WAV.
    pub fn decode_wav(bytes: &[u8]) -> ModelsResult<AudioClip> {
        let unsupported = |e: hound::Error| {
            ModelsError::new(ModelsErrorKind::UnsupportedMedia(format!(
                "Failed to decode WAV: {}",
                e
            )))
        };

        let mut reader = WavReader::new(Cursor::new(bytes)).map_err(unsupported)?;
        let spec = reader.spec();

        let interleaved: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => reader
                .samples::<i16>()
                .collect::<Result<_, _>>()
                .map_err(unsupported)?,
            (SampleFormat::Int, bits @ (8 | 24 | 32)) => {
                let shift = i32::from(bits) - 16;
                reader
                    .samples::<i32>()
                    .map(|sample| {
                        sample.map(|s| {
                            if shift > 0 {
                                (s >> shift) as i16
                            } else {
                                (s << -shift) as i16
                            }
                        })
                    })
                    .collect::<Result<_, _>>()
                    .map_err(unsupported)?
            }
            (SampleFormat::Float, 32) => reader
                .samples::<f32>()
                .map(|sample| sample.map(|s| (s.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16))
                .collect::<Result<_, _>>()
                .map_err(unsupported)?,
            (format, bits) => {
                return Err(ModelsError::new(ModelsErrorKind::UnsupportedMedia(format!(
                    "Unsupported WAV sample format {:?} at {} bits",
                    format, bits
                ))));
            }
        };

        let channels = usize::from(spec.channels.max(1));
        let samples = if channels == 1 {
            interleaved
        } else {
            interleaved
                .chunks(channels)
                .map(|frame| {
                    let sum: i32 = frame.iter().copied().map(i32::from).sum();
                    (sum / frame.len() as i32) as i16
                })
                .collect()
        };

        Ok(AudioClip::new(samples, spec.sample_rate))
    }
}

#[async_trait]
impl SpeechSynthesizer for HuggingFaceSpeaker {
    #[instrument(skip_all, fields(model = %self.model, chars = text.len()))]
    async fn speak(&self, text: &str) -> StoryTellerResult<AudioClip> {
        let body = SpeechRequest::new(text, self.client.options());

        let response = self.client.post(&self.url, &body, "audio/wav").await?;
        let bytes = HuggingFaceClient::bytes(response).await?;
        let clip = Self::decode_wav(&bytes)?;

        debug!(
            samples = clip.samples().len(),
            sample_rate = *clip.sample_rate(),
            "Speech synthesized"
        );
        Ok(clip)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
