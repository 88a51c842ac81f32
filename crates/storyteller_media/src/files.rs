//! Writers for model outputs.

use hound::{SampleFormat, WavSpec, WavWriter};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use storyteller_core::AudioClip;
use storyteller_error::{MediaError, MediaErrorKind, MediaResult};
use tracing::{debug, instrument};

/// Encode `image` as PNG at `path`.
///
/// Encoding runs on the blocking pool.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn write_png(path: &Path, image: &DynamicImage) -> MediaResult<()> {
    let path_buf: PathBuf = path.to_path_buf();
    let image = image.clone();

    tokio::task::spawn_blocking(move || {
        image
            .save_with_format(&path_buf, ImageFormat::Png)
            .map_err(|e| {
                MediaError::new(MediaErrorKind::ImageEncode(format!(
                    "{}: {}",
                    path_buf.display(),
                    e
                )))
            })
    })
    .await
    .map_err(|e| MediaError::new(MediaErrorKind::ImageEncode(e.to_string())))??;

    debug!("Image written");
    Ok(())
}

/// Write `clip` as 16-bit mono PCM WAV at `path`.
#[instrument(skip_all, fields(path = %path.display(), samples = clip.samples().len()))]
pub async fn write_wav(path: &Path, clip: &AudioClip) -> MediaResult<()> {
    let path_buf: PathBuf = path.to_path_buf();
    let clip = clip.clone();

    tokio::task::spawn_blocking(move || encode_wav(&path_buf, &clip))
        .await
        .map_err(|e| MediaError::new(MediaErrorKind::AudioEncode(e.to_string())))??;

    debug!("Audio written");
    Ok(())
}

fn encode_wav(path: &Path, clip: &AudioClip) -> MediaResult<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: *clip.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let encode_err =
        |e: hound::Error| MediaError::new(MediaErrorKind::AudioEncode(format!("{}: {}", path.display(), e)));

    let mut writer = WavWriter::create(path, spec).map_err(encode_err)?;
    for &sample in clip.samples() {
        writer.write_sample(sample).map_err(encode_err)?;
    }
    writer.finalize().map_err(encode_err)?;
    Ok(())
}
