//! Synthesized speech samples.

use derive_getters::Getters;

/// Mono signed 16-bit PCM audio at a fixed sample rate.
///
/// # Examples
///
/// ```
/// use storyteller_core::AudioClip;
///
/// let clip = AudioClip::new(vec![0; 44_100], 22_050);
/// assert_eq!(clip.duration_secs(), 2.0);
/// assert_eq!(clip.whole_seconds(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AudioClip {
    /// Interleaved samples (mono)
    samples: Vec<i16>,
    /// Samples per second
    sample_rate: u32,
}

impl AudioClip {
    /// Create a clip from raw samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Whether the clip holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Exact duration in seconds; zero for a zero sample rate.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Duration rounded up to whole seconds.
    pub fn whole_seconds(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        let rate = u64::from(self.sample_rate);
        (self.samples.len() as u64).div_ceil(rate)
    }
}
