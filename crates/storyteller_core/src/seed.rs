//! Explicit random seed threaded through every sampling collaborator.

use serde::{Deserialize, Serialize};

/// Seed value for model sampling.
///
/// There is no process-wide RNG: every collaborator that samples receives
/// a `Seed` in its request.
///
/// # Examples
///
/// ```
/// use storyteller_core::Seed;
///
/// let seed = Seed::new(42);
/// assert_eq!(seed.value(), 42);
/// assert_eq!(seed.for_segment(3).value(), 45);
/// assert_eq!(Seed::default(), seed);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Wrap a raw seed value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw seed value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Seed for the sentence at `index`.
    pub const fn for_segment(self, index: usize) -> Self {
        Self(self.0.wrapping_add(index as u64))
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self(42)
    }
}
