// SPDX-License-Identifier: MPL-2.0
//! Generation progress across a batch of cards.

/// Progress percentage, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationProgress(f32);

impl GenerationProgress {
    /// Creates a progress value, clamping it to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Progress of `settled` results out of `total` requests.
    ///
    /// An empty batch has no progress.
    #[must_use]
    pub fn from_counts(settled: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        // card counts are tiny
        Self::new(settled as f32 / total as f32 * 100.0)
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the percentage as a 0.0–1.0 fraction.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns the rounded percentage shown in labels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }
}
