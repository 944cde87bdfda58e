//! Filter parameter policy: table shape plus the Kaiser beta derived from
//! the stopband attenuation target.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::common::{GeneratorError, GeneratorResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// Sinc zero crossings on each side of center.
    pub zero_crossings: usize,
    pub bits_per_sample: u32,
    pub stopband_attenuation_db: f64,
}

impl Default for FilterParameters {
    fn default() -> Self {
        Self {
            zero_crossings: RESAMPLER_ZERO_CROSSINGS,
            bits_per_sample: RESAMPLER_BITS_PER_SAMPLE,
            stopband_attenuation_db: RESAMPLER_STOPBAND_ATTENUATION_DB,
        }
    }
}

impl FilterParameters {
    /// `2^(bits_per_sample / 2 + 1)`, always a power of two.
    pub fn samples_per_zero_crossing(&self) -> usize {
        1 << ((self.bits_per_sample / 2) + 1)
    }

    /// Length of the half kernel. Always odd: the peak tap plus an even tail.
    pub fn filter_size(&self) -> usize {
        self.samples_per_zero_crossing() * self.zero_crossings + 1
    }

    /// Kaiser shape parameter for the attenuation target.
    ///
    /// Only the `dB > 50` branch of the Kaiser design formula is used, so this
    /// is meaningless for parameters that fail [`Self::validate`].
    pub fn kaiser_beta(&self) -> f64 {
        KAISER_BETA_SLOPE * (self.stopband_attenuation_db - KAISER_BETA_OFFSET_DB)
    }

    pub fn validate(&self) -> GeneratorResult<()> {
        let db = self.stopband_attenuation_db;
        if !db.is_finite() || db <= MIN_STOPBAND_ATTENUATION_DB || db > MAX_STOPBAND_ATTENUATION_DB {
            return Err(GeneratorError::invalid(format!(
                "stopband attenuation must be in ({}, {}] dB, got {}",
                MIN_STOPBAND_ATTENUATION_DB, MAX_STOPBAND_ATTENUATION_DB, db
            )));
        }

        if self.zero_crossings == 0 || self.zero_crossings > MAX_ZERO_CROSSINGS {
            return Err(GeneratorError::invalid(format!(
                "zero crossings must be in 1..={}, got {}",
                MAX_ZERO_CROSSINGS, self.zero_crossings
            )));
        }

        if self.bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(GeneratorError::invalid(format!(
                "bits per sample must be at most {}, got {}",
                MAX_BITS_PER_SAMPLE, self.bits_per_sample
            )));
        }

        self.filter_size_checked()?;
        Ok(())
    }

    fn filter_size_checked(&self) -> GeneratorResult<usize> {
        self.samples_per_zero_crossing()
            .checked_mul(self.zero_crossings)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| GeneratorError::invalid("filter size overflows usize"))
    }
}
