use serde::{Deserialize, Serialize};

use crate::filter::FilterParameters;
use crate::filter::constants::{
    RESAMPLER_BITS_PER_SAMPLE, RESAMPLER_STOPBAND_ATTENUATION_DB, RESAMPLER_ZERO_CROSSINGS,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilterConfig {
    #[serde(default = "default_zero_crossings")]
    pub zero_crossings: usize,
    #[serde(default = "default_bits_per_sample")]
    pub bits_per_sample: u32,
    #[serde(default = "default_stopband_attenuation_db")]
    pub stopband_attenuation_db: f64,
}

fn default_zero_crossings() -> usize {
    RESAMPLER_ZERO_CROSSINGS
}

fn default_bits_per_sample() -> u32 {
    RESAMPLER_BITS_PER_SAMPLE
}

fn default_stopband_attenuation_db() -> f64 {
    RESAMPLER_STOPBAND_ATTENUATION_DB
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            zero_crossings: default_zero_crossings(),
            bits_per_sample: default_bits_per_sample(),
            stopband_attenuation_db: default_stopband_attenuation_db(),
        }
    }
}

impl From<&FilterConfig> for FilterParameters {
    fn from(config: &FilterConfig) -> Self {
        Self {
            zero_crossings: config.zero_crossings,
            bits_per_sample: config.bits_per_sample,
            stopband_attenuation_db: config.stopband_attenuation_db,
        }
    }
}
