//! Central constants for the filter generator.
//!
//! The reference table shape lives here so a different tap count or
//! attenuation target only needs a config change, never an edit to the
//! algorithm.

// ── Reference table shape ────────────────────────────────────────────────────

/// Sinc zero crossings on each side of the kernel's center.
pub const RESAMPLER_ZERO_CROSSINGS: usize = 5;

/// Drives the angular resolution: 2^(bits/2 + 1) samples per zero crossing.
pub const RESAMPLER_BITS_PER_SAMPLE: u32 = 16;

/// Target stopband attenuation (dB).
pub const RESAMPLER_STOPBAND_ATTENUATION_DB: f64 = 80.0;

// ── Kaiser beta policy ───────────────────────────────────────────────────────

/// `beta = 0.1102 * (dB - 8.7)`, the high-attenuation branch of the Kaiser formula.
pub const KAISER_BETA_SLOPE: f64 = 0.1102;
pub const KAISER_BETA_OFFSET_DB: f64 = 8.7;

/// The beta formula above only holds strictly above this attenuation.
pub const MIN_STOPBAND_ATTENUATION_DB: f64 = 50.0;

/// Upper end of the range checked against the Bessel series.
pub const MAX_STOPBAND_ATTENUATION_DB: f64 = 120.0;

/// Largest accepted `bits_per_sample` (2^17 samples per zero crossing).
pub const MAX_BITS_PER_SAMPLE: u32 = 32;

/// Largest accepted zero-crossing count; with [`MAX_BITS_PER_SAMPLE`] this
/// caps each table at 2^23 + 1 taps.
pub const MAX_ZERO_CROSSINGS: usize = 64;

// ── Bessel series ────────────────────────────────────────────────────────────

/// Series terms below this magnitude are dropped and end the evaluation.
pub const BESSEL_TERM_EPSILON: f64 = 1.0e-21;
