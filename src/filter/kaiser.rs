//! Kaiser-windowed sinc table and its forward-difference companion.
//!
//! The table holds one half of a symmetric kernel: index 0 is the peak and
//! the last index the far end of the tail, the way a causal half-kernel is
//! walked by a bandlimited-interpolation resampler. The difference table lets
//! that resampler interpolate between taps with one multiply-add.

use std::f64::consts::PI;

use tracing::debug;

use super::bessel::bessel_i0;
use super::params::FilterParameters;
use crate::common::GeneratorResult;

/// Generated coefficient tables, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTables {
    params: FilterParameters,
    table: Vec<f32>,
    diffs: Vec<f32>,
}

impl FilterTables {
    pub fn params(&self) -> &FilterParameters {
        &self.params
    }

    /// Windowed sinc taps, `filter_size` long, peak first.
    pub fn table(&self) -> &[f32] {
        &self.table
    }

    /// `diffs[i] == table[i + 1] - table[i]`, last entry exactly `0.0`.
    pub fn diffs(&self) -> &[f32] {
        &self.diffs
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Coefficient at a fractional tap position, as a runtime consumer
    /// computes it: `table[n] + frac * diffs[n]` for `position = n + frac`.
    ///
    /// The kernel is symmetric so the sign of `position` is ignored. Anything
    /// at or past the last tap (or not a number) yields the last tap.
    pub fn interpolate(&self, position: f64) -> f32 {
        let position = position.abs();
        let last = self.table.len() - 1;
        if !(position < last as f64) {
            return self.table[last];
        }

        let index = position as usize;
        let frac = (position - index as f64) as f32;
        self.table[index] + frac * self.diffs[index]
    }
}

/// Validates `params` and builds both tables.
pub fn build_filter_tables(params: &FilterParameters) -> GeneratorResult<FilterTables> {
    params.validate()?;

    let filter_size = params.filter_size();
    let beta = params.kaiser_beta();
    debug!(
        "Building {} taps ({} per zero crossing), beta={:.6}",
        filter_size,
        params.samples_per_zero_crossing(),
        beta
    );

    let (table, diffs) = kaiser_and_sinc(filter_size, params.samples_per_zero_crossing(), beta);

    Ok(FilterTables {
        params: *params,
        table,
        diffs,
    })
}

/// Kaiser window with the normalized sinc applied, plus forward differences.
///
/// `samples_per_zero_crossing` sets the sinc's angular step and is
/// independent of `filter_size`. [`build_filter_tables`] validates both.
///
/// # Panics
///
/// If `filter_size` is even or smaller than 3.
pub fn kaiser_and_sinc(
    filter_size: usize,
    samples_per_zero_crossing: usize,
    beta: f64,
) -> (Vec<f32>, Vec<f32>) {
    let lenm1 = filter_size - 1;
    let mut table = half_window(filter_size, beta);
    let mut diffs = vec![0.0_f32; filter_size];

    // Index 0 keeps its 1.0: sinc(0) is 1 and would otherwise be 0/0.
    for i in 1..filter_size {
        let x = (i as f64 / samples_per_zero_crossing as f64) * PI;
        table[i] = (f64::from(table[i]) * (x.sin() / x)) as f32;
        diffs[i - 1] = table[i] - table[i - 1];
    }
    // Nothing to interpolate towards past the last tap.
    diffs[lenm1] = 0.0;

    (table, diffs)
}

/// Half of a symmetric Kaiser window, peak at index 0, narrowed to `f32`.
///
/// # Panics
///
/// If `filter_size` is even or smaller than 3.
pub fn half_window(filter_size: usize, beta: f64) -> Vec<f32> {
    assert!(
        filter_size >= 3 && filter_size % 2 == 1,
        "filter size must be odd and at least 3, got {}",
        filter_size
    );

    let lenm1 = filter_size - 1;
    let lenm1div2 = lenm1 / 2;
    let bessel_beta = bessel_i0(beta);

    let mut table = vec![0.0_f32; filter_size];
    table[0] = 1.0;

    // `i` walks the window's left half from its outer edge (offset near -1)
    // up to the center (offset 0); each value lands at the mirrored slot, so
    // the tail fills from the high end and the center ends up at index 1.
    for i in 1..=lenm1 {
        let offset = ((i as f64 - lenm1 as f64) / 2.0) / lenm1div2 as f64;
        table[storage_index(filter_size, i)] = kaiser(offset, beta, bessel_beta) as f32;
    }

    table
}

/// Storage slot for window step `i` (`1..filter_size`): `filter_size - i`.
#[inline]
fn storage_index(filter_size: usize, i: usize) -> usize {
    filter_size - i
}

/// Kaiser window value at a normalized offset in `[-1, 1]` from the center.
#[inline]
pub fn kaiser(offset: f64, beta: f64, bessel_beta: f64) -> f64 {
    bessel_i0(beta * (1.0 - offset.powi(2)).sqrt()) / bessel_beta
}

/// Full symmetric Kaiser window of `len` points spanning offsets `-1..=1`.
pub fn kaiser_window(len: usize, beta: f64) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let m = (len - 1) as f64;
            let bessel_beta = bessel_i0(beta);
            (0..len)
                .map(|j| kaiser((2.0 * j as f64 - m) / m, beta, bessel_beta))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GeneratorError;

    fn toy() -> FilterParameters {
        FilterParameters {
            zero_crossings: 5,
            bits_per_sample: 0,
            stopband_attenuation_db: 80.0,
        }
    }

    fn parameter_sets() -> Vec<FilterParameters> {
        vec![
            FilterParameters::default(),
            toy(),
            FilterParameters {
                zero_crossings: 3,
                bits_per_sample: 8,
                stopband_attenuation_db: 60.0,
            },
            FilterParameters {
                zero_crossings: 8,
                bits_per_sample: 12,
                stopband_attenuation_db: 120.0,
            },
        ]
    }

    #[test]
    fn lengths_match_filter_size() {
        for params in parameter_sets() {
            let tables = build_filter_tables(&params).unwrap();
            assert_eq!(tables.table().len(), params.filter_size());
            assert_eq!(tables.diffs().len(), params.filter_size());
        }
    }

    #[test]
    fn peak_is_exactly_one() {
        for params in parameter_sets() {
            let tables = build_filter_tables(&params).unwrap();
            assert_eq!(tables.table()[0], 1.0);
        }
    }

    #[test]
    fn last_difference_is_exactly_zero() {
        for params in parameter_sets() {
            let tables = build_filter_tables(&params).unwrap();
            assert_eq!(tables.diffs()[params.filter_size() - 1].to_bits(), 0.0_f32.to_bits());
        }
    }

    #[test]
    fn differences_match_adjacent_taps() {
        for params in parameter_sets() {
            let tables = build_filter_tables(&params).unwrap();
            let (table, diffs) = (tables.table(), tables.diffs());
            for i in 0..table.len() - 1 {
                assert_eq!(diffs[i], table[i + 1] - table[i], "mismatch at {}", i);
            }
        }
    }

    #[test]
    fn full_window_is_symmetric() {
        let beta = FilterParameters::default().kaiser_beta();
        for len in [3, 11, 2561, 5121] {
            let window = kaiser_window(len, beta);
            let lenm1 = len - 1;
            for k in 0..len {
                assert!((window[k] - window[lenm1 - k]).abs() < 1e-12);
            }
            assert!((window[lenm1 / 2] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn half_window_is_left_half_of_full_window() {
        let params = FilterParameters::default();
        let filter_size = params.filter_size();
        let lenm1 = filter_size - 1;
        let half = half_window(filter_size, params.kaiser_beta());
        let full = kaiser_window(2 * lenm1 + 1, params.kaiser_beta());

        assert_eq!(half[0], 1.0);
        assert_eq!(half[1], 1.0);
        for k in 1..filter_size {
            let expected = full[lenm1 + 1 - k] as f32;
            assert!((half[k] - expected).abs() < 1e-6, "slot {}", k);
        }
    }

    #[test]
    fn magnitude_decays_along_the_tail() {
        let params = FilterParameters::default();
        let tables = build_filter_tables(&params).unwrap();
        let table = tables.table();
        let spz = params.samples_per_zero_crossing();

        assert!(table.iter().all(|v| v.abs() <= 1.0));

        let segment_peaks: Vec<f32> = table[..params.filter_size() - 1]
            .chunks(spz)
            .map(|seg| seg.iter().fold(0.0_f32, |acc, v| acc.max(v.abs())))
            .collect();
        assert_eq!(segment_peaks.len(), params.zero_crossings);
        for pair in segment_peaks.windows(2) {
            assert!(pair[1] < pair[0], "{:?}", segment_peaks);
        }
        assert!(segment_peaks[params.zero_crossings - 1] < 0.01);
        assert!(table[params.filter_size() - 1].abs() < 1e-6);
    }

    #[test]
    fn zero_crossings_land_on_multiples_of_resolution() {
        let params = FilterParameters::default();
        let tables = build_filter_tables(&params).unwrap();
        let spz = params.samples_per_zero_crossing();
        for k in 1..=params.zero_crossings {
            assert!(tables.table()[k * spz].abs() < 1e-6, "crossing {}", k);
        }
    }

    #[test]
    fn builds_are_bit_identical() {
        let a = build_filter_tables(&FilterParameters::default()).unwrap();
        let b = build_filter_tables(&FilterParameters::default()).unwrap();
        let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(a.table()), bits(b.table()));
        assert_eq!(bits(a.diffs()), bits(b.diffs()));
    }

    #[test]
    fn interpolation_follows_difference_table() {
        let tables = build_filter_tables(&toy()).unwrap();
        let table = tables.table();

        for (i, &v) in table.iter().enumerate() {
            assert_eq!(tables.interpolate(i as f64), v);
        }

        let mid = tables.interpolate(2.5);
        assert!((mid - (table[2] + table[3]) / 2.0).abs() < 1e-7);
        assert_eq!(tables.interpolate(-2.5), mid);
        assert_eq!(tables.interpolate(1e9), table[table.len() - 1]);
        assert_eq!(tables.interpolate(f64::NAN), table[table.len() - 1]);
    }

    #[test]
    #[should_panic(expected = "filter size must be odd and at least 3")]
    fn single_tap_table_panics_with_message() {
        kaiser_and_sinc(1, 2, 7.0);
    }

    #[test]
    #[should_panic(expected = "filter size must be odd and at least 3")]
    fn even_table_panics_with_message() {
        half_window(10, 7.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let params = FilterParameters {
            stopband_attenuation_db: 40.0,
            ..FilterParameters::default()
        };
        assert!(matches!(
            build_filter_tables(&params),
            Err(GeneratorError::InvalidParameters(_))
        ));
    }
}
