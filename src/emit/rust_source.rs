//! Rust module layout, meant to be pulled in with `include!`.

use super::push_values;
use crate::filter::FilterTables;

pub fn render(tables: &FilterTables) -> String {
    let params = tables.params();
    let mut out = String::new();

    out.push_str(&format!(
        "// DO NOT EDIT, THIS FILE WAS GENERATED BY {} {}\n\
         // Kaiser-windowed sinc, {:.1} dB stopband, beta = {:.6}\n\
         \n\
         pub const RESAMPLER_ZERO_CROSSINGS: usize = {};\n\
         pub const RESAMPLER_BITS_PER_SAMPLE: usize = {};\n\
         pub const RESAMPLER_SAMPLES_PER_ZERO_CROSSING: usize = 1 << ((RESAMPLER_BITS_PER_SAMPLE / 2) + 1);\n\
         pub const RESAMPLER_FILTER_SIZE: usize = (RESAMPLER_SAMPLES_PER_ZERO_CROSSING * RESAMPLER_ZERO_CROSSINGS) + 1;\n\
         \n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        params.stopband_attenuation_db,
        params.kaiser_beta(),
        params.zero_crossings,
        params.bits_per_sample
    ));

    push_array(&mut out, "RESAMPLER_FILTER", tables.table());
    push_array(&mut out, "RESAMPLER_FILTER_DIFFERENCE", tables.diffs());
    out
}

fn push_array(out: &mut String, name: &str, values: &[f32]) {
    out.push_str("#[allow(clippy::excessive_precision)]\n");
    out.push_str(&format!(
        "pub static {}: [f32; RESAMPLER_FILTER_SIZE] = [\n",
        name
    ));
    push_values(out, values, "f32");
    out.push_str("];\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterParameters, build_filter_tables};

    #[test]
    fn arrays_are_sized_by_formula() {
        let tables = build_filter_tables(&FilterParameters::default()).unwrap();
        let text = render(&tables);

        assert!(text.contains("pub const RESAMPLER_ZERO_CROSSINGS: usize = 5;\n"));
        assert!(text.contains("pub const RESAMPLER_BITS_PER_SAMPLE: usize = 16;\n"));
        assert!(text.contains("pub static RESAMPLER_FILTER: [f32; RESAMPLER_FILTER_SIZE] = [\n    1.000000000f32, "));
        assert!(text.contains("pub static RESAMPLER_FILTER_DIFFERENCE: [f32; RESAMPLER_FILTER_SIZE] = [\n"));
        assert!(text.ends_with("0.000000000f32\n];\n\n"));
    }
}
