//! C header layout, for resamplers that `#include` the tables.

use super::push_values;
use crate::filter::FilterTables;

pub fn render(tables: &FilterTables) -> String {
    let params = tables.params();
    let mut out = String::new();

    out.push_str(&format!(
        "/* DO NOT EDIT, THIS FILE WAS GENERATED BY {} {} */\n\
         /* Kaiser-windowed sinc, {:.1} dB stopband, beta = {:.6} */\n\
         \n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        params.stopband_attenuation_db,
        params.kaiser_beta()
    ));

    out.push_str(&format!(
        "#define RESAMPLER_ZERO_CROSSINGS {}\n\
         #define RESAMPLER_BITS_PER_SAMPLE {}\n\
         #define RESAMPLER_SAMPLES_PER_ZERO_CROSSING (1 << ((RESAMPLER_BITS_PER_SAMPLE / 2) + 1))\n\
         #define RESAMPLER_FILTER_SIZE ((RESAMPLER_SAMPLES_PER_ZERO_CROSSING * RESAMPLER_ZERO_CROSSINGS) + 1)\n\
         \n",
        params.zero_crossings, params.bits_per_sample
    ));

    push_array(&mut out, "ResamplerFilter", tables.table());
    push_array(&mut out, "ResamplerFilterDifference", tables.diffs());

    out.push_str("/* vi: set ts=4 sw=4 expandtab: */\n\n");
    out
}

fn push_array(out: &mut String, name: &str, values: &[f32]) {
    out.push_str(&format!(
        "static const float {}[RESAMPLER_FILTER_SIZE] = {{\n",
        name
    ));
    push_values(out, values, "f");
    out.push_str("};\n\n");
}
