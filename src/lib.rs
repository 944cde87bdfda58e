//! Offline generator for the coefficient tables of a bandlimited-interpolation
//! (Kaiser-windowed sinc) resampler.
//!
//! [`filter`] computes the tables, [`emit`] renders them as embeddable source,
//! and [`run`] wires both to the config and the output sink.

pub mod common;
pub mod configs;
pub mod emit;
pub mod filter;

use std::io::Write;

use tracing::info;

use crate::common::GeneratorResult;
use crate::configs::Config;
use crate::filter::{FilterParameters, build_filter_tables};

/// Builds the tables described by `config` and renders them.
pub fn generate(config: &Config) -> GeneratorResult<String> {
    let params = FilterParameters::from(&config.filter);
    let tables = build_filter_tables(&params)?;

    info!(
        "Generated {} taps: {} zero crossings x {} samples, {:.1} dB (beta {:.6})",
        tables.len(),
        params.zero_crossings,
        params.samples_per_zero_crossing(),
        params.stopband_attenuation_db,
        params.kaiser_beta()
    );

    Ok(config.output.format.render(&tables))
}

/// Generates and writes to the configured path, or to `stdout`.
pub fn run(config: &Config, stdout: &mut impl Write) -> GeneratorResult<()> {
    let rendered = generate(config)?;

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())?;
            info!("Wrote {} bytes to {}", rendered.len(), path);
        }
        None => {
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
