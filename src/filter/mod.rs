//! Bandlimited-interpolation filter design:
//!
//! | Stage | Module |
//! |---|---|
//! | Table shape and Kaiser beta | [`params`] |
//! | I₀ series | [`bessel`] |
//! | Windowed sinc + differences | [`kaiser`] |

pub mod bessel;
pub mod constants;
pub mod kaiser;
pub mod params;

pub use bessel::bessel_i0;
pub use kaiser::{FilterTables, build_filter_tables, kaiser_and_sinc, kaiser_window};
pub use params::FilterParameters;
