//! Table serialization — two source dialects:
//!
//! | Format | Output | Literal suffix |
//! |---|---|---|
//! | [`TableFormat::C`] | `#define`s + `static const float[]` | `f` |
//! | [`TableFormat::Rust`] | `pub const`s + `pub static [f32; N]` | `f32` |
//!
//! Both emit the sizes as formulas over `ZERO_CROSSINGS`/`BITS_PER_SAMPLE` so
//! the consuming build recomputes the filter size instead of trusting a
//! hardcoded length.

pub mod c_header;
pub mod rust_source;

use serde::{Deserialize, Serialize};

use crate::filter::FilterTables;

/// Values per output line.
pub const VALUES_PER_LINE: usize = 5;

/// Digits after the decimal point; enough to round-trip any `f32`.
pub const DECIMAL_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    C,
    Rust,
}

impl TableFormat {
    pub fn render(&self, tables: &FilterTables) -> String {
        match self {
            Self::C => c_header::render(tables),
            Self::Rust => rust_source::render(tables),
        }
    }
}

/// Appends `values` as comma-separated literals, indented four spaces and
/// wrapped every [`VALUES_PER_LINE`] values. No trailing comma.
pub(crate) fn push_values(out: &mut String, values: &[f32], suffix: &str) {
    for (i, value) in values.iter().enumerate() {
        let separator = match i {
            0 => "    ",
            _ if i % VALUES_PER_LINE == 0 => ",\n    ",
            _ => ", ",
        };
        out.push_str(&format!(
            "{}{:.prec$}{}",
            separator,
            value,
            suffix,
            prec = DECIMAL_DIGITS
        ));
    }
    out.push('\n');
}
