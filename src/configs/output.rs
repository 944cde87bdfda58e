use serde::{Deserialize, Serialize};

use crate::emit::TableFormat;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: TableFormat,
    /// Write here instead of stdout.
    pub path: Option<String>,
}
