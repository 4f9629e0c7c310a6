//! Conversion switches.

use serde::Deserialize;

/// Options recognised by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Emit one folder per top-level resource. When off, only the flat
    /// request list is produced.
    pub group: bool,
    /// Deterministic output: every id is `""` and every timestamp `0`.
    pub test: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            group: true,
            test: false,
        }
    }
}
